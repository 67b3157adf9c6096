//! Command-line interface for lexcov
//! This binary measures how much of each listed document is covered by a lexicon.
//!
//! Usage:
//!   lexcov --dict `<lexicon>` --fileindex `<index>` [--format `<format>`]   - Analyze every listed document
//!
//! Configuration is layered: built-in defaults, then `./lexcov.toml` if present,
//! then `--config <file>`, then individual flags.

use clap::{Arg, ArgAction, ArgMatches, Command};
use lexcov::io::{error_chain, load_lexicon_file, load_stopword_file, read_file_index};
use lexcov::{Analyzer, Reporter, StopwordSet};
use lexcov_config::{FlagOverrides, LexcovConfig, Loader};
use std::error::Error;
use std::io::{BufWriter, IsTerminal, Write};
use std::process::ExitCode;
use tracing::Level;

fn build_cli() -> Command {
    Command::new("lexcov")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Measure lexicon coverage of plain-text documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("dict")
                .long("dict")
                .short('d')
                .help("Lexicon file, one word per line")
                .required(true),
        )
        .arg(
            Arg::new("fileindex")
                .long("fileindex")
                .short('i')
                .help("File listing the documents to analyze, one path per line")
                .required(true),
        )
        .arg(
            Arg::new("stopwords")
                .long("stopwords")
                .short('s')
                .help("Stopword file replacing the built-in English list"),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .short('e')
                .help("Text encoding of all input files")
                .value_parser(["utf-8", "latin-1"]),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "csv", "json"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", error_chain(e.as_ref()));
            return ExitCode::FAILURE;
        }
    };

    match handle_analyze(&matches, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", error_chain(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only carries reports.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<LexcovConfig, Box<dyn Error>> {
    let mut loader = Loader::new().with_local_file(".");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let flags = FlagOverrides {
        encoding: matches.get_one::<String>("encoding").map(String::as_str),
        stopword_file: matches.get_one::<String>("stopwords").map(String::as_str),
        format: matches.get_one::<String>("format").map(String::as_str),
    };
    Ok(loader.with_flags(flags)?.build()?)
}

/// Load the run-wide inputs, then analyze every listed document
fn handle_analyze(matches: &ArgMatches, config: &LexcovConfig) -> Result<(), Box<dyn Error>> {
    // Both are required by clap
    let (Some(dict), Some(index)) = (
        matches.get_one::<String>("dict"),
        matches.get_one::<String>("fileindex"),
    ) else {
        return Err("--dict and --fileindex are required".into());
    };
    let encoding = config.analysis.encoding;

    let lexicon = load_lexicon_file(dict, encoding)?;
    let stopwords = match &config.analysis.stopword_file {
        Some(path) => load_stopword_file(path, encoding)?,
        None => StopwordSet::english(),
    };
    let documents = read_file_index(index, encoding)?;

    let analyzer = Analyzer::new(lexicon, stopwords)
        .with_encoding(encoding)
        .with_progress_interval(config.report.progress_interval);
    let reporter = Reporter::new(config.report.format, config.report.style());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    analyzer.run(&documents, &reporter, &mut out)?;
    out.flush()?;
    Ok(())
}
