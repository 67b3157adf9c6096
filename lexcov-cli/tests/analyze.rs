use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("temp dir"),
        };
        fixture.write("lexicon.txt", b"Apple\nbanana\ncherry\n");
        fixture
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    fn index(&self, documents: &[&Path]) -> PathBuf {
        let listing: Vec<String> = documents.iter().map(|p| p.display().to_string()).collect();
        self.write("index.txt", listing.join("\n").as_bytes())
    }
}

#[test]
fn analyze_text_report_via_cli() {
    let fixture = Fixture::new();
    let doc = fixture.write("book.txt", b"The apple and the banana-cherry pie. 1999");
    let index = fixture.index(&[&doc]);

    let mut cmd = cargo_bin_cmd!("lexcov");
    cmd.arg("--dict")
        .arg(fixture.path("lexicon.txt"))
        .arg("--fileindex")
        .arg(&index);

    // lex: apple banana cherry; notlex: pie; discard: ""; stop: the and
    let output_pred = predicate::str::contains("[UNIQUE WORD COUNT]")
        .and(predicate::str::contains("IN LEXICON = 3 (42.86%)"))
        .and(predicate::str::contains(format!(
            "75.00,80.00,75.00,80.00,{}",
            doc.display()
        )))
        .and(predicate::str::contains("ANALYZED = 1"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn missing_documents_do_not_abort_the_run() {
    let fixture = Fixture::new();
    let missing = fixture.path("missing.txt");
    let doc = fixture.write("book.txt", b"apple pie");
    let index = fixture.index(&[&missing, &doc]);

    let mut cmd = cargo_bin_cmd!("lexcov");
    cmd.args(["-f", "csv", "-d"])
        .arg(fixture.path("lexicon.txt"))
        .arg("-i")
        .arg(&index);

    cmd.assert()
        .success()
        .stdout(format!("50.00,100.00,50.00,100.00,{}\n", doc.display()))
        .stderr(predicate::str::contains("missing input"));
}

#[test]
fn undecodable_document_is_skipped_unless_latin1() {
    let fixture = Fixture::new();
    let doc = fixture.write("latin.txt", b"caf\xe9 apple");
    let index = fixture.index(&[&doc]);

    let mut strict = cargo_bin_cmd!("lexcov");
    strict
        .args(["-f", "json", "-d"])
        .arg(fixture.path("lexicon.txt"))
        .arg("-i")
        .arg(&index);
    strict
        .assert()
        .success()
        .stdout(predicate::str::contains("\"error\":\"encoding-error\""));

    let mut lenient = cargo_bin_cmd!("lexcov");
    lenient
        .args(["-f", "csv", "-e", "latin-1", "-d"])
        .arg(fixture.path("lexicon.txt"))
        .arg("-i")
        .arg(&index);
    lenient
        .assert()
        .success()
        .stdout(predicate::str::starts_with("50.00,100.00,50.00,100.00,"));
}

#[test]
fn stopword_only_document_reports_undefined() {
    let fixture = Fixture::new();
    let doc = fixture.write("stops.txt", b"the of and");
    let index = fixture.index(&[&doc]);

    let mut cmd = cargo_bin_cmd!("lexcov");
    cmd.args(["-f", "csv", "-d"])
        .arg(fixture.path("lexicon.txt"))
        .arg("-i")
        .arg(&index);

    cmd.assert()
        .success()
        .stdout(format!("n/a,n/a,n/a,n/a,{}\n", doc.display()));
}

#[test]
fn custom_stopwords_and_config_file() {
    let fixture = Fixture::new();
    let doc = fixture.write("book.txt", b"the apple");
    let index = fixture.index(&[&doc]);
    let stopwords = fixture.write("stop.txt", b"apple\n");
    let config = fixture.write(
        "custom.toml",
        b"[report]\nformat = \"csv\"\nprecision = 0\nundefined_marker = \"-\"\n",
    );

    let mut cmd = cargo_bin_cmd!("lexcov");
    cmd.arg("-c")
        .arg(&config)
        .arg("-s")
        .arg(&stopwords)
        .arg("-d")
        .arg(fixture.path("lexicon.txt"))
        .arg("-i")
        .arg(&index);

    // "apple" is now a stopword and "the" is not in the lexicon
    cmd.assert()
        .success()
        .stdout(format!("0,100,0,100,{}\n", doc.display()));
}

#[test]
fn missing_lexicon_is_fatal() {
    let fixture = Fixture::new();
    let index = fixture.index(&[]);

    let mut cmd = cargo_bin_cmd!("lexcov");
    cmd.arg("-d")
        .arg(fixture.path("no-such-lexicon.txt"))
        .arg("-i")
        .arg(&index);

    // the io error follows the path exactly once
    let cause_once = predicate::function(|stderr: &str| stderr.matches("os error").count() == 1);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read lexicon"))
        .stderr(predicate::str::contains("no-such-lexicon.txt: "))
        .stderr(cause_once);
}

#[test]
fn numbers_only_document_reports_undefined() {
    let fixture = Fixture::new();
    let doc = fixture.write("numbers.txt", b"123 456 -- 7");
    let index = fixture.index(&[&doc]);

    let mut cmd = cargo_bin_cmd!("lexcov");
    cmd.args(["-f", "csv", "-d"])
        .arg(fixture.path("lexicon.txt"))
        .arg("-i")
        .arg(&index);

    cmd.assert()
        .success()
        .stdout(format!("n/a,n/a,n/a,n/a,{}\n", doc.display()));
}

#[test]
fn local_config_in_working_directory() {
    let fixture = Fixture::new();
    let doc = fixture.write("book.txt", b"apple pie");
    let index = fixture.index(&[&doc]);
    fixture.write("lexcov.toml", b"[report]\nformat = \"csv\"\nprecision = 1\n");

    let mut cmd = cargo_bin_cmd!("lexcov");
    cmd.current_dir(fixture.dir.path())
        .arg("-d")
        .arg(fixture.path("lexicon.txt"))
        .arg("-i")
        .arg(&index);

    cmd.assert()
        .success()
        .stdout(format!("50.0,100.0,50.0,100.0,{}\n", doc.display()));
}

#[test]
fn requires_dict_and_index() {
    let mut cmd = cargo_bin_cmd!("lexcov");
    cmd.arg("--dict").arg("lexicon.txt");
    cmd.assert().failure().code(2);
}
