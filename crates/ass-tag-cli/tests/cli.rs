use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn ass_tags() -> Command {
    cargo_bin_cmd!("ass-tags")
}

fn lines_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn normalize_reads_stdin() {
    ass_tags()
        .arg("normalize")
        .write_stdin("{\\pos( 1 , 2 )\\c&H00ff00&}Hi\n{}plain\n")
        .assert()
        .success()
        .stdout("{\\pos(1,2)\\c&H00FF00&}Hi\nplain\n");
}

#[test]
fn normalize_warns_on_bad_lines() {
    ass_tags()
        .arg("normalize")
        .write_stdin("{\\xyz}a\n")
        .assert()
        .success()
        .stdout("{\\xyz}a\n")
        .stderr(predicate::str::contains("unknown tag"));
}

#[test]
fn plain_reads_file() {
    let file = lines_file("-Hey\\N{\\rAlternate}-Huh?\n{\\p1}m 0 0 l 1 1{\\p0}x\n");
    ass_tags()
        .arg("plain")
        .arg(file.path())
        .assert()
        .success()
        .stdout("-Hey\n-Huh?\nx\n");
}

#[test]
fn parse_json_output() {
    ass_tags()
        .args(["parse", "--json"])
        .write_stdin("{\\b1}x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bold").and(predicate::str::contains("\"x\"")));
}

#[test]
fn parse_errors_fail() {
    ass_tags()
        .arg("parse")
        .write_stdin("{\\pos(1)}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn fonts_report() {
    let file = lines_file("a{\\b1}b\n{\\fnVerdana}c\n");
    ass_tags()
        .args(["fonts", "--font", "Times"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"Times\"")
                .and(predicate::str::contains("\"Times-bold\""))
                .and(predicate::str::contains("\"Verdana\"")),
        );
}

#[test]
fn missing_file_fails() {
    ass_tags()
        .args(["plain", "/nonexistent/lines.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}
