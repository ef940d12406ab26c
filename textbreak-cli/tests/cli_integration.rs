//! Integration tests for the textbreak CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn textbreak() -> Command {
    let mut cmd = Command::cargo_bin("textbreak").unwrap();
    cmd.env_remove("TEXTBREAK_TAILORING");
    cmd
}

#[test]
fn test_analyze_sentences_default() {
    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"));

    // Without a tailoring "Dr." ends a sentence
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\nDr.\n"))
        .stdout(predicate::str::contains("He bought some milk and eggs."));
}

#[test]
fn test_analyze_with_english_tailoring() {
    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-t")
        .arg("en");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dr. Smith went to the store."))
        .stdout(predicate::str::contains("The total was $4.50, which seemed fair!"));
}

#[test]
fn test_default_only_ignores_tailoring() {
    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-t")
        .arg("en")
        .arg("--default-only");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dr. Smith").not());
}

#[test]
fn test_custom_tailoring_config() {
    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("--tailoring-config")
        .arg(fixture_path("custom-tailoring.toml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dr. Smith went to the store."));
}

#[test]
fn test_tailoring_options_conflict() {
    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-t")
        .arg("en")
        .arg("--tailoring-config")
        .arg(fixture_path("custom-tailoring.toml"));

    cmd.assert().failure();
}

#[test]
fn test_unknown_tailoring() {
    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-t")
        .arg("xx");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("tailoring 'xx' is not available"));
}

#[test]
fn test_analyze_japanese_text() {
    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("japanese-sample.txt"))
        .arg("-t")
        .arg("ja");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("これはテストです。"))
        .stdout(predicate::str::contains(
            "日本語の文章を正しく分割できるか確認しています。",
        ));
}

#[test]
fn test_words_unit() {
    let mut cmd = textbreak();
    cmd.arg("analyze").arg("-i").arg("-").arg("-u").arg("words");
    cmd.write_stdin("isn't it");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("==> <stdin> <=="))
        .stdout(predicate::str::contains("\nisn't\nit\n"));
}

#[test]
fn test_lines_unit() {
    let mut cmd = textbreak();
    cmd.arg("analyze").arg("-i").arg("-").arg("-u").arg("lines");
    cmd.write_stdin("one two");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\none\ntwo\n"));
}

#[test]
fn test_attributes_unit() {
    let mut cmd = textbreak();
    cmd.arg("analyze").arg("-i").arg("-").arg("-u").arg("attributes");
    cmd.write_stdin("a\nb");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("U+0061  GWS-  none"))
        .stdout(predicate::str::contains("U+0062  GWS-  forced"));
}

#[test]
fn test_json_output() {
    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-f")
        .arg("json");

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert!(value[0]["source"]
        .as_str()
        .unwrap()
        .ends_with("english-sample.txt"));
    let segments = value[0]["segments"].as_array().unwrap();
    assert!(!segments.is_empty());
    assert_eq!(segments[0]["start"], 0);
    assert_eq!(segments[0]["text"], "Dr. ");
}

#[test]
fn test_markdown_output() {
    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("japanese-sample.txt"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total entries:"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = textbreak();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-t")
        .arg("en")
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Dr. Smith went to the store."));
}

#[test]
fn test_glob_pattern() {
    let mut cmd = textbreak();
    cmd.arg("analyze").arg("-i").arg(fixture_path("*.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("english-sample.txt"))
        .stdout(predicate::str::contains("japanese-sample.txt"));
}

#[test]
fn test_missing_input() {
    let mut cmd = textbreak();
    cmd.arg("analyze").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_list_tailorings() {
    let mut cmd = textbreak();
    cmd.arg("list").arg("tailorings");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("Japanese"));
}

#[test]
fn test_list_units() {
    let mut cmd = textbreak();
    cmd.arg("list").arg("units");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("attributes"));
}

#[test]
fn test_help() {
    let mut cmd = textbreak();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("list"));
}
