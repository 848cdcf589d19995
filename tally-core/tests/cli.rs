//! CLI contract tests for `tally`.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const SAMPLE: &str = "sentence,length\n\
    The cat sat.,3\n\
    The dog sat on the mat!,6\n\
    A bird flew over the house today,7\n\
    Short one,2\n";

fn tally() -> assert_cmd::Command {
    cargo_bin_cmd!("tally")
}

fn write_sample(dir: &Path) -> String {
    let path = dir.join("data.csv");
    fs::write(&path, SAMPLE).expect("write sample");
    path.to_str().expect("utf-8 path").to_owned()
}

#[test]
fn report_prints_summary_and_tables() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = write_sample(tmp.path());

    tally()
        .args(["report", &data])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 records, mean length 4.50, shortest 2, longest 7"))
        .stdout(predicate::str::contains("== Top words =="))
        .stdout(predicate::str::contains("== Top bigrams =="))
        .stdout(predicate::str::contains("== Length distribution =="))
        .stdout(predicate::str::contains("== Preview (4 of 4) =="));
}

#[test]
fn report_json_respects_filter() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = write_sample(tmp.path());

    let out = tally()
        .args(["report", &data, "--min", "3", "--max", "6", "--json", "--top-words", "2"])
        .output()
        .expect("run tally");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json report");
    assert_eq!(v["summary"]["records"], 2);
    assert_eq!(v["summary"]["min_length"], 3);
    assert_eq!(v["summary"]["max_length"], 6);
    assert_eq!(v["top_words"]["label_column"], "word");
    assert_eq!(v["top_words"]["rows"][0]["label"], "the");
    assert_eq!(v["top_words"]["rows"][0]["value"], 3);
    assert_eq!(v["top_words"]["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["top_words"]["truncated"], true);
}

#[test]
fn word_cloud_can_be_disabled() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = write_sample(tmp.path());

    let out = tally()
        .args(["report", &data, "--json", "--no-word-cloud"])
        .output()
        .expect("run tally");
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json report");
    assert!(v["word_cloud"].is_null());
}

#[test]
fn config_file_sets_defaults_and_flags_override() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = write_sample(tmp.path());
    let cfg = tmp.path().join("tally.json");
    fs::write(&cfg, r#"{ "top_bigrams": 1, "enable_word_cloud": false }"#).expect("write config");

    let out = tally()
        .args(["report", &data, "--json", "--config", cfg.to_str().unwrap(), "--word-cloud"])
        .output()
        .expect("run tally");
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json report");
    assert_eq!(v["top_bigrams"]["rows"].as_array().map(Vec::len), Some(1));
    assert!(v["word_cloud"].is_object());
}

#[test]
fn missing_text_column_fails_with_columns_listed() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = write_sample(tmp.path());

    tally()
        .args(["report", &data, "--text-field", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing text column \"text\""))
        .stderr(predicate::str::contains("sentence, length"));
}

#[test]
fn empty_input_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("empty.csv");
    fs::write(&path, "sentence,length\n").expect("write");

    tally()
        .args(["report", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rows"));
}

#[test]
fn inverted_range_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = write_sample(tmp.path());

    tally()
        .args(["report", &data, "--min", "8", "--max", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min 8 > max 5"));
}

#[test]
fn empty_filter_result_reports_not_enough_data() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = write_sample(tmp.path());

    tally()
        .args(["report", &data, "--min", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 records"))
        .stdout(predicate::str::contains("(not enough data)"));
}

#[test]
fn export_csv_writes_filtered_subset() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = write_sample(tmp.path());
    let out = tmp.path().join("filtered.csv");

    tally()
        .args(["report", &data, "--min", "6", "--export-csv", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).expect("export"),
        "sentence,length\n\
         The dog sat on the mat!,6\n\
         A bird flew over the house today,7\n"
    );
}

#[test]
fn export_json_writes_objects() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = write_sample(tmp.path());
    let out = tmp.path().join("filtered.json");

    tally()
        .args(["report", &data, "--max", "2", "--export-json", out.to_str().unwrap()])
        .assert()
        .success();

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("export")).expect("json");
    assert_eq!(v, serde_json::json!([{ "sentence": "Short one", "length": 2 }]));
}

#[test]
fn build_then_report() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let raw = tmp.path().join("raw.txt");
    let csv = tmp.path().join("data.csv");
    fs::write(&raw, "Ọma ẹfu gbe.\n\nAbọ ʼnyọ, ene!\nOk\n").expect("write raw");

    tally()
        .args([
            "build",
            raw.to_str().unwrap(),
            csv.to_str().unwrap(),
            "--clean",
            "--min-length",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 sentences to data.csv"));

    assert_eq!(
        fs::read_to_string(&csv).expect("built csv"),
        "sentence,length\nọma ẹfu gbe,3\nabọ nyọ ene,3\n"
    );

    tally()
        .args(["report", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records"));
}

#[test]
fn missing_input_file_fails() {
    tally()
        .args(["report", "/definitely/not/here.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}
