//! File-to-sink runs against the JSON-lines sink.

use std::fs;
use std::path::Path;

use member_cli::pipeline::{SinkTarget, process_file, transform_file};
use member_model::{IngestOptions, PipelineConfig};
use serde_json::Value;
use tempfile::TempDir;

const MEMBERS: &str = "\
york|huang|RevenueNSW|2111980|89000.56789|1 Main St|Sydney|NSW|2000|0299990000|0400000000|york@example.com
George|Adam|Acme|as2111980|5122190.|||||||
too|few|fields
";

fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read_documents(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn loads_valid_records_into_jsonl() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "members.csv", MEMBERS);
    let output = dir.path().join("members.jsonl");

    let summary = process_file(
        &input,
        &PipelineConfig::default(),
        &SinkTarget::JsonLines(output.clone()),
    )
    .unwrap();

    assert_eq!(summary.read, 3);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.transformed, 2);
    assert_eq!(summary.inserted, Some(2));
    assert!(!summary.is_partial());

    let documents = read_documents(&output);
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["FullName"], "York Huang");
    assert_eq!(documents[0]["Salary"], "$89,000.5679");
    assert_eq!(documents[0]["SalaryBucket"], "B");
    assert_eq!(documents[0]["Age"], 43);
    assert_eq!(documents[0]["Address"]["Suburb"], "Sydney");
    assert_eq!(documents[1]["FullName"], "George Adam");
    assert_eq!(documents[1]["Salary"], "$5,122,190.0000");
    assert_eq!(documents[1]["SalaryBucket"], "C");
    assert!(documents[1].get("BirthDate").is_none());
    assert!(documents[1].get("Age").is_none());
    assert!(documents[1].get("Address").is_none());
}

#[test]
fn appends_across_files() {
    let dir = TempDir::new().unwrap();
    let first = write_input(&dir, "first.csv", MEMBERS);
    let second = write_input(&dir, "second.csv", MEMBERS);
    let output = dir.path().join("members.jsonl");
    let target = SinkTarget::JsonLines(output.clone());
    let config = PipelineConfig::default();

    process_file(&first, &config, &target).unwrap();
    process_file(&second, &config, &target).unwrap();

    assert_eq!(read_documents(&output).len(), 4);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "members.csv", MEMBERS);

    let summary = process_file(&input, &PipelineConfig::default(), &SinkTarget::DryRun).unwrap();

    assert_eq!(summary.transformed, 2);
    assert_eq!(summary.inserted, None);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn file_without_valid_records_inserts_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad.csv", "a|b\nc|d\n");
    let output = dir.path().join("members.jsonl");

    let summary = process_file(
        &input,
        &PipelineConfig::default(),
        &SinkTarget::JsonLines(output.clone()),
    )
    .unwrap();

    assert_eq!(summary.rejected, 2);
    assert_eq!(summary.inserted, Some(0));
    assert!(read_documents(&output).is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let error = process_file(
        &dir.path().join("absent.csv"),
        &PipelineConfig::default(),
        &SinkTarget::DryRun,
    )
    .unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn custom_delimiter() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comma.csv", "ann,lee,Acme,01011990,1000,,,,,,,\n");
    let config =
        PipelineConfig::default().with_ingest(IngestOptions::new().with_delimiter(',').unwrap());

    let batch = transform_file(&input, &config).unwrap();

    assert_eq!(batch.records.len(), 1);
    insta::assert_json_snapshot!("comma_delimited_member", batch.records[0]);
}

#[test]
fn blank_lines_count_as_rejected() {
    let dir = TempDir::new().unwrap();
    let member = MEMBERS.lines().next().unwrap();
    let input = write_input(&dir, "gaps.csv", &format!("{member}\n\n{member}\n"));

    let summary = process_file(&input, &PipelineConfig::default(), &SinkTarget::DryRun).unwrap();

    assert_eq!(summary.read, 3);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.transformed, 2);
}
