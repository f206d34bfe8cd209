//! File-level tests for reading and normalizing member data.

use std::fs;

use member_ingest::{IngestError, normalize_record, read_raw_records};
use member_model::{IngestOptions, RawRecord, Schema};
use proptest::prelude::*;

const VALID_LINE: &str = "York|Huang|RevenueNSW|2111980|89000.56789|1 George st|Sydney|NSW|2000|0298765432|0404123456|york.huang@mycom.com";

#[test]
fn reads_and_normalizes_a_member_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("member-data.csv");
    fs::write(
        &path,
        format!("{VALID_LINE}\nshort|line\n\"Adam \"|George|Acme||||||||| \n"),
    )
    .unwrap();

    let raws = read_raw_records(&path, &IngestOptions::default()).unwrap();
    assert_eq!(raws.len(), 3);

    let schema = Schema::member();
    let records: Vec<_> = raws
        .iter()
        .filter_map(|raw| normalize_record(raw, &schema))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text("Email"), Some("york.huang@mycom.com"));
    assert_eq!(records[1].text("FirstName"), Some("Adam"));
    assert_eq!(records[1].text("Email"), Some(""));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let err = read_raw_records(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn blank_lines_are_read_and_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gaps.csv");
    fs::write(&path, format!("\n{VALID_LINE}\n\n{VALID_LINE}\n")).unwrap();
    let raws = read_raw_records(&path, &IngestOptions::default()).unwrap();
    assert_eq!(raws.len(), 4);

    let schema = Schema::member();
    let kept: Vec<_> = raws
        .iter()
        .filter(|raw| normalize_record(raw, &schema).is_some())
        .map(|raw| raw.line)
        .collect();
    assert_eq!(kept, vec![Some(2), Some(4)]);
}

proptest! {
    #[test]
    fn normalization_succeeds_iff_lengths_match(
        values in prop::collection::vec("[ a-zA-Z0-9]{0,8}", 0..20)
    ) {
        let schema = Schema::member();
        let raw: RawRecord = values.iter().cloned().collect();
        let normalized = normalize_record(&raw, &schema);
        prop_assert_eq!(normalized.is_some(), values.len() == schema.len());

        if let Some(record) = normalized {
            for (name, value) in schema.names().zip(&values) {
                prop_assert_eq!(record.text(name), Some(value.trim()));
            }
            prop_assert_eq!(record.len(), schema.len());
        }
    }
}
