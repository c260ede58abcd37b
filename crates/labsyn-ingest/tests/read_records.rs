use std::fs;

use labsyn_ingest::{IngestError, read_records};
use labsyn_model::{FieldValue, fields};

#[test]
fn reads_listing_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("labs.csv");
    fs::write(
        &path,
        "identifier,labs,lab_range,reportable\n\
         A1,Hemoglobin A1c,4-6,TRUE\n\
         A2,\"Bilirubin, Total\",0.1-1.2,false\n\
         A3,Potassium,5,\n",
    )
    .expect("write csv");

    let records = read_records(&path).expect("read csv");
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].text(fields::IDENTIFIER), Some("A1"));
    assert_eq!(records[0].get("reportable"), Some(&FieldValue::Bool(true)));
    assert_eq!(records[1].labs(), Some("Bilirubin, Total"));
    assert_eq!(records[1].get("reportable"), Some(&FieldValue::Bool(false)));
    // a bare number is typed as a number, not range text
    assert_eq!(records[2].lab_range(), Some(&FieldValue::Number(5.0)));
    assert_eq!(records[2].get("reportable"), Some(&FieldValue::Null));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = read_records(&dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn empty_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").expect("write csv");

    let err = read_records(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
    assert!(err.to_string().contains("empty.csv"));
}
