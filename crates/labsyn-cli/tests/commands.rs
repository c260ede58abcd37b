//! Integration tests for the scan and show commands.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use labsyn_cli::cli::{Cli, Command, ScanArgs, ShowArgs};
use labsyn_cli::commands::{run_scan, run_show};
use labsyn_cli::summary::render_json;
use labsyn_model::SynonymFlag;

const LISTING: &str = "\
identifier,labs,lab_range,units
L1,Hemoglobin A1c,4-6,%
L2,Hemoglobin A1C,40-60,mmol/mol
L3,Glucose,70-100,mg/dL
";

fn write_listing(dir: &TempDir) -> String {
    let path = dir.path().join("labs.csv");
    fs::write(&path, LISTING).expect("write listing");
    path.to_string_lossy().into_owned()
}

fn scan_args(args: &[&str]) -> ScanArgs {
    let cli = Cli::try_parse_from(["labsyn", "scan"].iter().chain(args)).expect("parse args");
    match cli.command {
        Command::Scan(args) => args,
        Command::Show(_) => panic!("expected scan command"),
    }
}

fn show_args(args: &[&str]) -> ShowArgs {
    let cli = Cli::try_parse_from(["labsyn", "show"].iter().chain(args)).expect("parse args");
    match cli.command {
        Command::Show(args) => args,
        Command::Scan(_) => panic!("expected show command"),
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read export")
}

#[test]
fn scan_writes_export_next_to_input() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);

    let result = run_scan(&scan_args(&[input.as_str()])).expect("scan");

    let output = result.output.expect("export path");
    assert_eq!(output, dir.path().join("updated_lab_listing.csv"));
    insta::assert_snapshot!(read(&output), @r"
    possible_synonyms,synonyms,labs,lab_range,units,id
    TRUE,Hemoglobin A1C,Hemoglobin A1c,4-6,%,0
    TRUE,Hemoglobin A1c,Hemoglobin A1C,40-60,mmol/mol,1
    FALSE,,Glucose,70-100,mg/dL,2
    ");
    assert_eq!(result.table.count_with_flag(SynonymFlag::True), 2);
    assert_eq!(result.removed, 0);
}

#[test]
fn scan_honors_output_flag() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);
    let target = dir.path().join("curated.csv");
    let target_arg = target.to_string_lossy().into_owned();

    let result = run_scan(&scan_args(&[input.as_str(), "--output", target_arg.as_str()])).expect("scan");

    assert_eq!(result.output.as_deref(), Some(target.as_path()));
    assert!(read(&target).starts_with("possible_synonyms,synonyms,"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);

    let result = run_scan(&scan_args(&[input.as_str(), "--dry-run"])).expect("scan");

    assert!(result.output.is_none());
    assert!(!dir.path().join("updated_lab_listing.csv").exists());
    assert_eq!(result.table.len(), 3);
}

#[test]
fn removal_clears_synonym_but_keeps_tab() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);

    let result = run_scan(&scan_args(&[input.as_str(), "--remove", "0=Hemoglobin A1C"])).expect("scan");

    assert_eq!(result.removed, 1);
    assert!(result.table.synonyms_of(0).expect("row 0").is_empty());
    assert_eq!(
        result.table.synonyms_of(1).expect("row 1"),
        vec!["Hemoglobin A1c".to_string()]
    );
    let export = read(&result.output.expect("export path"));
    assert!(export.contains("\nTRUE,,Hemoglobin A1c,4-6,%,0\n"));
}

#[test]
fn unlisted_removal_changes_nothing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);

    let result = run_scan(&scan_args(&[input.as_str(), "--dry-run", "--remove", "2=Glucose"])).expect("scan");

    assert_eq!(result.removed, 0);
}

#[test]
fn unknown_row_id_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);

    let error = run_scan(&scan_args(&[input.as_str(), "--dry-run", "--remove", "9=Glucose"]))
        .expect_err("unknown id");

    assert!(format!("{error:#}").contains("row 9"));
}

#[test]
fn min_similarity_out_of_range_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);

    let error = run_scan(&scan_args(&[input.as_str(), "--min-similarity", "1.5"])).expect_err("bad score");

    assert!(error.to_string().contains("--min-similarity"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("missing.csv").to_string_lossy().into_owned();

    let error = run_show(&show_args(&[input.as_str()])).expect_err("missing file");

    assert!(format!("{error:#}").contains("missing.csv"));
}

#[test]
fn show_never_writes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);

    let result = run_show(&show_args(&[input.as_str(), "--view", "all"])).expect("show");

    assert!(result.output.is_none());
    assert_eq!(result.table.count_with_flag(SynonymFlag::False), 1);
    assert!(!dir.path().join("updated_lab_listing.csv").exists());
}

#[test]
fn strict_threshold_flags_nothing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);

    let result = run_show(&show_args(&[input.as_str(), "--min-similarity", "0.95"])).expect("show");

    assert_eq!(result.table.count_with_flag(SynonymFlag::True), 0);
}

#[test]
fn show_json_renders_scanned_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_listing(&dir);
    let args = show_args(&[input.as_str(), "--json"]);
    assert!(args.json);

    let result = run_show(&args).expect("show");
    let json = render_json(&result).expect("render json");

    assert!(json.starts_with('['));
    assert!(json.contains("\"synonyms\": \"Hemoglobin A1C\""));
    assert!(json.contains("\"units\": \"mg/dL\""));
}
