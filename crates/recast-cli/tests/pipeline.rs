//! Integration tests for the rewrite pipelines.

use std::fs;

use recast_cli::pipeline::{CsvJob, YearsJob, run_csv, run_years};
use recast_ingest::{CsvOptions, IngestError, LineTerminator};
use recast_model::{RuleSet, TextEncoding, WidthPolicy, YearShift};
use tempfile::TempDir;

#[test]
fn test_csv_pipeline_rewrites_pivot_table() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pivot_table.csv");
    let output = dir.path().join("pivot_table_transformed.csv");
    fs::write(
        &input,
        "Region,Company,Plant,Product,Date\r\n\
         America,Acme GmbH,1010US,Women basics,01/02/2020\r\n\
         Europe,Acme GmbH,1040DE,\"Men basics, M\",01/02/2021\r\n",
    )
    .unwrap();

    let job = CsvJob {
        input: input.clone(),
        output: output.clone(),
        ..CsvJob::default()
    };
    let outcome = run_csv(&job).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Region,Company,Plant,Product,Date\r\n\
         Malaysia,Acme,1010MY,Red Ink,01/02/2025\r\n\
         Singapore,Acme,1040SG,\"Green Ink, M\",01/02/2021\r\n"
    );
    assert_eq!(outcome.output.as_deref(), Some(output.as_path()));
    assert_eq!(outcome.rule_count, 23);
    assert_eq!(outcome.stats.rows, 3);
    assert_eq!(outcome.stats.cells, 15);
    assert_eq!(outcome.stats.cells_changed, 9);
}

#[test]
fn test_csv_pipeline_keeps_blank_lines() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pivot_table.csv");
    let output = dir.path().join("pivot_table_transformed.csv");
    fs::write(&input, "America\r\n\r\nEurope\r\n").unwrap();

    let job = CsvJob {
        input,
        output: output.clone(),
        ..CsvJob::default()
    };
    let outcome = run_csv(&job).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Malaysia\r\n\r\nSingapore\r\n"
    );
    assert_eq!(outcome.stats.rows, 3);
}

#[test]
fn test_csv_pipeline_with_custom_rules_and_lf() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "A,x\nB\n").unwrap();

    let job = CsvJob {
        input,
        output: output.clone(),
        rules: RuleSet::from_pairs([("A", "B"), ("B", "C")]).unwrap(),
        options: CsvOptions::default().with_terminator(LineTerminator::Lf),
        dry_run: false,
    };
    run_csv(&job).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "C,x\nC\n");
}

#[test]
fn test_csv_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pivot_table.csv");
    let output = dir.path().join("pivot_table_transformed.csv");
    fs::write(&input, "America\n").unwrap();

    let job = CsvJob {
        input,
        output: output.clone(),
        dry_run: true,
        ..CsvJob::default()
    };
    let outcome = run_csv(&job).unwrap();

    assert!(outcome.output.is_none());
    assert_eq!(outcome.stats.replacements, 1);
    assert!(!output.exists());
}

#[test]
fn test_csv_missing_input_fails_with_not_found() {
    let dir = TempDir::new().unwrap();
    let job = CsvJob {
        input: dir.path().join("pivot_table.csv"),
        output: dir.path().join("out.csv"),
        ..CsvJob::default()
    };
    let err = run_csv(&job).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn test_years_pipeline_shifts_latin1_text() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("InvoiceData.txt");
    let output = dir.path().join("InvoiceData_Updated.txt");
    fs::write(
        &input,
        b"Invoice 2019, ref 2021\nKunde: M\xFCller \xA3 20191234\n".to_vec(),
    )
    .unwrap();

    let job = YearsJob {
        input,
        output: output.clone(),
        ..YearsJob::default()
    };
    let outcome = run_years(&job).unwrap();

    assert_eq!(
        fs::read(&output).unwrap(),
        b"Invoice 2023, ref 2025\nKunde: M\xFCller \xA3 20191234\n".to_vec()
    );
    assert_eq!(outcome.stats.matches, 2);
    assert_eq!(outcome.offset, 4);
}

#[test]
fn test_years_pipeline_leaves_non_ascii_digits_alone() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "Invoice 2019 / 20\u{0662}\u{0663}").unwrap();

    let job = YearsJob {
        input,
        output: output.clone(),
        encoding: TextEncoding::Utf8,
        ..YearsJob::default()
    };
    let outcome = run_years(&job).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Invoice 2023 / 20\u{0662}\u{0663}"
    );
    assert_eq!(outcome.stats.matches, 1);
}

#[test]
fn test_years_width_change_aborts_before_writing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "9999").unwrap();

    let job = YearsJob {
        input: input.clone(),
        output: output.clone(),
        pattern: r"\b\d{4}\b".to_string(),
        ..YearsJob::default()
    };
    assert!(run_years(&job).is_err());
    assert!(!output.exists());

    let job = YearsJob {
        input,
        output: output.clone(),
        pattern: r"\b\d{4}\b".to_string(),
        shift: YearShift::new(4).with_width_policy(WidthPolicy::Grow),
        ..YearsJob::default()
    };
    run_years(&job).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "10003");
}

#[test]
fn test_years_invalid_pattern_fails() {
    let dir = TempDir::new().unwrap();
    let job = YearsJob {
        input: dir.path().join("in.txt"),
        output: dir.path().join("out.txt"),
        pattern: "(".to_string(),
        ..YearsJob::default()
    };
    assert!(run_years(&job).is_err());
}
