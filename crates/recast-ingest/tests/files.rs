use std::fs;

use recast_ingest::{
    CsvOptions, IngestError, LineTerminator, read_table, read_text, write_table, write_text,
};
use recast_model::{Table, TextDocument, TextEncoding};
use tempfile::TempDir;

#[test]
fn csv_round_trip_keeps_rows_and_cells() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("pivot_table.csv");
    let output = dir.path().join("pivot_table_transformed.csv");
    let contents = "Region,Code,Product\r\nAmerica,1010US,\"Men basics, blue\"\r\nEurope\r\n";
    fs::write(&input, contents).expect("write input");

    let options = CsvOptions::default();
    let table = read_table(&input, &options).expect("read csv");
    assert_eq!(table.shape(), vec![3, 3, 1]);
    assert_eq!(table.rows()[1][2], "Men basics, blue");

    write_table(&output, &table, &options).expect("write csv");
    assert_eq!(fs::read_to_string(&output).expect("read output"), contents);
}

#[test]
fn csv_in_windows1252_round_trips() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("prices.csv");
    let output = dir.path().join("prices_out.csv");
    let bytes = b"Price,\x80 12\r\nCaf\xE9,M\xFCnchen\r\n".to_vec();
    fs::write(&input, &bytes).expect("write input");

    let options = CsvOptions::default().with_encoding(TextEncoding::Windows1252);
    let table = read_table(&input, &options).expect("read csv");
    assert_eq!(table.rows()[0][1], "€ 12");
    assert_eq!(table.rows()[1][0], "Café");

    write_table(&output, &table, &options).expect("write csv");
    assert_eq!(fs::read(&output).expect("read output"), bytes);
}

#[test]
fn text_with_non_ascii_round_trips_under_latin1() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("InvoiceData.txt");
    let document = TextDocument::new("Rechnung für Müller - ß 2019");

    write_text(&path, &document, TextEncoding::Latin1).expect("write text");
    let bytes = fs::read(&path).expect("read bytes");
    assert_eq!(bytes.len(), document.as_str().chars().count());

    let reread = read_text(&path, TextEncoding::Latin1).expect("read text");
    assert_eq!(reread, document);
}

#[test]
fn missing_inputs_are_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("InvoiceData.txt");
    assert!(matches!(
        read_text(&missing, TextEncoding::Latin1),
        Err(IngestError::FileNotFound { .. })
    ));
    assert!(matches!(
        read_table(&missing, &CsvOptions::default()),
        Err(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn empty_table_writes_empty_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("empty.csv");
    write_table(&path, &Table::default(), &CsvOptions::default()).expect("write csv");
    assert_eq!(fs::read(&path).expect("read output"), Vec::<u8>::new());
}

#[test]
fn blank_lines_survive_a_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("gaps.csv");
    let output = dir.path().join("gaps_out.csv");
    let contents = "America\r\n\r\nEurope,\"a\r\n\r\nb\"\r\n\r\n";
    fs::write(&input, contents).expect("write input");

    let options = CsvOptions::default();
    let table = read_table(&input, &options).expect("read csv");
    assert_eq!(table.shape(), vec![1, 0, 2, 0]);
    assert_eq!(table.rows()[2][1], "a\r\n\r\nb");

    write_table(&output, &table, &options).expect("write csv");
    assert_eq!(fs::read_to_string(&output).expect("read output"), contents);
}

#[test]
fn empty_row_writes_bare_terminator() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("rows.csv");
    let table = Table::new(vec![vec!["a".to_string()], vec![], vec![String::new()]]);
    let options = CsvOptions::default().with_terminator(LineTerminator::Lf);
    write_table(&path, &table, &options).expect("write csv");
    assert_eq!(fs::read_to_string(&path).expect("read output"), "a\n\n\"\"\n");
}
