//! CSV tables.
//!
//! Every line is data: there is no header row. Rows may have different
//! numbers of fields and keep them on write.

use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use recast_model::{Table, TextEncoding};
use tracing::debug;

use crate::codec::{decode, encode};
use crate::error::{IngestError, Result};
use crate::files::{read_bytes, write_bytes};

/// Record terminator used when writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    /// `\r\n`.
    #[default]
    Crlf,
    /// `\n`.
    Lf,
}

impl LineTerminator {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Crlf => b"\r\n",
            Self::Lf => b"\n",
        }
    }
}

/// Options shared by [`read_table`] and [`write_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub encoding: TextEncoding,
    pub delimiter: u8,
    pub terminator: LineTerminator,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            delimiter: b',',
            terminator: LineTerminator::default(),
        }
    }
}

impl CsvOptions {
    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }
}

/// Reads every record of the CSV file at `path`.
pub fn read_table(path: &Path, options: &CsvOptions) -> Result<Table> {
    let bytes = read_bytes(path)?;
    let text = decode(&bytes, options.encoding).map_err(|source| IngestError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_rows(path, &text, options.delimiter)?;
    let table = Table::new(rows);
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        cells = table.cell_count(),
        "read csv table"
    );
    Ok(table)
}

pub(crate) fn parse_rows(path: &Path, text: &str, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    // The reader skips blank lines; put them back as empty rows.
    let mut records = records.into_iter();
    let mut rows = Vec::new();
    for blank in line_layout(text.as_bytes(), delimiter) {
        if blank {
            rows.push(Vec::new());
        } else if let Some(record) = records.next() {
            rows.push(record);
        }
    }
    rows.extend(records);
    Ok(rows)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// One entry per record line of `text`, `true` where the line is blank.
///
/// Terminators inside quoted fields do not end a line. `\r\n`, `\r` and
/// `\n` each end a line, matching the reader's default terminator.
fn line_layout(text: &[u8], delimiter: u8) -> Vec<bool> {
    let mut layout = Vec::new();
    let mut state = ScanState::FieldStart;
    let mut line_len = 0usize;
    let mut i = 0;
    while i < text.len() {
        let byte = text[i];
        i += 1;
        let is_terminator = byte == b'\n' || byte == b'\r';
        if is_terminator && state != ScanState::Quoted {
            if byte == b'\r' && text.get(i) == Some(&b'\n') {
                i += 1;
            }
            layout.push(line_len == 0);
            line_len = 0;
            state = ScanState::FieldStart;
            continue;
        }
        line_len += 1;
        state = match (state, byte) {
            (ScanState::FieldStart | ScanState::QuoteInQuoted, b) if b == delimiter => {
                ScanState::FieldStart
            }
            (ScanState::FieldStart, b'"') => ScanState::Quoted,
            (ScanState::Quoted, b'"') => ScanState::QuoteInQuoted,
            (ScanState::QuoteInQuoted, b'"') => ScanState::Quoted,
            (ScanState::Quoted, _) => ScanState::Quoted,
            (ScanState::Unquoted, b) if b == delimiter => ScanState::FieldStart,
            _ => ScanState::Unquoted,
        };
    }
    if line_len > 0 {
        layout.push(false);
    }
    layout
}

/// Writes `table` to `path`, quoting only fields that need it.
///
/// The file is created or truncated. Nothing is written if serialization or
/// encoding fails.
pub fn write_table(path: &Path, table: &Table, options: &CsvOptions) -> Result<()> {
    let terminator = match options.terminator {
        LineTerminator::Crlf => Terminator::CRLF,
        LineTerminator::Lf => Terminator::Any(b'\n'),
    };
    let mut builder = WriterBuilder::new();
    builder
        .flexible(true)
        .delimiter(options.delimiter)
        .quote_style(QuoteStyle::Necessary)
        .terminator(terminator);

    let csv_error = |message: String| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message,
    };
    let mut buffer = Vec::new();
    for row in table.rows() {
        // The csv writer renders an empty record as `""`; an empty row is a
        // bare terminator instead.
        if row.is_empty() {
            buffer.extend_from_slice(options.terminator.as_bytes());
            continue;
        }
        let mut writer = builder.from_writer(Vec::new());
        writer
            .write_record(row)
            .map_err(|e| csv_error(e.to_string()))?;
        let record = writer.into_inner().map_err(|e| csv_error(e.to_string()))?;
        buffer.extend_from_slice(&record);
    }
    let text = String::from_utf8(buffer).map_err(|e| csv_error(e.to_string()))?;
    let bytes = encode(&text, options.encoding).map_err(|source| IngestError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    write_bytes(path, &bytes)?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        bytes = bytes.len(),
        "wrote csv table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_row_is_data() {
        let rows = parse_rows(Path::new("t.csv"), "a,b\n1,2\n", b',').unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_ragged_rows_and_quotes() {
        let rows = parse_rows(
            Path::new("t.csv"),
            "one\n\"a,b\",\"say \"\"hi\"\"\",c\n",
            b',',
        )
        .unwrap();
        assert_eq!(rows, vec![vec!["one"], vec!["a,b", "say \"hi\"", "c"]]);
    }

    #[test]
    fn test_blank_lines_become_empty_rows() {
        let rows = parse_rows(Path::new("t.csv"), "\r\na\r\n\r\n\nb,c\n\n", b',').unwrap();
        let expected: Vec<Vec<&str>> = vec![
            vec![],
            vec!["a"],
            vec![],
            vec![],
            vec!["b", "c"],
            vec![],
        ];
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_quoted_newlines_are_not_blank_lines() {
        let rows = parse_rows(Path::new("t.csv"), "\"x\n\ny\"\nz\n", b',').unwrap();
        assert_eq!(rows, vec![vec!["x\n\ny"], vec!["z"]]);
    }

    #[test]
    fn test_only_blank_lines() {
        let rows = parse_rows(Path::new("t.csv"), "\n\n", b',').unwrap();
        assert_eq!(rows, vec![Vec::<String>::new(), Vec::new()]);
        assert!(parse_rows(Path::new("t.csv"), "", b',').unwrap().is_empty());
    }

    #[test]
    fn test_write_quotes_only_when_needed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(vec![
            vec!["Malaysia".to_string(), "a,b".to_string()],
            vec!["say \"hi\"".to_string(), String::new(), "x".to_string()],
        ]);
        write_table(&path, &table, &CsvOptions::default()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Malaysia,\"a,b\"\r\n\"say \"\"hi\"\"\",,x\r\n");
    }

    #[test]
    fn test_lf_terminator() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(vec![vec!["a".to_string()], vec!["b".to_string()]]);
        let options = CsvOptions::default().with_terminator(LineTerminator::Lf);
        write_table(&path, &table, &options).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_missing_table_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_table(&dir.path().join("pivot_table.csv"), &CsvOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
