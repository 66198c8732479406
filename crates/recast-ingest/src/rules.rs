//! Rule table files.
//!
//! A rule file is a two-column CSV of `match,replacement` pairs applied in
//! file order. An optional first row reading `match,replacement` is treated
//! as a header and skipped. Fields are taken verbatim, so leading spaces in
//! a match are significant.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use recast_model::{LiteralRule, RuleSet, TextEncoding};
use serde::Deserialize;
use tracing::debug;

use crate::codec::decode;
use crate::error::{IngestError, Result};
use crate::files::read_bytes;

#[derive(Debug, Deserialize)]
struct RuleRecord {
    pattern: String,
    replacement: String,
}

fn is_header(record: &StringRecord) -> bool {
    record.len() == 2
        && record[0].trim_start_matches('\u{feff}').eq_ignore_ascii_case("match")
        && record[1].eq_ignore_ascii_case("replacement")
}

/// Loads an ordered rule set from the CSV file at `path`.
pub fn load_rules(path: &Path, encoding: TextEncoding) -> Result<RuleSet> {
    let bytes = read_bytes(path)?;
    let text = decode(&bytes, encoding).map_err(|source| IngestError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rules = RuleSet::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        if index == 0 && is_header(&record) {
            continue;
        }
        if record.len() != 2 {
            return Err(IngestError::RuleShape {
                path: path.to_path_buf(),
                line,
                fields: record.len(),
            });
        }
        let row: RuleRecord = record
            .deserialize(None)
            .map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let rule = LiteralRule::new(row.pattern, row.replacement).map_err(|source| {
            IngestError::InvalidRule {
                path: path.to_path_buf(),
                line,
                source,
            }
        })?;
        rules.push(rule);
    }
    debug!(path = %path.display(), rules = rules.len(), "loaded rule table");
    Ok(rules)
}
