//! Error types for reading and writing files.

use std::path::PathBuf;

use recast_model::{RuleError, TextEncoding};
use thiserror::Error;

/// Byte-level encoding failures, independent of any file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Input bytes are not valid in the declared encoding.
    #[error("bytes are not valid {encoding}")]
    Malformed { encoding: TextEncoding },

    /// A character has no representation in the declared encoding.
    #[error("character {character:?} at byte {offset} cannot be encoded as {encoding}")]
    Unmappable {
        encoding: TextEncoding,
        character: char,
        offset: usize,
    },
}

/// Errors that can occur while reading or writing recast files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read an input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Encoding Errors ===
    /// File contents could not be decoded.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: EncodingError,
    },

    /// Output text could not be encoded.
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodingError,
    },

    // === CSV Errors ===
    /// Malformed CSV input.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV serialization failed.
    #[error("failed to serialize CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    // === Rule File Errors ===
    /// A rule row does not have exactly two fields.
    #[error("{path}:{line}: expected 2 fields (match, replacement), found {fields}")]
    RuleShape {
        path: PathBuf,
        line: u64,
        fields: usize,
    },

    /// A rule row failed validation.
    #[error("{path}:{line}: {source}")]
    InvalidRule {
        path: PathBuf,
        line: u64,
        #[source]
        source: RuleError,
    },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/pivot_table.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/pivot_table.csv");

        let err = IngestError::Encode {
            path: PathBuf::from("out.txt"),
            source: EncodingError::Unmappable {
                encoding: TextEncoding::Latin1,
                character: '€',
                offset: 3,
            },
        };
        assert_eq!(
            err.to_string(),
            "failed to encode out.txt: character '€' at byte 3 cannot be encoded as latin-1"
        );
    }
}
