//! Declared text encodings.
//!
//! A run reads and writes with the same declared encoding. The byte-level
//! conversions live in `recast-ingest`; this module only names the choices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Character encoding used for both reading and writing a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8. A leading byte-order mark is kept as U+FEFF and written back.
    #[default]
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
    /// Windows-1252 as defined by the WHATWG Encoding Standard.
    Windows1252,
}

impl TextEncoding {
    /// Canonical label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
            Self::Windows1252 => "windows-1252",
        }
    }

    /// True for encodings that use exactly one byte per character.
    pub fn is_single_byte(self) -> bool {
        !matches!(self, Self::Utf8)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognized encoding label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding '{label}' (expected utf-8, latin-1, or windows-1252)")]
pub struct ParseEncodingError {
    pub label: String,
}

impl FromStr for TextEncoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(Self::Latin1),
            "windows-1252" | "cp1252" => Ok(Self::Windows1252),
            _ => Err(ParseEncodingError {
                label: s.to_string(),
            }),
        }
    }
}
