//! File input and output for recast.
//!
//! Readers load a whole file into memory under a declared [`TextEncoding`]
//! and return a [`Table`] or [`TextDocument`]; writers serialize them back
//! under the same encoding. Rule tables can also be loaded from CSV files.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use recast_ingest::{CsvOptions, read_table, write_table};
//!
//! let options = CsvOptions::default();
//! let table = read_table(Path::new("pivot_table.csv"), &options)?;
//! write_table(Path::new("pivot_table_transformed.csv"), &table, &options)?;
//! ```
//!
//! [`TextEncoding`]: recast_model::TextEncoding
//! [`Table`]: recast_model::Table
//! [`TextDocument`]: recast_model::TextDocument

mod codec;
mod error;
mod files;
mod rules;
mod table;
mod text;

// === Error Types ===
pub use error::{EncodingError, IngestError, Result};

// === Encoding ===
pub use codec::{decode, encode};

// === Tabular Files ===
pub use table::{CsvOptions, LineTerminator, read_table, write_table};

// === Plain Text Files ===
pub use text::{read_text, write_text};

// === Rule Files ===
pub use rules::load_rules;
