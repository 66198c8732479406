//! Core data model for recast.
//!
//! Holds the substitution rule types, the two document shapes the rule
//! engines operate on, and the declared text encodings. Nothing here touches
//! the filesystem; reading and writing lives in `recast-ingest` and the
//! engines live in `recast-transform`.

pub mod document;
pub mod encoding;
pub mod error;
pub mod rule;
pub mod shift;

pub use document::{Table, TextDocument};
pub use encoding::{ParseEncodingError, TextEncoding};
pub use error::{Result, RuleError};
pub use rule::{LiteralRule, RuleSet};
pub use shift::{MatchTransform, WidthPolicy, YearShift};
