//! Rule engines for recast.
//!
//! Two engines share one shape: take an in-memory document plus an explicit
//! rule value, return a new document. Neither engine reads global state or
//! touches the filesystem.
//!
//! - [`literal`]: ordered, chained, case-sensitive substring replacement over
//!   every cell of a [`Table`](recast_model::Table).
//! - [`pattern`]: regex matches over a text buffer, each replaced by a
//!   [`MatchTransform`](recast_model::MatchTransform) of the matched text.

pub mod literal;
pub mod pattern;

pub use literal::{LiteralStats, rewrite_cell, rewrite_table, rewrite_table_with_stats};
pub use pattern::{DEFAULT_YEAR_PATTERN, PatternRule, PatternStats, rewrite_text};
