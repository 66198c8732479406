//! Error types for rule construction and per-match transforms.

use thiserror::Error;

/// Errors raised while building rules or evaluating a match transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A literal rule was declared with empty match text.
    #[error("rule with replacement '{replacement}' has empty match text")]
    EmptyMatch { replacement: String },

    /// The match pattern failed to compile.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A matched span is not a plain decimal numeral.
    #[error("matched text '{matched}' is not a decimal number")]
    NotNumeric { matched: String },

    /// Parsing the match or applying the offset overflowed.
    #[error("adding {offset} to '{matched}' overflows")]
    Overflow { matched: String, offset: i64 },

    /// The shifted value would be negative.
    #[error("adding {offset} to '{matched}' gives a negative value")]
    NegativeResult { matched: String, offset: i64 },

    /// The shifted value needs more digits than the matched token.
    #[error("shifting '{matched}' gives '{result}', which changes the digit width")]
    WidthChanged { matched: String, result: String },
}

/// Result type for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;
