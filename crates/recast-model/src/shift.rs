//! Value-dependent replacements for pattern matches.

use std::num::IntErrorKind;

use crate::error::{Result, RuleError};

/// Computes the replacement text for a single matched span.
///
/// Implementations must be pure: the same input always yields the same
/// output.
pub trait MatchTransform {
    fn transform(&self, matched: &str) -> Result<String>;
}

impl<F> MatchTransform for F
where
    F: Fn(&str) -> Result<String>,
{
    fn transform(&self, matched: &str) -> Result<String> {
        self(matched)
    }
}

/// What to do when a shifted number needs a different digit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Keep the matched width: shorter results are zero-padded, longer
    /// results are an error.
    #[default]
    Preserve,
    /// Write the plain decimal result whatever its width.
    Grow,
}

/// Adds a fixed offset to a matched decimal numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearShift {
    offset: i64,
    width: WidthPolicy,
}

impl YearShift {
    /// Offset applied by default to four-digit years.
    pub const DEFAULT_OFFSET: i64 = 4;

    pub fn new(offset: i64) -> Self {
        Self {
            offset,
            width: WidthPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_width_policy(mut self, width: WidthPolicy) -> Self {
        self.width = width;
        self
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn width_policy(&self) -> WidthPolicy {
        self.width
    }
}

impl Default for YearShift {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OFFSET)
    }
}

impl MatchTransform for YearShift {
    fn transform(&self, matched: &str) -> Result<String> {
        if matched.is_empty() || !matched.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RuleError::NotNumeric {
                matched: matched.to_string(),
            });
        }
        let overflow = || RuleError::Overflow {
            matched: matched.to_string(),
            offset: self.offset,
        };
        let value: i64 = matched.parse().map_err(|err: std::num::ParseIntError| {
            match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => overflow(),
                _ => RuleError::NotNumeric {
                    matched: matched.to_string(),
                },
            }
        })?;
        let shifted = value.checked_add(self.offset).ok_or_else(overflow)?;
        if shifted < 0 {
            return Err(RuleError::NegativeResult {
                matched: matched.to_string(),
                offset: self.offset,
            });
        }
        match self.width {
            WidthPolicy::Grow => Ok(shifted.to_string()),
            WidthPolicy::Preserve => {
                let width = matched.len();
                let result = format!("{shifted:0width$}");
                if result.len() != width {
                    return Err(RuleError::WidthChanged {
                        matched: matched.to_string(),
                        result,
                    });
                }
                Ok(result)
            }
        }
    }
}
