//! Pattern rule engine over plain-text buffers.
//!
//! Matches are found left to right and never overlap. Each match is handed
//! to a [`MatchTransform`] and its output is spliced in place of the match;
//! scanning resumes after the match in the original buffer, so inserted
//! text is never rescanned.

use recast_model::{MatchTransform, Result, RuleError, TextDocument, YearShift};
use regex::Regex;
use tracing::debug;

/// Four ASCII digits starting with "20", bounded on both sides so digit
/// runs longer than four are left alone. `\d` would also match non-ASCII
/// decimal digits, which the year shift cannot parse.
pub const DEFAULT_YEAR_PATTERN: &str = r"\b20[0-9]{2}\b";

/// Counters collected while rewriting a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternStats {
    /// Number of pattern matches.
    pub matches: usize,
    /// Matches whose replacement differs from the matched text.
    pub changed: usize,
}

/// A compiled pattern paired with a per-match transform.
#[derive(Debug, Clone)]
pub struct PatternRule<T> {
    regex: Regex,
    transform: T,
}

impl<T: MatchTransform> PatternRule<T> {
    /// Compiles `pattern` and pairs it with `transform`.
    ///
    /// Patterns that can match empty text are rejected: every match must
    /// cover at least one character.
    pub fn new(pattern: &str, transform: T) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|err| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
        let hir = regex_syntax::parse(pattern).map_err(|err| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
        // Covers assertions such as `\b` that only match empty text at
        // certain positions.
        if hir.properties().minimum_len() == Some(0) {
            return Err(RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                message: "pattern can match empty text".to_string(),
            });
        }
        Ok(Self { regex, transform })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Rewrites `text`, returning the new buffer.
    pub fn rewrite(&self, text: &str) -> Result<String> {
        self.rewrite_with_stats(text).map(|(output, _)| output)
    }

    /// Rewrites `text` and reports how many matches were found and changed.
    ///
    /// Fails on the first match the transform rejects; no partial output is
    /// returned.
    pub fn rewrite_with_stats(&self, text: &str) -> Result<(String, PatternStats)> {
        let mut output = String::with_capacity(text.len());
        let mut stats = PatternStats::default();
        let mut last = 0;
        for found in self.regex.find_iter(text) {
            let replacement = self.transform.transform(found.as_str())?;
            stats.matches += 1;
            if replacement != found.as_str() {
                stats.changed += 1;
            }
            output.push_str(&text[last..found.start()]);
            output.push_str(&replacement);
            last = found.end();
        }
        output.push_str(&text[last..]);
        debug!(
            pattern = self.pattern(),
            matches = stats.matches,
            changed = stats.changed,
            "pattern rule applied"
        );
        Ok((output, stats))
    }
}

impl PatternRule<YearShift> {
    /// The default year rule: [`DEFAULT_YEAR_PATTERN`] with `shift`.
    pub fn years(shift: YearShift) -> Result<Self> {
        Self::new(DEFAULT_YEAR_PATTERN, shift)
    }
}

/// Rewrites a text document with `rule`.
pub fn rewrite_text<T: MatchTransform>(
    document: &TextDocument,
    rule: &PatternRule<T>,
) -> Result<(TextDocument, PatternStats)> {
    let (text, stats) = rule.rewrite_with_stats(document.as_str())?;
    Ok((TextDocument::new(text), stats))
}
