//! Literal substitution rules.

use serde::Serialize;

use crate::error::{Result, RuleError};

/// The product and region table used when no rule file is supplied.
///
/// Order matters: "Women type T simple white" must be rewritten before
/// "Men type T simple white" can see it.
const BUILTIN_RULES: &[(&str, &str)] = &[
    ("America", "Malaysia"),
    ("Europe", "Singapore"),
    ("1010US", "1010MY"),
    ("1020US", "1020MY"),
    ("1040DE", "1040SG"),
    ("/2020", "/2025"),
    ("Women type T simple white", "White Ink"),
    ("Women type T simple black", "Black Ink"),
    ("Women crop top black", "Blue Ink"),
    ("Women basics", "Red Ink"),
    ("Men basics", "Green Ink"),
    ("Men type T simple white", "Purple Ink"),
    ("Laptop bag black", "Grey Ink"),
    ("Men dress shirt black", "Yellow Ink"),
    ("Men dress shirt grey", "Violet Ink"),
    ("Men shorts grey", "Brown Ink"),
    ("Men shorts black", "Orange Ink"),
    ("Unisex tank top white", "White Ink"),
    ("Laptop bag red", "Emerald Ink"),
    ("Smartphone case diamond", "Sky Blue Ink"),
    ("Smartphone case simple", "Silver Ink"),
    ("Men type T simple black", "Gold Ink"),
    (" GmbH", ""),
];

/// A single case-sensitive literal substitution.
///
/// The match text is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteralRule {
    pattern: String,
    replacement: String,
}

impl LiteralRule {
    /// Creates a rule, rejecting empty match text.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let replacement = replacement.into();
        if pattern.is_empty() {
            return Err(RuleError::EmptyMatch { replacement });
        }
        Ok(Self {
            pattern,
            replacement,
        })
    }

    /// Text searched for.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Text spliced in for each occurrence.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Applies this rule to `input`, returning the rewritten text and the
    /// number of occurrences replaced.
    ///
    /// Occurrences are found left to right and never overlap; inserted text
    /// is not rescanned by the same rule.
    pub fn apply(&self, input: &str) -> (String, usize) {
        let hits = input.matches(self.pattern.as_str()).count();
        if hits == 0 {
            return (input.to_string(), 0);
        }
        (input.replace(self.pattern.as_str(), &self.replacement), hits)
    }
}

/// An ordered list of literal rules.
///
/// Rules run in declaration order and chain: each rule sees the output of
/// the rules before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    rules: Vec<LiteralRule>,
}

impl RuleSet {
    /// Creates an empty rule set (the identity transform).
    pub fn new() -> Self {
        Self::default()
    }

    /// The region and product rewrite table shipped with the tool.
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(pattern, replacement)| LiteralRule {
                pattern: (*pattern).to_string(),
                replacement: (*replacement).to_string(),
            })
            .collect();
        Self { rules }
    }

    /// Builds a rule set from ordered pairs.
    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let mut set = Self::new();
        for (pattern, replacement) in pairs {
            set.push(LiteralRule::new(pattern, replacement)?);
        }
        Ok(set)
    }

    /// Appends a rule after all existing rules.
    pub fn push(&mut self, rule: LiteralRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LiteralRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a LiteralRule;
    type IntoIter = std::slice::Iter<'a, LiteralRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<LiteralRule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = LiteralRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_match_rejected() {
        let err = LiteralRule::new("", "x").unwrap_err();
        assert_eq!(
            err,
            RuleError::EmptyMatch {
                replacement: "x".to_string()
            }
        );
    }

    #[test]
    fn test_apply_counts_non_overlapping_hits() {
        let rule = LiteralRule::new("aa", "b").unwrap();
        assert_eq!(rule.apply("aaaaa"), ("bba".to_string(), 2));
    }

    #[test]
    fn test_apply_does_not_rescan_inserted_text() {
        let rule = LiteralRule::new("a", "aa").unwrap();
        assert_eq!(rule.apply("aba"), ("aabaa".to_string(), 2));
    }

    #[test]
    fn test_builtin_table_order() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.len(), 23);
        let first = rules.iter().next().unwrap();
        assert_eq!(first.pattern(), "America");
        assert_eq!(first.replacement(), "Malaysia");
        let last = rules.iter().last().unwrap();
        assert_eq!(last.pattern(), " GmbH");
        assert_eq!(last.replacement(), "");
        assert!(rules.iter().all(|rule| !rule.pattern().is_empty()));
    }

    #[test]
    fn test_from_pairs_stops_at_empty_match() {
        let result = RuleSet::from_pairs([("A", "B"), ("", "C")]);
        assert!(matches!(result, Err(RuleError::EmptyMatch { .. })));
    }
}
