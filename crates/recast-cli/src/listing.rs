//! Plain-text rendering of a rule table.

use recast_model::RuleSet;

/// One line per rule, numbered in application order, with both sides
/// quoted so leading and trailing spaces stay visible.
pub fn render_rule_list(rules: &RuleSet) -> String {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            format!(
                "{}. {:?} -> {:?}",
                index + 1,
                rule.pattern(),
                rule.replacement()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
