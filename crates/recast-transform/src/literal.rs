//! Literal rule engine over tabular documents.

use recast_model::{RuleSet, Table};
use tracing::debug;

/// Counters collected while rewriting a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralStats {
    pub rows: usize,
    pub cells: usize,
    /// Cells whose final value differs from the input.
    pub cells_changed: usize,
    /// Total occurrences replaced across all rules.
    pub replacements: usize,
    /// Occurrences replaced by each rule, in rule order.
    pub per_rule: Vec<usize>,
}

/// Applies every rule, in order, to a single cell value.
pub fn rewrite_cell(cell: &str, rules: &RuleSet) -> String {
    let mut per_rule = vec![0; rules.len()];
    rewrite_cell_counted(cell, rules, &mut per_rule)
}

fn rewrite_cell_counted(cell: &str, rules: &RuleSet, per_rule: &mut [usize]) -> String {
    let mut value = cell.to_string();
    for (rule, count) in rules.iter().zip(per_rule.iter_mut()) {
        let (next, hits) = rule.apply(&value);
        *count += hits;
        value = next;
    }
    value
}

/// Rewrites every cell of `table`, keeping its shape.
pub fn rewrite_table(table: &Table, rules: &RuleSet) -> Table {
    rewrite_table_with_stats(table, rules).0
}

/// Rewrites every cell of `table` and reports what changed.
///
/// The output has the same row count as the input and the same cell count
/// in each row.
pub fn rewrite_table_with_stats(table: &Table, rules: &RuleSet) -> (Table, LiteralStats) {
    let mut stats = LiteralStats {
        rows: table.row_count(),
        per_rule: vec![0; rules.len()],
        ..LiteralStats::default()
    };

    let rows = table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let value = rewrite_cell_counted(cell, rules, &mut stats.per_rule);
                    stats.cells += 1;
                    if value != *cell {
                        stats.cells_changed += 1;
                    }
                    value
                })
                .collect()
        })
        .collect();

    stats.replacements = stats.per_rule.iter().sum();
    for (rule, hits) in rules.iter().zip(&stats.per_rule) {
        debug!(
            pattern = rule.pattern(),
            replacement = rule.replacement(),
            hits,
            "literal rule applied"
        );
    }
    (Table::new(rows), stats)
}
