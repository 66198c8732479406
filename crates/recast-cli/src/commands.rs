use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use recast_cli::listing::render_rule_list;
use recast_cli::pipeline::{CsvJob, CsvOutcome, YearsJob, YearsOutcome, run_csv, run_years};
use recast_ingest::{CsvOptions, LineTerminator, load_rules};
use recast_model::{RuleSet, TextEncoding, WidthPolicy, YearShift};

use crate::cli::{CsvArgs, RulesArgs, YearsArgs};

pub fn run_csv_command(args: &CsvArgs) -> Result<CsvOutcome> {
    let rules = resolve_rules(args.rules.as_deref(), args.rules_encoding)?;
    let terminator = if args.lf {
        LineTerminator::Lf
    } else {
        LineTerminator::Crlf
    };
    let job = CsvJob {
        input: args.input.clone(),
        output: args.output.clone(),
        rules,
        options: CsvOptions::default()
            .with_encoding(args.encoding)
            .with_terminator(terminator),
        dry_run: args.dry_run,
    };
    run_csv(&job)
}

pub fn run_years_command(args: &YearsArgs) -> Result<YearsOutcome> {
    let width = if args.allow_width_change {
        WidthPolicy::Grow
    } else {
        WidthPolicy::Preserve
    };
    let job = YearsJob {
        input: args.input.clone(),
        output: args.output.clone(),
        pattern: args.pattern.clone(),
        shift: YearShift::new(args.offset).with_width_policy(width),
        encoding: args.encoding,
        dry_run: args.dry_run,
    };
    run_years(&job)
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let rules = resolve_rules(args.rules.as_deref(), args.encoding)?;
    let listing = render_rule_list(&rules);
    if !listing.is_empty() {
        println!("{listing}");
    }
    Ok(())
}

fn resolve_rules(path: Option<&Path>, encoding: TextEncoding) -> Result<RuleSet> {
    match path {
        Some(path) => {
            let rules = load_rules(path, encoding)
                .with_context(|| format!("load rules from {}", path.display()))?;
            info!(path = %path.display(), rules = rules.len(), "using rule file");
            Ok(rules)
        }
        None => Ok(RuleSet::builtin()),
    }
}
