//! The two rewrite pipelines: read, apply rules, write.
//!
//! Each pipeline is one linear pass. The input is loaded fully into memory,
//! rewritten by its rule engine, and written once. Any failure aborts the
//! run before the output file is touched.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use recast_ingest::{CsvOptions, read_table, read_text, write_table, write_text};
use recast_model::{RuleSet, TextEncoding, YearShift};
use recast_transform::{
    LiteralStats, PatternRule, PatternStats, rewrite_table_with_stats, rewrite_text,
};
use tracing::{info, info_span};

/// Input file of the CSV pipeline when none is given.
pub const DEFAULT_CSV_INPUT: &str = "pivot_table.csv";
/// Output file of the CSV pipeline when none is given.
pub const DEFAULT_CSV_OUTPUT: &str = "pivot_table_transformed.csv";
/// Input file of the year pipeline when none is given.
pub const DEFAULT_TEXT_INPUT: &str = "InvoiceData.txt";
/// Output file of the year pipeline when none is given.
pub const DEFAULT_TEXT_OUTPUT: &str = "InvoiceData_Updated.txt";

/// Literal rewrite of every cell of a CSV file.
#[derive(Debug, Clone)]
pub struct CsvJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rules: RuleSet,
    pub options: CsvOptions,
    /// Read and rewrite but do not write the output.
    pub dry_run: bool,
}

impl Default for CsvJob {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_CSV_INPUT),
            output: PathBuf::from(DEFAULT_CSV_OUTPUT),
            rules: RuleSet::builtin(),
            options: CsvOptions::default(),
            dry_run: false,
        }
    }
}

#[derive(Debug)]
pub struct CsvOutcome {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub rule_count: usize,
    pub encoding: TextEncoding,
    pub stats: LiteralStats,
}

/// Pattern rewrite of a plain-text file.
#[derive(Debug, Clone)]
pub struct YearsJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pattern: String,
    pub shift: YearShift,
    pub encoding: TextEncoding,
    /// Read and rewrite but do not write the output.
    pub dry_run: bool,
}

impl Default for YearsJob {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_TEXT_INPUT),
            output: PathBuf::from(DEFAULT_TEXT_OUTPUT),
            pattern: recast_transform::DEFAULT_YEAR_PATTERN.to_string(),
            shift: YearShift::default(),
            encoding: TextEncoding::Latin1,
            dry_run: false,
        }
    }
}

#[derive(Debug)]
pub struct YearsOutcome {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub pattern: String,
    pub offset: i64,
    pub encoding: TextEncoding,
    pub stats: PatternStats,
}

pub fn run_csv(job: &CsvJob) -> Result<CsvOutcome> {
    let span = info_span!("csv", input = %job.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_table(&job.input, &job.options)
        .with_context(|| format!("read {}", job.input.display()))?;
    info!(
        rows = table.row_count(),
        cells = table.cell_count(),
        "loaded table"
    );

    let (table, stats) = rewrite_table_with_stats(&table, &job.rules);
    info!(
        rules = job.rules.len(),
        cells_changed = stats.cells_changed,
        replacements = stats.replacements,
        "applied literal rules"
    );

    let output = if job.dry_run {
        info!("dry run, output not written");
        None
    } else {
        write_table(&job.output, &table, &job.options)
            .with_context(|| format!("write {}", job.output.display()))?;
        info!(output = %job.output.display(), "wrote table");
        Some(job.output.clone())
    };

    info!(duration_ms = start.elapsed().as_millis(), "csv pipeline complete");
    Ok(CsvOutcome {
        input: job.input.clone(),
        output,
        rule_count: job.rules.len(),
        encoding: job.options.encoding,
        stats,
    })
}

pub fn run_years(job: &YearsJob) -> Result<YearsOutcome> {
    let span = info_span!("years", input = %job.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let rule = PatternRule::new(&job.pattern, job.shift).context("compile pattern")?;

    let document = read_text(&job.input, job.encoding)
        .with_context(|| format!("read {}", job.input.display()))?;
    info!(bytes = document.len(), encoding = %job.encoding, "loaded text");

    let (document, stats) = rewrite_text(&document, &rule)
        .with_context(|| format!("rewrite {}", job.input.display()))?;
    info!(
        matches = stats.matches,
        changed = stats.changed,
        offset = job.shift.offset(),
        "applied pattern rule"
    );

    let output = if job.dry_run {
        info!("dry run, output not written");
        None
    } else {
        write_text(&job.output, &document, job.encoding)
            .with_context(|| format!("write {}", job.output.display()))?;
        info!(output = %job.output.display(), "wrote text");
        Some(job.output.clone())
    };

    info!(duration_ms = start.elapsed().as_millis(), "years pipeline complete");
    Ok(YearsOutcome {
        input: job.input.clone(),
        output,
        pattern: job.pattern.clone(),
        offset: job.shift.offset(),
        encoding: job.encoding,
        stats,
    })
}
