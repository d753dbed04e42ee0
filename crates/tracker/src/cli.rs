//! Line-by-line record processing behind the `tracker` binary.
//!
//! Each line is an independent record. A line with exactly one comma is a
//! day-totals record; every other line is a training record, so wrong field
//! counts are reported by the training parser. Failed lines are logged and
//! skipped.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::config::{OutputFormat, TrackerConfig};
use crate::errors::TrackerError;
use crate::summary::{day_action_info, training_info};

/// What happened to a single input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Blank line, nothing to do.
    Skipped,
    /// Rendered summary, newline-terminated.
    Rendered(String),
    /// The record was rejected; the error has already been logged.
    Failed(TrackerError),
}

/// Counters reported once the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub failed: usize,
}

/// Processes one input line. `line_no` is only used for logging.
///
/// A trailing `\r` is stripped before parsing.
pub fn process_line(
    line_no: usize,
    line: &str,
    config: &TrackerConfig,
) -> anyhow::Result<LineOutcome> {
    let record = line.strip_suffix('\r').unwrap_or(line);
    if record.is_empty() {
        return Ok(LineOutcome::Skipped);
    }

    if record.matches(',').count() == 1 {
        match day_action_info(record, config.profile) {
            Ok(summary) => Ok(LineOutcome::Rendered(render(&summary, config.output)?)),
            Err(e) => {
                tracing::warn!(line = line_no, record, error = %e, "Skipping day record");
                Ok(LineOutcome::Failed(e))
            }
        }
    } else {
        match training_info(record, config.profile, &config.labels) {
            Ok(summary) => Ok(LineOutcome::Rendered(render(&summary, config.output)?)),
            Err(e) => {
                tracing::error!(line = line_no, record, error = %e, "Invalid training record");
                Ok(LineOutcome::Failed(e))
            }
        }
    }
}

/// Reads records from `input` until EOF and writes summaries to `out`.
///
/// Only I/O and serialization failures end the run early.
pub fn run(
    input: impl BufRead,
    mut out: impl Write,
    config: &TrackerConfig,
) -> anyhow::Result<RunStats> {
    let mut stats = RunStats::default();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        match process_line(index + 1, &line, config)? {
            LineOutcome::Skipped => continue,
            LineOutcome::Rendered(text) => out.write_all(text.as_bytes())?,
            LineOutcome::Failed(_) => stats.failed += 1,
        }
        stats.processed += 1;
    }
    out.flush()?;
    Ok(stats)
}

fn render<T>(summary: &T, format: OutputFormat) -> anyhow::Result<String>
where
    T: std::fmt::Display + Serialize,
{
    Ok(match format {
        OutputFormat::Text => summary.to_string(),
        OutputFormat::Json => {
            let mut line = serde_json::to_string(summary)?;
            line.push('\n');
            line
        }
    })
}
