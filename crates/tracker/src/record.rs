//! Record parsing.
//!
//! Records are comma-separated with no escaping and no whitespace tolerance:
//! `steps,duration` for day totals and `steps,label,duration` for trainings.
//! The label is taken verbatim; resolving it is left to the caller.

use time::Duration;

use crate::duration::parse_duration;
use crate::errors::{Field, Result, TrackerError};
use crate::models::ActivityRecord;

const DAY_FIELDS: usize = 2;
const TRAINING_FIELDS: usize = 3;

/// Parses a `steps,duration` record.
pub fn parse_day_record(data: &str) -> Result<ActivityRecord> {
    let fields = split_fields(data, DAY_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let elapsed = parse_elapsed(fields[1])?;

    Ok(ActivityRecord {
        steps,
        label: None,
        elapsed,
    })
}

/// Parses a `steps,label,duration` record.
pub fn parse_training_record(data: &str) -> Result<ActivityRecord> {
    let fields = split_fields(data, TRAINING_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let elapsed = parse_elapsed(fields[2])?;

    Ok(ActivityRecord {
        steps,
        label: Some(fields[1].to_string()),
        elapsed,
    })
}

fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = data.split(',').collect();
    if fields.len() != expected {
        return Err(TrackerError::InvalidArgumentsCount(data.to_string()));
    }
    Ok(fields)
}

fn parse_steps(field: &str) -> Result<u64> {
    let steps: i64 = field
        .parse()
        .map_err(|_| TrackerError::InvalidFormat(field.to_string()))?;
    if steps <= 0 {
        return Err(TrackerError::non_positive(Field::Steps, steps));
    }
    Ok(steps as u64)
}

fn parse_elapsed(field: &str) -> Result<Duration> {
    let elapsed =
        parse_duration(field).map_err(|_| TrackerError::InvalidFormat(field.to_string()))?;
    if elapsed <= Duration::ZERO {
        return Err(TrackerError::non_positive(Field::Duration, field));
    }
    Ok(elapsed)
}
