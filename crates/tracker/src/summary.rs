//! Summaries for training and day-total records.
//!
//! [`training_info`] and [`day_action_info`] return typed results and never
//! log. [`describe_training`] and [`describe_day_steps`] are the string
//! boundary: the first propagates errors, the second logs them and returns an
//! empty string.

use std::fmt;

use serde::Serialize;
use time::Duration;
use tracing::warn;

use crate::duration::format_hours_minutes;
use crate::errors::{Result, TrackerError};
use crate::metrics;
use crate::models::{ActivityKind, ActivityLabels, BodyProfile};
use crate::record::{parse_day_record, parse_training_record};

/// Computed metrics for one training record.
///
/// `Display` renders the English template below. It is not byte-compatible
/// with the Russian-language output this format originally came from.
///
/// ```text
/// Training type: {label}
/// Duration: {H.MM} h.
/// Distance: {km:.2} km.
/// Speed: {km/h:.2} km/h
/// Calories burned: {kcal:.2}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    /// Label exactly as it appeared in the record.
    pub label: String,
    pub kind: ActivityKind,
    pub steps: u64,
    #[serde(skip)]
    pub elapsed: Duration,
    /// Elapsed time rendered as `H.MM`.
    pub duration: String,
    pub distance_km: f64,
    pub average_speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training type: {}", self.label)?;
        writeln!(f, "Duration: {} h.", self.duration)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.average_speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}

/// Computed metrics for one day-totals record.
///
/// `Display` renders the English template below. Like [`TrainingSummary`],
/// it is not byte-compatible with the original Russian-language output.
///
/// ```text
/// Steps: {steps}.
/// Distance: {km:.2} km.
/// You burned {kcal:.2} kcal.
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub steps: u64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps: {}.", self.steps)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "You burned {:.2} kcal.", self.calories)
    }
}

/// Parses a `steps,label,duration` record and computes its metrics.
pub fn training_info(
    data: &str,
    profile: BodyProfile,
    labels: &ActivityLabels,
) -> Result<TrainingSummary> {
    let record = parse_training_record(data)?;
    let label = record.label.unwrap_or_default();
    let kind = labels
        .resolve(&label)
        .ok_or_else(|| TrackerError::UnknownTrainingType(label.clone()))?;

    let calories = metrics::calories(
        kind,
        record.steps,
        profile.weight,
        profile.height,
        record.elapsed,
    )?;

    Ok(TrainingSummary {
        label,
        kind,
        steps: record.steps,
        elapsed: record.elapsed,
        duration: format_hours_minutes(record.elapsed),
        distance_km: metrics::distance(record.steps, profile.height),
        average_speed_kmh: metrics::mean_speed(record.steps, profile.height, record.elapsed),
        calories,
    })
}

/// Parses a `steps,duration` record and computes day totals.
///
/// Distance uses the fixed day stride; calories use the walking formula.
pub fn day_action_info(data: &str, profile: BodyProfile) -> Result<DaySummary> {
    let record = parse_day_record(data)?;
    let calories = metrics::walking_calories(
        record.steps,
        profile.weight,
        profile.height,
        record.elapsed,
    )?;

    Ok(DaySummary {
        steps: record.steps,
        distance_km: metrics::day_distance(record.steps),
        calories,
    })
}

/// Renders a training summary with the default activity labels.
pub fn describe_training(data: &str, weight: f64, height: f64) -> Result<String> {
    let summary = training_info(
        data,
        BodyProfile::new(weight, height),
        &ActivityLabels::default(),
    )?;
    Ok(summary.to_string())
}

/// Renders day totals, or an empty string when the record cannot be
/// summarized. The failure is logged at `warn`.
pub fn describe_day_steps(data: &str, weight: f64, height: f64) -> String {
    match day_action_info(data, BodyProfile::new(weight, height)) {
        Ok(summary) => summary.to_string(),
        Err(e) => {
            warn!(record = data, error = %e, "Skipping day record");
            String::new()
        }
    }
}
