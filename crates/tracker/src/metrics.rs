//! Distance, speed and calorie formulas.
//!
//! `distance` and `mean_speed` are plain arithmetic and trust their inputs.
//! The calorie formulas validate everything they consume first.

use time::Duration;

use crate::duration;
use crate::errors::{Field, Result, TrackerError};
use crate::models::ActivityKind;

/// Stride length as a fraction of body height.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Fixed stride length in meters used by day totals.
pub const DAY_STEP_LENGTH_M: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
/// Walking burns this fraction of what running at the same speed would.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Stride-derived distance in kilometers.
pub fn distance(steps: u64, height: f64) -> f64 {
    height * STEP_LENGTH_COEFFICIENT * steps as f64 / M_IN_KM
}

/// Distance in kilometers using the fixed day-totals stride.
pub fn day_distance(steps: u64) -> f64 {
    steps as f64 * DAY_STEP_LENGTH_M / M_IN_KM
}

/// Average speed in km/h. Reports `0` rather than failing when `elapsed` is
/// zero or negative.
pub fn mean_speed(steps: u64, height: f64, elapsed: Duration) -> f64 {
    if elapsed <= Duration::ZERO {
        return 0.0;
    }
    distance(steps, height) / duration::hours(elapsed)
}

/// Rejects the first non-positive input, checked in the order steps, weight,
/// height, duration.
pub fn validate_inputs(steps: u64, weight: f64, height: f64, elapsed: Duration) -> Result<()> {
    if steps == 0 {
        return Err(TrackerError::non_positive(Field::Steps, steps));
    }
    // `!(x > 0.0)` so that NaN is rejected too.
    if !(weight > 0.0) {
        return Err(TrackerError::non_positive(Field::Weight, weight));
    }
    if !(height > 0.0) {
        return Err(TrackerError::non_positive(Field::Height, height));
    }
    if elapsed <= Duration::ZERO {
        return Err(TrackerError::non_positive(Field::Duration, elapsed));
    }
    Ok(())
}

pub fn running_calories(steps: u64, weight: f64, height: f64, elapsed: Duration) -> Result<f64> {
    validate_inputs(steps, weight, height, elapsed)?;
    Ok(base_calories(steps, weight, height, elapsed))
}

pub fn walking_calories(steps: u64, weight: f64, height: f64, elapsed: Duration) -> Result<f64> {
    validate_inputs(steps, weight, height, elapsed)?;
    Ok(base_calories(steps, weight, height, elapsed) * WALKING_CALORIES_COEFFICIENT)
}

/// Dispatches to the calorie formula for `kind`.
pub fn calories(
    kind: ActivityKind,
    steps: u64,
    weight: f64,
    height: f64,
    elapsed: Duration,
) -> Result<f64> {
    match kind {
        ActivityKind::Running => running_calories(steps, weight, height, elapsed),
        ActivityKind::Walking => walking_calories(steps, weight, height, elapsed),
    }
}

fn base_calories(steps: u64, weight: f64, height: f64, elapsed: Duration) -> f64 {
    weight * mean_speed(steps, height, elapsed) * duration::minutes(elapsed) / MIN_IN_H
}
