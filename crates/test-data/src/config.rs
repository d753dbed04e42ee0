//! Configuration types for record generation.

use serde::{Deserialize, Serialize};
use tracker::ActivityLabels;

/// Configuration for generating activity records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordGenConfig {
    /// Step count range (inclusive).
    pub steps: (u64, u64),

    /// Session length range in seconds (inclusive).
    pub duration_seconds: (i64, i64),

    /// Labels written into training records.
    pub labels: ActivityLabels,

    /// Probability (0.0-1.0) that a sampled record is malformed.
    pub malformed_fraction: f64,
}

impl Default for RecordGenConfig {
    fn default() -> Self {
        Self {
            steps: (100, 30_000),
            // One minute to four hours
            duration_seconds: (60, 4 * 3600),
            labels: ActivityLabels::default(),
            malformed_fraction: 0.2,
        }
    }
}

/// Distribution parameters for body profiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyDistribution {
    pub weight_mean: f64,
    pub weight_std: f64,
    pub height_mean: f64,
    pub height_std: f64,
}

impl Default for BodyDistribution {
    fn default() -> Self {
        // Rough adult population figures
        Self {
            weight_mean: 74.0,
            weight_std: 13.0,
            height_mean: 1.71,
            height_std: 0.09,
        }
    }
}
