use serde::{Deserialize, Serialize};
use time::Duration;

/// Caller-supplied body measurements. Not validated on construction; the
/// calorie formulas reject non-positive values when they consume them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Body weight in kilograms.
    pub weight: f64,
    /// Body height in meters.
    pub height: f64,
}

impl BodyProfile {
    pub const fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }
}

impl Default for BodyProfile {
    fn default() -> Self {
        Self::new(75.0, 1.75)
    }
}

/// Activity kinds with their own calorie formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Walking,
}

/// Maps caller-facing labels (possibly localized) onto activity kinds.
///
/// Labels are matched exactly and echoed verbatim into summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLabels {
    pub running: String,
    pub walking: String,
}

impl ActivityLabels {
    pub fn new(running: impl Into<String>, walking: impl Into<String>) -> Self {
        Self {
            running: running.into(),
            walking: walking.into(),
        }
    }

    pub fn resolve(&self, label: &str) -> Option<ActivityKind> {
        if label == self.running {
            Some(ActivityKind::Running)
        } else if label == self.walking {
            Some(ActivityKind::Walking)
        } else {
            None
        }
    }

    pub fn label(&self, kind: ActivityKind) -> &str {
        match kind {
            ActivityKind::Running => &self.running,
            ActivityKind::Walking => &self.walking,
        }
    }
}

impl Default for ActivityLabels {
    fn default() -> Self {
        Self::new("Running", "Walking")
    }
}

/// One parsed record. `label` is the raw activity label, not yet resolved to
/// an [`ActivityKind`], and is `None` for two-field day records.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub steps: u64,
    pub label: Option<String>,
    pub elapsed: Duration,
}
