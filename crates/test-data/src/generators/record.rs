//! Activity record generation.

use rand::Rng;
use time::Duration;
use tracker::{ActivityKind, Field, TrackerError};

use crate::config::RecordGenConfig;

/// Which parser a record is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// `steps,duration`
    Day,
    /// `steps,label,duration`
    Training,
}

/// Ways a generated record can be broken on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    FieldCount,
    NonNumericSteps,
    NonPositiveSteps,
    BadDuration,
    NonPositiveDuration,
    /// Only meaningful for training records.
    UnknownLabel,
}

impl Malformation {
    pub const ALL: [Malformation; 6] = [
        Malformation::FieldCount,
        Malformation::NonNumericSteps,
        Malformation::NonPositiveSteps,
        Malformation::BadDuration,
        Malformation::NonPositiveDuration,
        Malformation::UnknownLabel,
    ];

    /// Malformations a record of `shape` can carry.
    pub fn for_shape(shape: RecordShape) -> &'static [Malformation] {
        match shape {
            RecordShape::Day => &[
                Malformation::FieldCount,
                Malformation::NonNumericSteps,
                Malformation::NonPositiveSteps,
                Malformation::BadDuration,
                Malformation::NonPositiveDuration,
            ],
            RecordShape::Training => &Self::ALL,
        }
    }

    /// Whether `err` is the failure this malformation should produce.
    pub fn matches(&self, err: &TrackerError) -> bool {
        match (self, err) {
            (Malformation::FieldCount, TrackerError::InvalidArgumentsCount(_)) => true,
            (Malformation::NonNumericSteps, TrackerError::InvalidFormat(_)) => true,
            (Malformation::BadDuration, TrackerError::InvalidFormat(_)) => true,
            (
                Malformation::NonPositiveSteps,
                TrackerError::ZeroOrNegativeValue {
                    field: Field::Steps,
                    ..
                },
            ) => true,
            (
                Malformation::NonPositiveDuration,
                TrackerError::ZeroOrNegativeValue {
                    field: Field::Duration,
                    ..
                },
            ) => true,
            (Malformation::UnknownLabel, TrackerError::UnknownTrainingType(_)) => true,
            _ => false,
        }
    }
}

/// A generated record together with what it was built to exercise.
#[derive(Debug, Clone)]
pub struct GeneratedRecord {
    pub text: String,
    pub shape: RecordShape,
    pub steps: u64,
    pub elapsed: Duration,
    /// `None` for day records.
    pub kind: Option<ActivityKind>,
    /// `None` when the record is well formed.
    pub malformation: Option<Malformation>,
}

impl GeneratedRecord {
    pub fn is_valid(&self) -> bool {
        self.malformation.is_none()
    }
}

/// Generates activity records for testing.
pub struct RecordGenerator {
    config: RecordGenConfig,
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

const BAD_STEPS: &[&str] = &["abc", "1.5", "", " 42", "12k", "0x1F"];
const BAD_DURATIONS: &[&str] = &["40", "soon", "", "1d", "h", "1h 30m", "30 m"];
const UNKNOWN_LABELS: &[&str] = &["Swimming", "Cycling", "running", "", "Walking "];

impl RecordGenerator {
    /// Creates a new generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: RecordGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: RecordGenConfig) -> Self {
        Self { config }
    }

    /// Generates a well-formed record of the given shape.
    pub fn valid(&self, shape: RecordShape, rng: &mut impl Rng) -> GeneratedRecord {
        let steps = self.sample_steps(rng);
        let elapsed = self.sample_elapsed(rng);
        let duration = format_duration_literal(elapsed);

        match shape {
            RecordShape::Day => GeneratedRecord {
                text: format!("{steps},{duration}"),
                shape,
                steps,
                elapsed,
                kind: None,
                malformation: None,
            },
            RecordShape::Training => {
                let kind = if rng.gen_bool(0.5) {
                    ActivityKind::Running
                } else {
                    ActivityKind::Walking
                };
                let label = self.config.labels.label(kind);
                GeneratedRecord {
                    text: format!("{steps},{label},{duration}"),
                    shape,
                    steps,
                    elapsed,
                    kind: Some(kind),
                    malformation: None,
                }
            }
        }
    }

    /// Generates a record of the given shape broken in the given way.
    ///
    /// `UnknownLabel` on a day record falls back to a field-count error,
    /// since day records carry no label.
    pub fn malformed(
        &self,
        shape: RecordShape,
        malformation: Malformation,
        rng: &mut impl Rng,
    ) -> GeneratedRecord {
        let mut record = self.valid(shape, rng);
        let malformation = match (shape, malformation) {
            (RecordShape::Day, Malformation::UnknownLabel) => Malformation::FieldCount,
            _ => malformation,
        };

        let mut fields: Vec<String> = record.text.split(',').map(str::to_string).collect();
        let last = fields.len() - 1;
        match malformation {
            Malformation::FieldCount => {
                if rng.gen_bool(0.5) {
                    fields.push("extra".to_string());
                } else {
                    fields.remove(0);
                }
            }
            Malformation::NonNumericSteps => fields[0] = pick(BAD_STEPS, rng).to_string(),
            Malformation::NonPositiveSteps => {
                fields[0] = (-rng.gen_range(0..=1000i64)).to_string();
            }
            Malformation::BadDuration => fields[last] = pick(BAD_DURATIONS, rng).to_string(),
            Malformation::NonPositiveDuration => {
                fields[last] = if rng.gen_bool(0.3) {
                    "0".to_string()
                } else {
                    format!("-{}", fields[last])
                };
            }
            Malformation::UnknownLabel => fields[1] = pick(UNKNOWN_LABELS, rng).to_string(),
        }

        record.text = fields.join(",");
        record.malformation = Some(malformation);
        record
    }

    /// Generates a record of the given shape, malformed with the configured
    /// probability.
    pub fn sample(&self, shape: RecordShape, rng: &mut impl Rng) -> GeneratedRecord {
        let fraction = self.config.malformed_fraction.clamp(0.0, 1.0);
        if rng.gen_bool(fraction) {
            let malformation = *pick(Malformation::for_shape(shape), rng);
            self.malformed(shape, malformation, rng)
        } else {
            self.valid(shape, rng)
        }
    }

    fn sample_steps(&self, rng: &mut impl Rng) -> u64 {
        let (min, max) = self.config.steps;
        let min = min.max(1);
        rng.gen_range(min..=max.max(min))
    }

    fn sample_elapsed(&self, rng: &mut impl Rng) -> Duration {
        let (min, max) = self.config.duration_seconds;
        let min = min.max(1);
        Duration::seconds(rng.gen_range(min..=max.max(min)))
    }
}

/// `items` must be non-empty.
fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Formats a whole-second duration the way records write it, e.g. `1h05m`,
/// `40m`, `2m30s`.
pub fn format_duration_literal(duration: Duration) -> String {
    let total = duration.whole_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h{minutes:02}m"));
    } else if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if seconds > 0 || out.is_empty() {
        out.push_str(&format!("{seconds}s"));
    }
    out
}
