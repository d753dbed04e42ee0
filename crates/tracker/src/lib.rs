//! Activity record parsing and fitness metrics.
//!
//! Records are short comma-separated lines: `steps,duration` for day totals
//! and `steps,label,duration` for a walking or running session.
//!
//! ```rust
//! let text = tracker::describe_training("10000,Walking,1h30m", 80.0, 1.8).unwrap();
//! assert!(text.starts_with("Training type: Walking\n"));
//!
//! // Day totals never fail; malformed records yield an empty string.
//! assert_eq!(tracker::describe_day_steps("abc,40m", 80.0, 1.8), "");
//! ```

pub mod cli;
pub mod config;
pub mod duration;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod record;
pub mod summary;

pub use config::{ConfigError, OutputFormat, TrackerConfig};
pub use errors::{Field, TrackerError};
pub use models::{ActivityKind, ActivityLabels, ActivityRecord, BodyProfile};
pub use summary::{
    DaySummary, TrainingSummary, day_action_info, describe_day_steps, describe_training,
    training_info,
};
