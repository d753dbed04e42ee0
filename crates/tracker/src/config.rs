//! Runtime configuration loaded from environment variables.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ActivityLabels, BodyProfile};

pub const WEIGHT_VAR: &str = "TRACKER_WEIGHT_KG";
pub const HEIGHT_VAR: &str = "TRACKER_HEIGHT_M";
pub const RUNNING_LABEL_VAR: &str = "TRACKER_RUNNING_LABEL";
pub const WALKING_LABEL_VAR: &str = "TRACKER_WALKING_LABEL";
pub const OUTPUT_VAR: &str = "TRACKER_OUTPUT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be \"text\" or \"json\", got {value:?}")]
    InvalidOutputFormat { var: &'static str, value: String },

    #[error("running and walking labels must differ, both are {0:?}")]
    DuplicateLabel(String),
}

/// How summaries are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat {
                var: OUTPUT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub profile: BodyProfile,
    pub labels: ActivityLabels,
    pub output: OutputFormat,
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset
    /// variables. Weight and height are not range-checked here.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let weight = number_or(&lookup, WEIGHT_VAR, defaults.profile.weight)?;
        let height = number_or(&lookup, HEIGHT_VAR, defaults.profile.height)?;

        let labels = ActivityLabels::new(
            lookup(RUNNING_LABEL_VAR).unwrap_or(defaults.labels.running),
            lookup(WALKING_LABEL_VAR).unwrap_or(defaults.labels.walking),
        );
        if labels.running == labels.walking {
            return Err(ConfigError::DuplicateLabel(labels.running));
        }

        let output = match lookup(OUTPUT_VAR) {
            Some(value) => value.parse()?,
            None => defaults.output,
        };

        Ok(Self {
            profile: BodyProfile::new(weight, height),
            labels,
            output,
        })
    }
}

fn number_or(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: f64,
) -> Result<f64, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.profile, BodyProfile::new(75.0, 1.75));
        assert_eq!(config.labels, ActivityLabels::new("Running", "Walking"));
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = TrackerConfig::from_lookup(env(&[
            (WEIGHT_VAR, "82.5"),
            (HEIGHT_VAR, " 1.91 "),
            (RUNNING_LABEL_VAR, "Бег"),
            (WALKING_LABEL_VAR, "Ходьба"),
            (OUTPUT_VAR, "json"),
        ]))
        .unwrap();
        assert_eq!(config.profile, BodyProfile::new(82.5, 1.91));
        assert_eq!(config.labels, ActivityLabels::new("Бег", "Ходьба"));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            TrackerConfig::from_lookup(env(&[(WEIGHT_VAR, "heavy")])),
            Err(ConfigError::InvalidNumber {
                var: WEIGHT_VAR,
                value: "heavy".to_string(),
            })
        );
        assert_eq!(
            TrackerConfig::from_lookup(env(&[(OUTPUT_VAR, "yaml")])),
            Err(ConfigError::InvalidOutputFormat {
                var: OUTPUT_VAR,
                value: "yaml".to_string(),
            })
        );
        assert_eq!(
            TrackerConfig::from_lookup(env(&[(WALKING_LABEL_VAR, "Running")])),
            Err(ConfigError::DuplicateLabel("Running".to_string()))
        );
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(
            "JSON".parse::<OutputFormat>(),
            Err(ConfigError::InvalidOutputFormat {
                var: OUTPUT_VAR,
                value: "JSON".to_string(),
            })
        );
    }

    #[test]
    fn test_non_positive_profile_is_accepted() {
        let config = TrackerConfig::from_lookup(env(&[(WEIGHT_VAR, "0")])).unwrap();
        assert_eq!(config.profile.weight, 0.0);
    }
}
