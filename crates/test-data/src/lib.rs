//! Test data generation for tracker.
//!
//! This crate generates body profiles and activity records, both well formed
//! and deliberately broken, for property-style tests and for feeding the
//! `tracker` binary.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use test_data::prelude::*;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let record = RecordGenerator::new().valid(RecordShape::Training, &mut rng);
//! let profile = BodyProfileGenerator::new().generate(&mut rng);
//!
//! let summary = tracker::training_info(&record.text, profile, &Default::default()).unwrap();
//! assert_eq!(Some(summary.kind), record.kind);
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BodyDistribution, RecordGenConfig};
    pub use crate::generators::{
        GeneratedRecord, Malformation, RecordGenerator, RecordShape, format_duration_literal,
    };
    pub use crate::profiles::BodyProfileGenerator;
}
