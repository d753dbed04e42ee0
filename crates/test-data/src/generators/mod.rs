//! Record generators for test data.
//!
//! - [`RecordGenerator`]: valid and deliberately malformed activity records

pub mod record;

pub use record::{
    GeneratedRecord, Malformation, RecordGenerator, RecordShape, format_duration_literal,
};
