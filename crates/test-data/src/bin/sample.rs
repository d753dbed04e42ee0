//! Prints generated records to stdout, one per line.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin sample | cargo run -p tracker
//! ```
//!
//! `SAMPLE_COUNT` (default 20) and `SAMPLE_SEED` control the output.

use std::io::{self, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let count: usize = match std::env::var("SAMPLE_COUNT") {
        Ok(value) => value.parse()?,
        Err(_) => 20,
    };
    let mut rng = match std::env::var("SAMPLE_SEED") {
        Ok(value) => StdRng::seed_from_u64(value.parse()?),
        Err(_) => StdRng::from_entropy(),
    };

    let generator = RecordGenerator::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut malformed = 0usize;

    for i in 0..count {
        let shape = if i % 2 == 0 {
            RecordShape::Training
        } else {
            RecordShape::Day
        };
        let record = generator.sample(shape, &mut rng);
        if !record.is_valid() {
            malformed += 1;
            tracing::debug!(
                record = %record.text,
                malformation = ?record.malformation,
                "Generated malformed record"
            );
        }
        writeln!(out, "{}", record.text)?;
    }
    out.flush()?;

    tracing::info!(count, malformed, "Sample completed");
    Ok(())
}
