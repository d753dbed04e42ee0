use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tracker::{TrackerConfig, cli};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = TrackerConfig::from_env()?;
    tracing::info!(
        weight = config.profile.weight,
        height = config.profile.height,
        running = %config.labels.running,
        walking = %config.labels.walking,
        "Reading records from stdin"
    );

    let stats = cli::run(io::stdin().lock(), io::stdout().lock(), &config)?;

    tracing::info!(processed = stats.processed, failed = stats.failed, "Done");
    Ok(())
}
