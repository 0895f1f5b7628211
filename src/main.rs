// src/main.rs

use std::{env, fs::File, sync::Arc};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    init_tracing()?;

    let config = doable::config::load()?;
    info!("starting doable");
    doable::ui::run(config)
}

/// Send tracing output to the file named by `DOABLE_LOG`, if set. The
/// alternate screen owns stdout and stderr, so logs go to a file or
/// nowhere at all.
fn init_tracing() -> Result<()> {
    let Ok(path) = env::var("DOABLE_LOG") else {
        return Ok(());
    };

    let file =
        File::create(&path).with_context(|| format!("failed to create log file at {path}"))?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .init();

    Ok(())
}
