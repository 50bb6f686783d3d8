use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Set up tracing with a daily-rotating file appender for the host app.
///
/// The data layer itself only emits `tracing` events; the binary embedding it
/// calls this once at startup. With `console_output` a second ANSI layer
/// mirrors events to stderr for development.
///
/// # Returns
/// A guard that must be held for the program's lifetime to keep the
/// non-blocking writer flushing.
pub fn setup_logging(
    log_dir: &Utf8Path,
    verbose: bool,
    console_output: bool,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {log_dir}"))?;
    }

    let file_appender = rolling::daily(log_dir, "ralaunch");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true)
        .with_thread_ids(true);

    if console_output {
        let console_layer = tracing_subscriber::fmt::layer()
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Logging initialized: dir={}, verbose={}", log_dir, verbose);

    Ok(guard)
}
