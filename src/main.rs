//! platter binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod catalog;
mod config;
mod events;
mod logic;
mod state;
mod theme;
mod ui;
mod util;

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

/// Timestamp formatter producing `YYYY-MM-DD HH:MM:SS` log prefixes.
struct PlatterTimer;

impl tracing_subscriber::fmt::time::FormatTime for PlatterTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = match SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => i64::try_from(d.as_secs()).unwrap_or(0),
            Err(_) => 0,
        };
        w.write_str(&crate::util::format_epoch_seconds(secs))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();

    // Initialize tracing logger writing to ~/.config/platter/logs/platter.log
    {
        let mut log_path = crate::config::logs_dir();
        log_path.push("platter.log");
        let default_level = args::determine_log_level(&cli);
        let env_filter = || {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level.clone()))
        };
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(PlatterTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(PlatterTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    tracing::info!("platter starting");
    if let Err(err) = app::run(&cli).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("platter exited");
}
