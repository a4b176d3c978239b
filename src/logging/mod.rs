//! Application logging functionality
//!
//! Tracing setup for host-embedded use. Hosts that embed the engine
//! usually give plugins no console, so logs can go to a dated file under
//! the config directory instead of stderr.

use crate::core::config_file::ConfigFile;
use crate::core::errors::TweenResult;
use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr, filtered by `RUST_LOG` (defaults to `info`)
///
/// For development and test runs outside a host.
pub fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Log to a dated file under ~/.config/tween/logs/
///
/// Returns the appender guard; dropping it stops the background writer, so
/// the host should hold it for as long as it wants logs.
pub fn init_file_logging() -> TweenResult<WorkerGuard> {
    ConfigFile::initialize_logs_directory()?;

    let log_path = ConfigFile::current_log_file();
    let file_name = log_path
        .file_name()
        .context("log path has no file name")?
        .to_owned();

    let appender = tracing_appender::rolling::never(ConfigFile::logs_dir(), file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(default_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    tracing::info!("Logging to {:?}", log_path);
    Ok(guard)
}
