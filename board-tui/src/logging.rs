//! Tracing setup.
//!
//! The interactive board owns stdout, so it logs to a daily-rolling file.
//! The one-shot subcommands log to stderr.

use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_PREFIX: &str = "dragboard";

/// Create `dir` if needed and return a non-blocking writer into it.
///
/// The returned guard must outlive all logging; dropping it flushes.
pub fn file_writer(dir: &Path) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(file_appender))
}

/// Install the file subscriber used by the interactive board.
pub fn init_file_logging(dir: &Path) -> std::io::Result<WorkerGuard> {
    let (non_blocking, guard) = file_writer(dir)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(guard)
}

/// Install a stderr subscriber for the non-interactive subcommands.
pub fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}
