//! Logging setup.
//!
//! Events go to a per-run log file and, compactly, to stdout. The file
//! is truncated at init so each run's discovery log stands alone.
//! Verbosity comes from `RUST_LOG`; absent that, this crate logs at
//! `info` and everything else at `warn`.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Directory log files are written to unless overridden.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// File name of the discovery log.
pub const DEFAULT_LOG_FILE: &str = "nearscout.log";

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn,nearscout=info";

/// Keeps the log file writer alive.
///
/// Dropping the guard flushes buffered events and closes the file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initializes the global subscriber with file and stdout output.
///
/// Creates `log_dir` if needed and truncates any previous `log_file`
/// in it. Call once at process start and hold the returned guard for
/// the process lifetime.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the log file
/// cannot be truncated.
pub fn init_logging(log_dir: impl AsRef<Path>, log_file: &str) -> io::Result<LoggingGuard> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir)?;
    File::create(log_dir.join(log_file))?;

    let (file_writer, file_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, log_file));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .compact();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
