//! File-backed tracing setup. The terminal UI owns stdout, so log output
//! goes to `<log dir>/billSplit.log`.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::settings::config_dirs::LOG_FILE;
use crate::errors::AppError;

/// Install the global subscriber writing to `dir`. `RUST_LOG` takes
/// precedence over `level`. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init_logging(dir: &Path, level: &str) -> Result<WorkerGuard, AppError> {
    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // `try_init` also installs the `log` bridge for dependencies.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;
    Ok(guard)
}
