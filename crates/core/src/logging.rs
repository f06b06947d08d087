//! Logging configuration using tracing.
//!
//! The terminal belongs to the UI, so logs go to `battop.log` in the OS temp
//! directory. Level is controlled by the `BATTOP_LOG` environment variable.
//!
//! ```bash
//! BATTOP_LOG=debug battop
//! tail -f /tmp/battop.log
//! ```

use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE: &str = "battop.log";

/// Initialize the logging subsystem.
///
/// `verbose` raises the default level from `info` to `debug`; an explicit
/// `BATTOP_LOG` filter always wins.
pub fn init(verbose: bool) -> Result<PathBuf> {
    let log_dir = std::env::temp_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_env("BATTOP_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    let path = log_dir.join(LOG_FILE);
    tracing::info!("battop v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log file: {}", path.display());

    Ok(path)
}
