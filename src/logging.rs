//! Tracing setup.
//!
//! The TUI owns stdout, so log lines go to a file. The filter comes from
//! `MEMVIZ_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{VizError, VizResult};

/// Environment variable holding the log filter directive.
pub const ENV_LOG_FILTER: &str = "MEMVIZ_LOG";

/// Default log file: `<cache dir>/memviz/memviz.log`, or the temp dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("memviz")
        .join("memviz.log")
}

/// Install the global tracing subscriber writing to `path`.
///
/// Creates parent directories as needed and appends to an existing file.
/// Every failure is a [`VizError::Logging`].
pub fn init_logging(path: &Path) -> VizResult<()> {
    let open_failed = |e: std::io::Error| {
        VizError::Logging(format!("cannot open {}: {}", path.display(), e))
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(open_failed)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_failed)?;

    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| VizError::Logging(e.to_string()))?;

    tracing::info!("memviz {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Ok(())
}
