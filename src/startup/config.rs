//! Visualizer configuration.
//!
//! Defaults describe the classic 10x10 pool. A few values can be tuned
//! through environment variables; the number of blocks is fixed.

use std::path::PathBuf;

use crate::error::{VizError, VizResult};

/// Number of blocks in the pool.
pub const BLOCK_COUNT: usize = 100;

/// Number of grid columns used to display the pool.
pub const GRID_COLUMNS: u16 = 10;

/// Default frame tick (~60fps).
pub const DEFAULT_TICK_RATE_MS: u64 = 16;

/// Environment variable overriding the tick rate.
pub const ENV_TICK_MS: &str = "MEMVIZ_TICK_MS";
/// Environment variable selecting the glyph set (`unicode` or `ascii`).
pub const ENV_GLYPHS: &str = "MEMVIZ_GLYPHS";
/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "MEMVIZ_LOG_FILE";

/// Configuration for a visualizer session.
///
/// # Example
///
/// ```
/// use memviz::startup::VisualizerConfig;
///
/// let config = VisualizerConfig::default().with_tick_rate_ms(33);
/// assert_eq!(config.tick_rate_ms, 33);
/// assert_eq!(config.block_count, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerConfig {
    /// Number of blocks in the registry
    pub block_count: usize,
    /// Grid width used for display
    pub grid_columns: u16,
    /// Milliseconds between animation ticks
    pub tick_rate_ms: u64,
    /// Requested glyph style (None = detect from locale)
    pub glyphs: Option<String>,
    /// Log file override (None = default location)
    pub log_file: Option<PathBuf>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            block_count: BLOCK_COUNT,
            grid_columns: GRID_COLUMNS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            glyphs: None,
            log_file: None,
        }
    }
}

impl VisualizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation tick in milliseconds.
    pub fn with_tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms;
        self
    }

    /// Request a glyph style by name.
    pub fn with_glyphs(mut self, glyphs: impl Into<String>) -> Self {
        self.glyphs = Some(glyphs.into());
        self
    }

    /// Write logs to `path` instead of the default location.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Build a config from `MEMVIZ_*` environment variables.
    ///
    /// Unset or empty variables keep their defaults. A tick rate that is
    /// not a number in `1..=1000` is rejected.
    pub fn from_env() -> VizResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = non_empty_var(ENV_TICK_MS) {
            config.tick_rate_ms = parse_tick_rate(&raw)?;
        }
        if let Some(glyphs) = non_empty_var(ENV_GLYPHS) {
            config = config.with_glyphs(glyphs);
        }
        if let Some(path) = non_empty_var(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }

        Ok(config)
    }

    /// Animation clock value (seconds) after `ticks` ticks.
    pub fn seconds_for_ticks(&self, ticks: u64) -> f32 {
        (ticks * self.tick_rate_ms) as f32 / 1000.0
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_tick_rate(raw: &str) -> VizResult<u64> {
    let value: u64 = raw
        .trim()
        .parse()
        .map_err(|_| VizError::config(ENV_TICK_MS, format!("`{}` is not a number", raw)))?;
    if !(1..=1000).contains(&value) {
        return Err(VizError::config(ENV_TICK_MS, "must be between 1 and 1000"));
    }
    Ok(value)
}
