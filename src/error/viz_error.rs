//! Unified error type for memviz.
//!
//! Everything that can go wrong outside the interaction state machine ends
//! up here: terminal I/O, configuration, asset loading and logging setup.

use thiserror::Error;

/// Errors raised by the ambient parts of the program.
#[derive(Debug, Error)]
pub enum VizError {
    /// Terminal setup, drawing or event polling failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// A configuration value could not be used.
    #[error("invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    /// An asset (glyph set) could not be resolved.
    #[error("asset `{name}` unavailable: {message}")]
    Asset { name: String, message: String },

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl VizError {
    /// Convenience constructor for [`VizError::Config`].
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        VizError::Config {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Whether the program can continue in a degraded mode.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, VizError::Asset { .. } | VizError::Logging(_))
    }

    /// Short error code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            VizError::Terminal(_) => "E_TERM",
            VizError::Config { .. } => "E_CONFIG",
            VizError::Asset { .. } => "E_ASSET",
            VizError::Logging(_) => "E_LOG",
        }
    }
}
