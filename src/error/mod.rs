//! Error handling for memviz.
//!
//! | Type | Raised by | Handling |
//! |------|-----------|----------|
//! | [`InputRejection`] | size confirmation | status message, state unchanged |
//! | [`VizError::Asset`] | glyph loading | `warn!`, fall back to ASCII |
//! | [`VizError::Logging`] | log setup | stderr note, continue |
//! | [`VizError::Config`] | `VisualizerConfig::from_env` | abort before the TUI starts |
//! | [`VizError::Terminal`] | terminal I/O | abort, terminal restored |
//!
//! Out-of-range block indices are programming errors and panic.

mod rejection;
mod result;
mod viz_error;

pub use rejection::InputRejection;
pub use result::VizResult;
pub use viz_error::VizError;
