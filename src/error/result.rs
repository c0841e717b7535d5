//! Result type alias for memviz operations.

use super::viz_error::VizError;

/// Type alias for Results using [`VizError`].
pub type VizResult<T> = Result<T, VizError>;
