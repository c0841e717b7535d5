//! In-memory model of the visualized pool.
//!
//! - [`block`] - a single [`Block`] and its allocation state
//! - [`registry`] - the fixed-size [`BlockRegistry`]
//! - [`summary`] - derived [`MemorySummary`] and [`SizeHistogram`]

pub mod block;
pub mod registry;
pub mod summary;

pub use block::{Block, BlockState, MAX_BLOCK_SIZE_KB, MIN_BLOCK_SIZE_KB};
pub use registry::BlockRegistry;
pub use summary::{MemorySummary, SizeHistogram, HISTOGRAM_BUCKETS};
