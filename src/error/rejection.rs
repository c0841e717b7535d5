//! Recoverable rejections of user input.
//!
//! A rejection never mutates the registry. The controller shows its
//! [`status_message`](InputRejection::status_message) and keeps waiting.

use thiserror::Error;

use crate::memory::{MAX_BLOCK_SIZE_KB, MIN_BLOCK_SIZE_KB};

/// Why a size confirmation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    /// The entered size is outside `[10, 100]` KB or could not be parsed.
    #[error("size outside {}-{} KB", MIN_BLOCK_SIZE_KB, MAX_BLOCK_SIZE_KB)]
    SizeOutOfRange,

    /// The selected block already holds an allocation.
    #[error("block {} already allocated", .index + 1)]
    AlreadyAllocated { index: usize },
}

impl InputRejection {
    /// Status line shown to the user.
    pub fn status_message(&self) -> String {
        match self {
            InputRejection::SizeOutOfRange => {
                format!("Size must be {}-{} KB", MIN_BLOCK_SIZE_KB, MAX_BLOCK_SIZE_KB)
            }
            InputRejection::AlreadyAllocated { .. } => "Block already allocated".to_string(),
        }
    }
}
