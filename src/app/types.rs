//! Type definitions for the interaction state machine.
//!
//! - [`ArmedAction`] - toolbar action waiting for a block click
//! - [`Phase`] - the controller state
//! - [`PendingAction`] - the armed action as seen by the renderer
//! - [`SizeBuffer`] - digits typed while waiting for a size
//! - [`InteractionState`] - everything above plus the status line

/// Maximum number of digits accepted in the size buffer.
pub const MAX_SIZE_DIGITS: usize = 3;

/// Toolbar action that governs how the next block click is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmedAction {
    Allocate,
    Free,
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No action armed; block clicks are ignored.
    #[default]
    Idle,
    /// A toolbar button was pressed; waiting for a block click.
    AwaitingBlockSelection(ArmedAction),
    /// A block is selected for allocation; waiting for its size.
    AwaitingSizeEntry { block: usize },
}

/// The armed action, flattened for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingAction {
    #[default]
    None,
    Allocating,
    Freeing,
}

/// Decimal digits typed while awaiting a size (at most three).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeBuffer {
    digits: String,
}

impl SizeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `ch` if it is an ASCII digit and there is room.
    ///
    /// Returns true if the buffer changed.
    pub fn push(&mut self, ch: char) -> bool {
        if ch.is_ascii_digit() && self.digits.len() < MAX_SIZE_DIGITS {
            self.digits.push(ch);
            true
        } else {
            false
        }
    }

    /// Remove the last digit. Returns false when already empty.
    pub fn backspace(&mut self) -> bool {
        self.digits.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Parse the digits as an integer.
    pub fn value(&self) -> Option<u32> {
        self.digits.parse().ok()
    }
}

/// Process-wide interaction state, owned by the [`App`](super::App).
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub phase: Phase,
    pub buffer: SizeBuffer,
    /// Last human-readable feedback
    pub status: String,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_action(&self) -> PendingAction {
        match self.phase {
            Phase::Idle => PendingAction::None,
            Phase::AwaitingBlockSelection(ArmedAction::Allocate)
            | Phase::AwaitingSizeEntry { .. } => PendingAction::Allocating,
            Phase::AwaitingBlockSelection(ArmedAction::Free) => PendingAction::Freeing,
        }
    }

    /// Index of the block awaiting a size, if any.
    pub fn selected_block(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingSizeEntry { block } => Some(block),
            _ => None,
        }
    }

    /// The size entry box is shown only while a size is awaited.
    pub fn input_box_visible(&self) -> bool {
        matches!(self.phase, Phase::AwaitingSizeEntry { .. })
    }

    pub fn pending_input_text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}
