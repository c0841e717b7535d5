//! State machine transitions.
//!
//! | State | Event | Next |
//! |-------|-------|------|
//! | any | Allocate button | AwaitingBlockSelection(Allocate) |
//! | any | Free button | AwaitingBlockSelection(Free) |
//! | any | Clear All button | Idle |
//! | AwaitingBlockSelection(Allocate) | unallocated block | AwaitingSizeEntry |
//! | AwaitingBlockSelection(Free) | allocated block | Idle |
//! | AwaitingSizeEntry | digit / backspace | AwaitingSizeEntry |
//! | AwaitingSizeEntry | confirm, valid | Idle |
//! | AwaitingSizeEntry | confirm, rejected | AwaitingSizeEntry |
//!
//! Anything else leaves the state unchanged.

use ratatui::layout::Position;

use super::types::{ArmedAction, Phase};
use super::App;
use crate::error::InputRejection;
use crate::events::{InputEvent, BACKSPACE, CONFIRM};
use crate::memory::{MAX_BLOCK_SIZE_KB, MIN_BLOCK_SIZE_KB};
use crate::ui::interaction::{handle_click_action, ClickAction};

impl App {
    /// Dispatch one input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerPressed { x, y } => self.pointer_pressed(x, y),
            InputEvent::PointerMoved { x, y } => self.pointer_moved(x, y),
            InputEvent::Text(ch) => self.handle_text(ch),
            InputEvent::Resize { width, height } => self.update_terminal_dimensions(width, height),
            InputEvent::Quit => self.quit(),
        }
    }

    /// Route a click through the hit areas. Misses change nothing.
    ///
    /// The size entry box covers part of the grid while it is shown, so a
    /// click inside it never reaches the blocks underneath.
    pub fn pointer_pressed(&mut self, x: u16, y: u16) {
        if self.interaction.input_box_visible()
            && self.layout.input_box.contains(Position::new(x, y))
        {
            tracing::trace!("Click at ({}, {}) on the size entry box", x, y);
            return;
        }
        match self.hit_registry.hit_test(x, y) {
            Some(action) => handle_click_action(self, action),
            None => tracing::trace!("Click at ({}, {}) hit nothing", x, y),
        }
    }

    /// Track the pointer for button hover feedback.
    pub fn pointer_moved(&mut self, x: u16, y: u16) {
        self.last_pointer = Some((x, y));
        if self.hit_registry.update_hover(x, y) {
            self.mark_dirty();
        }
    }

    /// Whether the pointer rests on the given toolbar button.
    pub fn is_button_hovered(&self, action: ClickAction) -> bool {
        action.is_button() && self.hit_registry.is_hovered(action)
    }

    /// "Allocate" button: arm allocation and drop any pending entry.
    pub fn arm_allocate(&mut self) {
        self.interaction.phase = Phase::AwaitingBlockSelection(ArmedAction::Allocate);
        self.interaction.buffer.clear();
        self.interaction.set_status("Select a block to allocate");
        tracing::debug!("Armed allocate");
        self.mark_dirty();
    }

    /// "Free" button: arm freeing and drop any pending entry.
    pub fn arm_free(&mut self) {
        if let Phase::AwaitingSizeEntry { block } = self.interaction.phase {
            tracing::debug!("Abandoned size entry for block {}", block + 1);
        }
        self.interaction.phase = Phase::AwaitingBlockSelection(ArmedAction::Free);
        self.interaction.buffer.clear();
        self.interaction.set_status("Select a block to free");
        tracing::debug!("Armed free");
        self.mark_dirty();
    }

    /// "Clear All" button: reset every block and return to idle.
    pub fn clear_all(&mut self) {
        self.registry.clear_all();
        self.interaction.phase = Phase::Idle;
        self.interaction.buffer.clear();
        self.interaction.set_status("All blocks cleared");
        self.refresh_summary();
        tracing::info!("Cleared all {} blocks", self.registry.len());
        self.mark_dirty();
    }

    /// A click on block `index`, interpreted by the armed action.
    ///
    /// Allocation only targets unallocated blocks and freeing only targets
    /// allocated ones; other clicks are filtered out silently.
    pub fn click_block(&mut self, index: usize) {
        let allocated = self.registry.get(index).is_allocated();

        match self.interaction.phase {
            Phase::AwaitingBlockSelection(ArmedAction::Allocate) | Phase::AwaitingSizeEntry { .. }
                if !allocated =>
            {
                self.interaction.phase = Phase::AwaitingSizeEntry { block: index };
                self.interaction
                    .set_status(format!("Enter size for block {}", index + 1));
                tracing::debug!("Selected block {} for allocation", index + 1);
                self.mark_dirty();
            }
            Phase::AwaitingBlockSelection(ArmedAction::Free) if allocated => {
                self.registry.get_mut(index).free();
                self.interaction.phase = Phase::Idle;
                self.interaction.set_status(format!("Freed block {}", index + 1));
                self.refresh_summary();
                tracing::info!("Freed block {}", index + 1);
                self.mark_dirty();
            }
            phase => {
                tracing::trace!("Ignored click on block {} in {:?}", index + 1, phase);
            }
        }
    }

    /// A typed character. Only meaningful while a size is awaited.
    pub fn handle_text(&mut self, ch: char) {
        if !self.interaction.input_box_visible() {
            return;
        }
        match ch {
            BACKSPACE | '\u{7f}' => {
                if self.interaction.buffer.backspace() {
                    self.mark_dirty();
                }
            }
            CONFIRM | '\n' => self.confirm_size(),
            ch => {
                if self.interaction.buffer.push(ch) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Commit the typed size to the selected block.
    ///
    /// An empty buffer is ignored. A rejected size or target leaves the
    /// registry untouched and keeps the entry open for another try.
    pub fn confirm_size(&mut self) {
        let Phase::AwaitingSizeEntry { block } = self.interaction.phase else {
            return;
        };
        if self.interaction.buffer.is_empty() {
            return;
        }

        match self.validate_allocation(block) {
            Ok(size_kb) => {
                self.registry.get_mut(block).allocate(size_kb);
                self.interaction.phase = Phase::Idle;
                self.interaction.buffer.clear();
                self.interaction
                    .set_status(format!("Allocated block {} ({} KB)", block + 1, size_kb));
                self.refresh_summary();
                tracing::info!("Allocated block {} ({} KB)", block + 1, size_kb);
            }
            Err(rejection) => {
                self.interaction.set_status(rejection.status_message());
                tracing::debug!("Rejected size entry: {}", rejection);
            }
        }
        self.mark_dirty();
    }

    fn validate_allocation(&self, block: usize) -> Result<u32, InputRejection> {
        let size_kb = self
            .interaction
            .buffer
            .value()
            .filter(|size| (MIN_BLOCK_SIZE_KB..=MAX_BLOCK_SIZE_KB).contains(size))
            .ok_or(InputRejection::SizeOutOfRange)?;

        if self.registry.get(block).is_allocated() {
            return Err(InputRejection::AlreadyAllocated { index: block });
        }
        Ok(size_kb)
    }
}
