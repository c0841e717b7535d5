//! Shared helpers for integration tests.
//!
//! Everything here drives the app through pointer coordinates and text
//! events, the same way the terminal does.

#![allow(dead_code)]

use memviz::app::App;
use memviz::events::{InputEvent, CONFIRM};
use memviz::ui::interaction::ClickAction;

/// Press the pointer at the top-left cell of the area registered for
/// `action`.
pub fn click(app: &mut App, action: ClickAction) {
    let rect = app
        .hit_registry
        .rect_for(action)
        .unwrap_or_else(|| panic!("no hit area for {:?}", action));
    app.handle_event(InputEvent::PointerPressed {
        x: rect.x,
        y: rect.y,
    });
}

/// Press the pointer on block `index`.
pub fn click_block(app: &mut App, index: usize) {
    click(app, ClickAction::SelectBlock(index));
}

/// Type each character of `text` as a text event.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_event(InputEvent::Text(ch));
    }
}

/// Allocate -> block -> size -> confirm.
pub fn allocate(app: &mut App, index: usize, size: &str) {
    click(app, ClickAction::Allocate);
    click_block(app, index);
    type_text(app, size);
    app.handle_event(InputEvent::Text(CONFIRM));
}

/// Free -> block.
pub fn free(app: &mut App, index: usize) {
    click(app, ClickAction::Free);
    click_block(app, index);
}
