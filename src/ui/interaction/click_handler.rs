//! Click action handler.
//!
//! Translates actions found by the hit area registry into controller
//! transitions.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    tracing::debug!("Click: {:?}", action);

    match action {
        ClickAction::Allocate => app.arm_allocate(),
        ClickAction::Free => app.arm_free(),
        ClickAction::ClearAll => app.clear_all(),
        ClickAction::SelectBlock(index) => app.click_block(index),
    }
}
