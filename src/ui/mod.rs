//! Terminal rendering for the memory visualizer.
//!
//! The screen is three panels side by side: controls on the left, the
//! block grid in the middle and the summary on the right. The size entry
//! box floats over the grid while a size is awaited.
//!
//! Rendering reads from [`App`] only. Geometry comes from
//! [`layout::ScreenLayout`], which also feeds the hit areas.

pub mod animation;
pub mod components;
pub mod controls;
pub mod grid;
pub mod input_box;
pub mod interaction;
pub mod layout;
pub mod summary_panel;
pub mod theme;

pub use layout::ScreenLayout;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::App;
use controls::render_control_panel;
use grid::render_memory_panel;
use input_box::render_input_box;
use summary_panel::render_summary_panel;
use theme::COLOR_BACKGROUND;

/// Draw one full frame.
pub fn render(frame: &mut Frame, app: &App) {
    let time = app.animation_time();

    frame.render_widget(
        Block::default().style(Style::default().bg(COLOR_BACKGROUND)),
        frame.area(),
    );

    render_control_panel(frame, app, time);
    render_memory_panel(frame, app, time);
    render_summary_panel(frame, app);

    if app.interaction.input_box_visible() {
        render_input_box(frame, app, time);
    }
}
