//! Application state and the interaction controller.
//!
//! [`App`] owns the block registry, the interaction state machine, the
//! cached summary and the hit areas derived from the current layout.
//! Transitions live in [`handlers`]; rendering only reads from `App`.

mod handlers;
mod types;

pub use types::{
    ArmedAction, InteractionState, PendingAction, Phase, SizeBuffer, MAX_SIZE_DIGITS,
};

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::memory::{BlockRegistry, MemorySummary};
use crate::startup::{GlyphSet, VisualizerConfig};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::COLOR_BUTTON_TEXT;

/// Terminal size assumed until the first resize event.
pub const DEFAULT_TERMINAL_SIZE: (u16, u16) = (120, 40);

/// The whole visualizer: model, controller state and view geometry.
pub struct App {
    pub config: VisualizerConfig,
    pub glyphs: GlyphSet,
    /// The pool of blocks
    pub registry: BlockRegistry,
    /// State machine, input buffer and status line
    pub interaction: InteractionState,
    /// Summary recomputed after every committed change
    pub summary: MemorySummary,
    /// Clickable regions for the current layout
    pub hit_registry: HitAreaRegistry,
    pub layout: ScreenLayout,
    /// Animation ticks since start
    pub tick_count: u64,
    /// Set whenever the next frame must be drawn
    pub needs_redraw: bool,
    pub should_quit: bool,
    last_pointer: Option<(u16, u16)>,
}

impl App {
    /// Create the app with a fresh registry of `config.block_count` blocks.
    pub fn new(config: VisualizerConfig, glyphs: GlyphSet) -> Self {
        let registry = BlockRegistry::create(config.block_count);
        let summary = registry.summary();
        let (width, height) = DEFAULT_TERMINAL_SIZE;
        let layout = ScreenLayout::compute(
            Rect::new(0, 0, width, height),
            config.block_count,
            config.grid_columns,
        );

        let mut app = Self {
            config,
            glyphs,
            registry,
            interaction: InteractionState::new(),
            summary,
            hit_registry: HitAreaRegistry::new(),
            layout,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            last_pointer: None,
        };
        app.rebuild_hit_areas();
        app
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the animation clock by one tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.mark_dirty();
    }

    /// Animation clock in seconds.
    pub fn animation_time(&self) -> f32 {
        self.config.seconds_for_ticks(self.tick_count)
    }

    pub fn terminal_width(&self) -> u16 {
        self.layout.area.width
    }

    pub fn terminal_height(&self) -> u16 {
        self.layout.area.height
    }

    /// Recompute layout and hit areas for a new terminal size.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if self.layout.area.width == width && self.layout.area.height == height {
            return;
        }
        self.layout = ScreenLayout::compute(
            Rect::new(0, 0, width, height),
            self.config.block_count,
            self.config.grid_columns,
        );
        self.rebuild_hit_areas();
        tracing::debug!("Layout recomputed for {}x{}", width, height);
        self.mark_dirty();
    }

    /// Recompute the cached summary from the registry.
    pub fn refresh_summary(&mut self) {
        self.summary = self.registry.summary();
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.interaction.status
    }

    fn rebuild_hit_areas(&mut self) {
        let hover = Style::default()
            .fg(COLOR_BUTTON_TEXT)
            .add_modifier(Modifier::BOLD);
        self.layout.register_hit_areas(&mut self.hit_registry, hover);
        if let Some((x, y)) = self.last_pointer {
            self.hit_registry.update_hover(x, y);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(VisualizerConfig::default(), GlyphSet::ASCII)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_initial_state() {
        let app = App::default();
        assert_eq!(app.registry.len(), 100);
        assert_eq!(app.interaction.phase, Phase::Idle);
        assert_eq!(app.summary.available_count, 100);
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
        assert_eq!(app.hit_registry.len(), 103);
    }

    #[test]
    fn test_tick_advances_clock_and_marks_dirty() {
        let mut app = App::default();
        app.needs_redraw = false;
        app.tick();
        assert_eq!(app.tick_count, 1);
        assert!(app.needs_redraw);
        assert!(app.animation_time() > 0.0);
    }

    #[test]
    fn test_update_terminal_dimensions() {
        let mut app = App::default();
        app.needs_redraw = false;
        app.update_terminal_dimensions(200, 60);
        assert!(app.needs_redraw);
        assert_eq!(app.terminal_width(), 200);
        assert_eq!(app.terminal_height(), 60);
        assert_eq!(app.hit_registry.len(), 103);

        app.needs_redraw = false;
        app.update_terminal_dimensions(200, 60);
        assert!(!app.needs_redraw, "same dimensions should not mark dirty");
    }
}
