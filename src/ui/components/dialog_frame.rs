//! Dialog Frame Component
//!
//! A framed overlay with rounded borders. The caller supplies the rect
//! (from the screen layout); the frame clears what is underneath, draws
//! the border and returns the content area.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_PANEL_BG};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Border color (callers animate this)
    pub border_color: Color,
    /// Title color
    pub title_color: Color,
}

impl<'a> DialogFrameConfig<'a> {
    /// Create a new dialog frame configuration
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            border_color: COLOR_BORDER,
            title_color: COLOR_BORDER,
        }
    }

    /// Set the border color
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set the title color
    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }
}

/// Inner content area of a bordered dialog.
pub fn dialog_inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Render a dialog frame in `area` and return the inner content area
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    // Clear the background behind the dialog
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.border_color))
        .style(Style::default().bg(COLOR_PANEL_BG));

    frame.render_widget(block, area);

    dialog_inner(area)
}
