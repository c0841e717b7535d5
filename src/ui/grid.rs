//! Memory panel: one cell per block.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as Panel, BorderType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::memory::{Block, BlockState};
use crate::ui::animation::{block_glow, glow_outline};
use crate::ui::theme::{
    COLOR_ALLOCATED, COLOR_BLOCK_ID, COLOR_BLOCK_OUTLINE, COLOR_BORDER, COLOR_FREED,
    COLOR_MEMORY_BG, COLOR_SELECTED, COLOR_SIZE_TEXT, COLOR_UNTOUCHED,
};

/// Fill color for a block state.
pub fn block_fill(state: BlockState) -> Color {
    match state {
        BlockState::Allocated { .. } => COLOR_ALLOCATED,
        BlockState::Freed => COLOR_FREED,
        BlockState::Untouched => COLOR_UNTOUCHED,
    }
}

/// Outline color for a block at `time`.
pub fn block_outline(block: &Block, selected: bool, time: f32) -> Color {
    if selected {
        COLOR_SELECTED
    } else {
        glow_outline(COLOR_BLOCK_OUTLINE, block_glow(time, block.id()))
    }
}

pub fn render_memory_panel(frame: &mut Frame, app: &App, time: f32) {
    let panel = Panel::bordered()
        .title(Span::styled(
            " Memory ",
            Style::default().fg(COLOR_BORDER).add_modifier(Modifier::BOLD),
        ))
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_MEMORY_BG));
    frame.render_widget(panel, app.layout.memory_panel);

    let selected = app.interaction.selected_block();
    for (index, (block, rect)) in app.registry.iter().zip(app.layout.blocks.iter()).enumerate() {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        render_block(frame, app, block, *rect, selected == Some(index), time);
    }
}

fn render_block(frame: &mut Frame, app: &App, block: &Block, rect: Rect, selected: bool, time: f32) {
    let fill = block_fill(block.state());
    let outline = block_outline(block, selected, time);
    let size_label = block.is_allocated().then(|| format!("{}KB", block.size_kb()));
    let size_style = Style::default()
        .fg(COLOR_SIZE_TEXT)
        .add_modifier(Modifier::BOLD);

    // Roomy cells get a border with the id in it
    if rect.height >= 3 && rect.width >= 4 {
        let id_style = if selected {
            Style::default().fg(COLOR_SELECTED).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_BLOCK_ID)
        };
        let frame_block = Panel::bordered()
            .title(Span::styled(block.id().to_string(), id_style))
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(Style::default().fg(outline))
            .style(Style::default().bg(fill));
        let inner_width = rect.width.saturating_sub(2) as usize;
        let content = size_label
            .map(|label| fit_label(label, inner_width, app.glyphs.fill))
            .unwrap_or_default();
        let paragraph = Paragraph::new(Line::from(Span::styled(content, size_style)))
            .alignment(Alignment::Center)
            .block(frame_block);
        frame.render_widget(paragraph, rect);
        return;
    }

    // Compact cells: id on the fill color, size below when there is a row for it
    let mut lines = vec![Line::from(Span::styled(
        block.id().to_string(),
        Style::default().fg(outline),
    ))];
    if rect.height >= 2 {
        if let Some(label) = size_label {
            lines.push(Line::from(Span::styled(
                fit_label(label, rect.width as usize, app.glyphs.fill),
                size_style,
            )));
        }
    }
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(fill));
    frame.render_widget(paragraph, rect);
}

/// `label` if it fits in `width`, otherwise the fill glyph repeated.
fn fit_label(label: String, width: usize, fill: &str) -> String {
    if label.chars().count() <= width {
        label
    } else {
        fill.repeat(width)
    }
}
