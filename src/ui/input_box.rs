//! Size entry overlay shown while a block awaits its size.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::memory::{MAX_BLOCK_SIZE_KB, MIN_BLOCK_SIZE_KB};
use crate::ui::animation::{glow_outline, prompt_color, pulse};
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::theme::{COLOR_BORDER, COLOR_SIZE_TEXT};

/// Prompt line above the typed digits.
pub fn prompt_text() -> String {
    format!("Enter Size ({}-{} KB):", MIN_BLOCK_SIZE_KB, MAX_BLOCK_SIZE_KB)
}

pub fn render_input_box(frame: &mut Frame, app: &App, time: f32) {
    let Some(block) = app.interaction.selected_block() else {
        return;
    };
    let area = app.layout.input_box;
    if area.width < 3 || area.height < 3 {
        return;
    }

    let title = format!("Block {}", block + 1);
    let config = DialogFrameConfig::new(&title)
        .border_color(glow_outline(COLOR_BORDER, pulse(time)))
        .title_color(COLOR_BORDER);
    let inner = render_dialog_frame(frame, area, &config);

    let lines = vec![
        Line::from(Span::styled(
            prompt_text(),
            Style::default().fg(prompt_color(time)),
        )),
        Line::from(vec![
            Span::styled(
                app.interaction.pending_input_text().to_string(),
                Style::default()
                    .fg(COLOR_SIZE_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
