//! Control panel: title, toolbar buttons and status line.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, PendingAction};
use crate::ui::animation::{brighten, glow_outline, pulse, status_color, title_color};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::BUTTONS;
use crate::ui::theme::{COLOR_BORDER, COLOR_BUTTON_BG, COLOR_BUTTON_TEXT, COLOR_PANEL_BG};

/// Application title shown at the top of the control panel.
pub const TITLE: &str = "Memory Visualizer";

pub fn render_control_panel(frame: &mut Frame, app: &App, time: f32) {
    let layout = &app.layout;

    let panel = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_PANEL_BG));
    frame.render_widget(panel, layout.control_panel);

    let title = Paragraph::new(Span::styled(
        TITLE,
        Style::default()
            .fg(title_color(time))
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, layout.title);

    for ((action, label), rect) in BUTTONS.iter().zip(layout.buttons.iter()) {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        frame.render_widget(button(app, *action, label, time), *rect);
    }

    if !app.status().is_empty() {
        let status = Paragraph::new(Line::from(app.status()))
            .style(Style::default().fg(status_color(time)))
            .wrap(Wrap { trim: true });
        frame.render_widget(status, layout.status);
    }
}

fn button<'a>(app: &App, action: ClickAction, label: &'a str, time: f32) -> Paragraph<'a> {
    let glow = if app.is_button_hovered(action) {
        pulse(time)
    } else {
        0.0
    };

    let armed = matches!(
        (action, app.interaction.pending_action()),
        (ClickAction::Allocate, PendingAction::Allocating) | (ClickAction::Free, PendingAction::Freeing)
    );

    let mut label_style = Style::default().fg(brighten(COLOR_BUTTON_TEXT, glow / 3.0));
    if let Some(hover) = app.hit_registry.get_hover_style(action) {
        label_style = label_style.patch(hover);
    }

    let mut spans = Vec::with_capacity(2);
    if armed {
        spans.push(Span::styled(format!("{} ", app.glyphs.marker), label_style));
    }
    spans.push(Span::styled(label, label_style));

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(if armed {
                    BorderType::Double
                } else {
                    BorderType::Plain
                })
                .border_style(Style::default().fg(glow_outline(COLOR_BORDER, glow))),
        )
        .style(Style::default().bg(COLOR_BUTTON_BG))
}
