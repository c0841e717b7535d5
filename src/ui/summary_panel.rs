//! Summary panel: status report and size histogram.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::theme::{COLOR_BORDER, COLOR_PANEL_BG, COLOR_SUMMARY_TEXT};

const HEADINGS: [&str; 2] = ["SYSTEM STATUS", "MEMORY DISTRIBUTION"];

pub fn render_summary_panel(frame: &mut Frame, app: &App) {
    let report = app.summary.report(app.glyphs.bar);
    let text_style = Style::default().fg(COLOR_SUMMARY_TEXT);

    let lines: Vec<Line> = report
        .lines()
        .map(|line| {
            if HEADINGS.contains(&line) {
                Line::from(Span::styled(
                    line.to_string(),
                    text_style.add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(line.to_string(), text_style))
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER))
            .style(Style::default().bg(COLOR_PANEL_BG)),
    );
    frame.render_widget(paragraph, app.layout.summary_panel);
}
