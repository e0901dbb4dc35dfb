//! Home screen: title and the root shortcuts.

use crate::desk::{scope_for, ScopeId};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: [&str; 3] = [
    "┌─┐┌─┐┌─┐┬┌─┌─┐┌┬┐  ┌─┐┬─┐┌─┐┌─┐┌┬┐┌─┐",
    "├─┘│ ││  ├┴┐├┤  │   ├─┤├┬┘│  ├─┤ ││├┤ ",
    "┴  └─┘└─┘┴ ┴└─┘ ┴   ┴ ┴┴└─└─┘┴ ┴─┴┘└─┘",
];

pub fn render_home(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(TITLE.iter().map(|row| {
        Line::from(Span::styled(
            *row,
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press a key to play",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    for binding in scope_for(ScopeId::Home).bindings {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}]", binding.key_label()),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!(" {:<24}", binding.description),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    let top_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
    let mut padded = vec![Line::from(""); top_pad as usize];
    padded.extend(lines);
    frame.render_widget(Paragraph::new(padded).alignment(Alignment::Center), inner);
}
