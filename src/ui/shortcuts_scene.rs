//! Keyboard shortcuts help window.

use crate::desk::{help_groups, HELP_WINDOW_HEIGHT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::block::{Position, Title},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const WIDTH: u16 = 52;
const KEY_COLUMN: usize = 10;

pub fn preferred_size() -> (u16, u16) {
    (WIDTH, HELP_WINDOW_HEIGHT)
}

/// Every group as display lines: heading, entries, blank line.
fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for group in help_groups() {
        lines.push(Line::from(Span::styled(
            group.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in group.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = KEY_COLUMN),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(description, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines
}

pub fn render_shortcuts(frame: &mut Frame, area: Rect, scroll: u16, fullscreen: bool) {
    frame.render_widget(Clear, area);

    let title = if fullscreen {
        " Keyboard Shortcuts [fullscreen] "
    } else {
        " Keyboard Shortcuts "
    };
    let block = Block::default()
        .title(title)
        .title(
            Title::from(" [j/k] Scroll  [Esc] Close ")
                .position(Position::Bottom)
                .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = help_lines();
    // Don't scroll past the last screenful
    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
    frame.render_widget(
        Paragraph::new(lines).scroll((scroll.min(max_scroll), 0)),
        inner,
    );
}
