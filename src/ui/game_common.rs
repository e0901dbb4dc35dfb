//! Shared UI pieces for the game windows.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the info panel on the right of every game window.
pub const INFO_PANEL_WIDTH: u16 = 20;

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Main content area (board) - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Create a standardized window layout with outer border.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    fullscreen: bool,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let title = if fullscreen {
        format!(" {} [fullscreen] ", title)
    } else {
        format!(" {} ", title)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Which title-bar button a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleButton {
    Minimize,
    Fullscreen,
    Close,
}

const TITLE_BUTTON_WIDTH: u16 = 3;

/// Areas of the minimize, fullscreen and close buttons on the top border of
/// `area`, right-aligned inside the corner. Empty when the window is too
/// narrow to fit them next to a title.
pub fn title_button_areas(area: Rect) -> Vec<(TitleButton, Rect)> {
    let buttons = [
        TitleButton::Minimize,
        TitleButton::Fullscreen,
        TitleButton::Close,
    ];
    let strip = TITLE_BUTTON_WIDTH * buttons.len() as u16;
    if area.height == 0 || area.width < strip + 16 {
        return Vec::new();
    }
    let start = area.x + area.width - 1 - strip;
    buttons
        .iter()
        .enumerate()
        .map(|(i, &button)| {
            let x = start + i as u16 * TITLE_BUTTON_WIDTH;
            (button, Rect::new(x, area.y, TITLE_BUTTON_WIDTH, 1))
        })
        .collect()
}

/// Draw `[-][□][×]` on the window's top border (`⊡` while fullscreen).
pub fn render_title_buttons(frame: &mut Frame, area: Rect, fullscreen: bool) {
    for (button, rect) in title_button_areas(area) {
        let (symbol, color) = match button {
            TitleButton::Minimize => ("-", Color::Yellow),
            TitleButton::Fullscreen if fullscreen => ("⊡", Color::Green),
            TitleButton::Fullscreen => ("□", Color::Green),
            TitleButton::Close => ("×", Color::Red),
        };
        let label = Line::from(vec![
            Span::styled("[", Style::default().fg(Color::DarkGray)),
            Span::styled(
                symbol,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("]", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(label), rect);
    }
}

/// Outer size a window needs to show a `content_w` x `content_h` board.
pub fn window_size_for_content(content_w: u16, content_h: u16) -> (u16, u16) {
    (
        content_w.saturating_add(INFO_PANEL_WIDTH + 2),
        content_h.saturating_add(2 + 2),
    )
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Esc]", "Close")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render an info panel frame with the standard " Info " title.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A "label: value" line for the info panel.
pub fn info_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Tone of the game-over banner.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ResultTone {
    Win,
    Loss,
    Draw,
}

impl ResultTone {
    pub fn color(self) -> Color {
        match self {
            ResultTone::Win => Color::Green,
            ResultTone::Loss => Color::Red,
            ResultTone::Draw => Color::Yellow,
        }
    }
}

/// Render a compact game-over banner at the bottom of an area.
///
/// Does not clear the area, so the board stays visible behind it.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    tone: ResultTone,
    title: &str,
    message: &str,
    hint: &str,
) {
    let banner_height: u16 = 4;
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        y: area.y + area.height - banner_height,
        height: banner_height,
        ..area
    };

    frame.render_widget(Clear, banner_area);

    let color = tone.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Centered one-line prompt in the middle of an area (start/pause screens).
pub fn render_center_prompt(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    if area.height == 0 {
        return;
    }
    let width = (text.chars().count() as u16 + 4).min(area.width);
    let prompt_area = centered_rect(area, width, 1);
    frame.render_widget(Clear, prompt_area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        prompt_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 20, 10), Rect::new(40, 15, 20, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        assert_eq!(centered_rect(area, 50, 50), area);
    }

    #[test]
    fn test_window_size_adds_chrome() {
        assert_eq!(window_size_for_content(30, 15), (52, 19));
    }

    #[test]
    fn test_title_buttons_sit_in_top_right_corner() {
        let areas = title_button_areas(Rect::new(10, 5, 40, 20));
        let kinds: Vec<_> = areas.iter().map(|(b, _)| *b).collect();
        assert_eq!(
            kinds,
            vec![
                TitleButton::Minimize,
                TitleButton::Fullscreen,
                TitleButton::Close
            ]
        );
        // Right border is column 49; the close button ends just before it
        assert_eq!(areas[2].1, Rect::new(46, 5, 3, 1));
        assert_eq!(areas[0].1, Rect::new(40, 5, 3, 1));
    }

    #[test]
    fn test_title_buttons_skipped_when_too_narrow() {
        assert!(title_button_areas(Rect::new(0, 0, 20, 10)).is_empty());
    }
}
