//! Dock of minimized windows, bottom-right corner.

use super::HitMap;
use crate::desk::{ClickTarget, Desk};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_dock(frame: &mut Frame, area: Rect, desk: &Desk, hits: &mut HitMap) {
    if area.height == 0 {
        return;
    }
    let row = area.y + area.height - 1;
    // Lay entries out right to left, newest closest to the corner
    let mut right = area.x + area.width;
    for window in desk.dock().collect::<Vec<_>>().into_iter().rev() {
        let label = format!(" [{}] {} ", window.id.open_key(), window.id.title());
        let width = label.chars().count() as u16;
        if right < area.x + width {
            break;
        }
        right -= width;
        let entry = Rect::new(right, row, width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ))),
            entry,
        );
        hits.push(entry, Some(ClickTarget::Dock(window.id)));
        right = right.saturating_sub(1);
    }
}
