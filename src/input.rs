//! Terminal event handling.
//!
//! Turns crossterm events into desk operations: keys go through the shortcut
//! stack, left clicks are resolved against the last frame's hit map.

use crate::arcade::Viewport;
use crate::desk::{Action, Desk};
use crate::ui::HitMap;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use rand::Rng;

/// Apply one terminal event. Returns true if the screen should be redrawn.
pub fn handle_event<R: Rng>(
    event: Event,
    desk: &mut Desk,
    hits: &HitMap,
    rng: &mut R,
) -> bool {
    match event {
        Event::Key(key) => handle_key(key, desk, rng),
        Event::Mouse(mouse) => handle_mouse(mouse, desk, hits, rng),
        Event::FocusGained => {
            desk.set_focus(true);
            false
        }
        Event::FocusLost => {
            desk.set_focus(false);
            false
        }
        Event::Resize(cols, rows) => {
            desk.resize(Viewport::from_terminal(cols, rows));
            true
        }
        _ => false,
    }
}

fn handle_key<R: Rng>(key: KeyEvent, desk: &mut Desk, rng: &mut R) -> bool {
    // Releases and repeats arrive on some terminals; only presses count
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            desk.apply(Action::Quit, rng);
            return true;
        }
        return false;
    }
    desk.handle_key(key.code, rng)
}

fn handle_mouse<R: Rng>(mouse: MouseEvent, desk: &mut Desk, hits: &HitMap, rng: &mut R) -> bool {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    match hits.target_at(mouse.column, mouse.row) {
        Some(target) => {
            desk.click(target, rng);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arcade::TickRates;
    use crate::desk::{ClickTarget, WindowId};
    use crossterm::event::KeyEventState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn desk() -> (Desk, ChaCha8Rng) {
        (
            Desk::new(Viewport::default(), TickRates::default()),
            ChaCha8Rng::seed_from_u64(11),
        )
    }

    #[test]
    fn test_key_press_opens_window() {
        let (mut desk, mut rng) = desk();
        assert!(handle_event(press(KeyCode::Char('s')), &mut desk, &HitMap::new(), &mut rng));
        assert!(desk.is_open(WindowId::Snake));
    }

    #[test]
    fn test_key_release_ignored() {
        let (mut desk, mut rng) = desk();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!handle_event(release, &mut desk, &HitMap::new(), &mut rng));
        assert!(!desk.is_open(WindowId::Snake));
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Flappy, &mut rng);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        handle_event(ctrl_c, &mut desk, &HitMap::new(), &mut rng);
        assert!(desk.should_quit());
    }

    #[test]
    fn test_click_uses_hit_map() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Flappy, &mut rng);
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 80, 24), Some(ClickTarget::Backdrop));
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert!(handle_event(click, &mut desk, &hits, &mut rng));
        assert!(!desk.is_open(WindowId::Flappy));
    }

    #[test]
    fn test_focus_events_toggle_ticking() {
        let (mut desk, mut rng) = desk();
        handle_event(Event::FocusLost, &mut desk, &HitMap::new(), &mut rng);
        assert!(!desk.has_focus());
        handle_event(Event::FocusGained, &mut desk, &HitMap::new(), &mut rng);
        assert!(desk.has_focus());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let (mut desk, mut rng) = desk();
        handle_event(Event::Resize(120, 40), &mut desk, &HitMap::new(), &mut rng);
        assert_eq!(desk.viewport(), Viewport::new(1200, 800));
    }
}
