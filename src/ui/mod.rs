pub mod dock;
pub mod flappy_scene;
pub mod game_common;
pub mod home;
pub mod shortcuts_scene;
pub mod snake_scene;
pub mod tictactoe_scene;

use crate::arcade::ActiveGame;
use crate::desk::{ClickTarget, Desk, Window, WindowContent};
use game_common::{centered_rect, render_title_buttons, title_button_areas, TitleButton};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Block,
    Frame,
};

/// Clickable regions of the last frame, bottom-most first.
///
/// A region with no target swallows the click (window chrome, for example),
/// so clicks inside a window never reach the backdrop underneath.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, Option<ClickTarget>)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, area: Rect, target: Option<ClickTarget>) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Target of the topmost region containing the cell, if any.
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .and_then(|(_, target)| *target)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Draw the whole screen and return the click map for it.
pub fn draw(frame: &mut Frame, desk: &Desk) -> HitMap {
    let area = frame.size();
    let mut hits = HitMap::new();

    home::render_home(frame, area);

    if let Some(window) = desk.focused() {
        // Dim the home screen behind the window
        frame.render_widget(
            Block::default().style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ),
            area,
        );
        hits.push(area, Some(ClickTarget::Backdrop));

        let window_area = window_rect(area, window);
        hits.push(window_area, None);
        render_window(frame, window_area, window, &mut hits);
        render_title_buttons(frame, window_area, window.fullscreen);
        for (button, rect) in title_button_areas(window_area) {
            let target = match button {
                TitleButton::Minimize => ClickTarget::Minimize,
                TitleButton::Fullscreen => ClickTarget::Fullscreen,
                TitleButton::Close => ClickTarget::Close,
            };
            hits.push(rect, Some(target));
        }
    }

    dock::render_dock(frame, area, desk, &mut hits);
    hits
}

/// Where a window goes: the whole screen when fullscreen, else centered at
/// its preferred size.
pub fn window_rect(area: Rect, window: &Window) -> Rect {
    // Leave the bottom row to the dock
    let usable = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    if window.fullscreen {
        return usable;
    }
    let (width, height) = match &window.content {
        WindowContent::Game(ActiveGame::Snake(game)) => snake_scene::preferred_size(game),
        WindowContent::Game(ActiveGame::Flappy(game)) => flappy_scene::preferred_size(game),
        WindowContent::Game(ActiveGame::TicTacToe(_)) => tictactoe_scene::preferred_size(),
        WindowContent::Shortcuts { .. } => shortcuts_scene::preferred_size(),
    };
    centered_rect(usable, width, height)
}

fn render_window(frame: &mut Frame, area: Rect, window: &Window, hits: &mut HitMap) {
    match &window.content {
        WindowContent::Game(ActiveGame::Snake(game)) => {
            snake_scene::render_snake_scene(frame, area, game, window.fullscreen)
        }
        WindowContent::Game(ActiveGame::Flappy(game)) => {
            flappy_scene::render_flappy(frame, area, game, window.fullscreen, hits)
        }
        WindowContent::Game(ActiveGame::TicTacToe(game)) => {
            tictactoe_scene::render_tictactoe(frame, area, game, window.fullscreen, hits)
        }
        WindowContent::Shortcuts { scroll } => {
            shortcuts_scene::render_shortcuts(frame, area, *scroll, window.fullscreen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arcade::{TickRates, Viewport};
    use crate::desk::WindowId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(desk: &Desk) -> HitMap {
        render_with_buffer(desk).0
    }

    fn render_with_buffer(desk: &Desk) -> (HitMap, Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut hits = HitMap::new();
        terminal
            .draw(|f| {
                hits = draw(f, desk);
            })
            .unwrap();
        (hits, terminal.backend().buffer().clone())
    }

    #[test]
    fn test_topmost_region_wins() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 10, 10), Some(ClickTarget::Backdrop));
        hits.push(Rect::new(2, 2, 3, 3), Some(ClickTarget::Cell(0)));
        assert_eq!(hits.target_at(3, 3), Some(ClickTarget::Cell(0)));
        assert_eq!(hits.target_at(8, 8), Some(ClickTarget::Backdrop));
        assert_eq!(hits.target_at(20, 20), None);
    }

    #[test]
    fn test_untargeted_region_swallows_click() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 10, 10), Some(ClickTarget::Backdrop));
        hits.push(Rect::new(2, 2, 3, 3), None);
        assert_eq!(hits.target_at(2, 2), None);
    }

    #[test]
    fn test_home_only_has_no_backdrop() {
        let desk = Desk::new(Viewport::default(), TickRates::default());
        let hits = render(&desk);
        assert_eq!(hits.target_at(0, 0), None);
    }

    #[test]
    fn test_open_window_has_backdrop_and_cells() {
        let mut desk = Desk::new(Viewport::default(), TickRates::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        desk.open(WindowId::TicTacToe, &mut rng);
        let hits = render(&desk);
        assert_eq!(hits.target_at(0, 0), Some(ClickTarget::Backdrop));
        let cells = (0..100u16)
            .flat_map(|x| (0..40u16).map(move |y| (x, y)))
            .filter_map(|(x, y)| match hits.target_at(x, y) {
                Some(ClickTarget::Cell(i)) => Some(i),
                _ => None,
            })
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn test_minimized_window_is_in_dock() {
        let mut desk = Desk::new(Viewport::default(), TickRates::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        desk.open(WindowId::Snake, &mut rng);
        desk.toggle_minimize(WindowId::Snake, &mut rng);
        let hits = render(&desk);
        let found = (0..100u16)
            .any(|x| hits.target_at(x, 39) == Some(ClickTarget::Dock(WindowId::Snake)));
        assert!(found);
    }

    #[test]
    fn test_help_scrolls_back_up_from_the_bottom() {
        let mut desk = Desk::new(Viewport::from_terminal(100, 40), TickRates::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        desk.open(WindowId::Shortcuts, &mut rng);
        for _ in 0..100 {
            desk.handle_key(KeyCode::Char('j'), &mut rng);
        }
        let (_, bottom) = render_with_buffer(&desk);
        desk.handle_key(KeyCode::Char('k'), &mut rng);
        let (_, after) = render_with_buffer(&desk);
        assert_ne!(bottom, after);
    }

    #[test]
    fn test_focused_window_has_title_buttons() {
        let mut desk = Desk::new(Viewport::from_terminal(100, 40), TickRates::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        desk.open(WindowId::Flappy, &mut rng);
        let (hits, buffer) = render_with_buffer(&desk);

        let close = (0..100u16)
            .flat_map(|x| (0..40u16).map(move |y| (x, y)))
            .find(|&(x, y)| hits.target_at(x, y) == Some(ClickTarget::Close));
        let Some((x, y)) = close else {
            panic!("no close button");
        };
        assert_eq!(buffer.get(x + 1, y).symbol(), "×");
        assert_eq!(hits.target_at(x - 3, y), Some(ClickTarget::Fullscreen));
        assert_eq!(hits.target_at(x - 6, y), Some(ClickTarget::Minimize));

        desk.click(ClickTarget::Close, &mut rng);
        assert!(!desk.is_open(WindowId::Flappy));
    }
}
