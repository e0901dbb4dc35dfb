//! Window manager for the arcade overlays.
//!
//! The desk owns every open window (the three games plus the shortcuts help),
//! their minimized and fullscreen flags, and the shortcut stack. Only the
//! topmost visible window has focus: it gets keys, it ticks, it is drawn.
//! Opening or restoring a window pushes its scope; closing or minimizing it
//! removes the scope again, so the stack always mirrors the window order.

use crate::arcade::{
    self, ActiveGame, FlappyInput, GameKind, Phase, SnakeInput, TicTacToeInput, TickRates,
    Viewport,
};
use crate::shortcuts::{Binding, Scope, ShortcutStack};
use crossterm::event::KeyCode;
use rand::Rng;
use tracing::{debug, info};

/// An overlay that can be opened from the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowId {
    Snake,
    Flappy,
    TicTacToe,
    Shortcuts,
}

impl WindowId {
    pub const ALL: [WindowId; 4] = [
        WindowId::Snake,
        WindowId::Flappy,
        WindowId::TicTacToe,
        WindowId::Shortcuts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WindowId::Snake => "Snake",
            WindowId::Flappy => "Flappy Bird",
            WindowId::TicTacToe => "Tic-Tac-Toe",
            WindowId::Shortcuts => "Keyboard Shortcuts",
        }
    }

    /// Home-screen key that opens (or restores) this window.
    pub fn open_key(self) -> char {
        match self {
            WindowId::Snake => 's',
            WindowId::Flappy => 'f',
            WindowId::TicTacToe => 't',
            WindowId::Shortcuts => 'x',
        }
    }

    pub fn game_kind(self) -> Option<GameKind> {
        match self {
            WindowId::Snake => Some(GameKind::Snake),
            WindowId::Flappy => Some(GameKind::Flappy),
            WindowId::TicTacToe => Some(GameKind::TicTacToe),
            WindowId::Shortcuts => None,
        }
    }
}

impl From<GameKind> for WindowId {
    fn from(kind: GameKind) -> Self {
        match kind {
            GameKind::Snake => WindowId::Snake,
            GameKind::Flappy => WindowId::Flappy,
            GameKind::TicTacToe => WindowId::TicTacToe,
        }
    }
}

/// Owner of a shortcut scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeId {
    Home,
    Window(WindowId),
}

/// Everything a key press or click can ask the desk to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(WindowId),
    Quit,
    /// Close the focused window.
    Close,
    ToggleMinimize,
    ToggleFullscreen,
    Snake(SnakeInput),
    Flappy(FlappyInput),
    TicTacToe(TicTacToeInput),
    /// Scroll the shortcuts help by this many lines.
    ScrollHelp(i16),
}

/// Something the player can click, resolved by the UI from the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Dimmed area around the focused window.
    Backdrop,
    /// Flappy Bird play area.
    PlaySurface,
    /// Tic-tac-toe cell.
    Cell(usize),
    /// Dock entry of a minimized window.
    Dock(WindowId),
    /// Title-bar buttons of the focused window.
    Minimize,
    Fullscreen,
    Close,
}

#[derive(Debug, Clone)]
pub enum WindowContent {
    Game(ActiveGame),
    Shortcuts { scroll: u16 },
}

#[derive(Debug, Clone)]
pub struct Window {
    pub id: WindowId,
    pub minimized: bool,
    pub fullscreen: bool,
    pub content: WindowContent,
}

impl Window {
    pub fn game(&self) -> Option<&ActiveGame> {
        match &self.content {
            WindowContent::Game(game) => Some(game),
            WindowContent::Shortcuts { .. } => None,
        }
    }
}

/// One scope's bindings, as listed in the help window.
#[derive(Debug, Clone, PartialEq)]
pub struct HelpGroup {
    pub name: &'static str,
    /// (key label, description)
    pub entries: Vec<(String, &'static str)>,
}

/// Bindings for a scope owner.
pub fn scope_for(owner: ScopeId) -> Scope<ScopeId, Action> {
    let window = match owner {
        ScopeId::Home => {
            let mut bindings: Vec<Binding<Action>> = WindowId::ALL
                .iter()
                .map(|&id| {
                    Binding::new(
                        KeyCode::Char(id.open_key()),
                        Action::Open(id),
                        open_description(id),
                    )
                })
                .collect();
            bindings.push(Binding::new(KeyCode::Char('q'), Action::Quit, "Quit"));
            return Scope::new(owner, "Home", false, bindings);
        }
        ScopeId::Window(id) => id,
    };

    let mut bindings = match window {
        WindowId::Snake => vec![
            Binding::new(
                KeyCode::Char(' '),
                Action::Snake(SnakeInput::Toggle),
                "Start / pause / restart",
            ),
            Binding::new(KeyCode::Up, Action::Snake(SnakeInput::Up), "Move up"),
            Binding::new(KeyCode::Down, Action::Snake(SnakeInput::Down), "Move down"),
            Binding::new(KeyCode::Left, Action::Snake(SnakeInput::Left), "Move left"),
            Binding::new(KeyCode::Right, Action::Snake(SnakeInput::Right), "Move right"),
        ],
        WindowId::Flappy => vec![Binding::new(
            KeyCode::Char(' '),
            Action::Flappy(FlappyInput::Action),
            "Start / jump / restart",
        )],
        WindowId::TicTacToe => {
            let mut b = vec![
                Binding::new(
                    KeyCode::Char('p'),
                    Action::TicTacToe(TicTacToeInput::TogglePause),
                    "Start / pause",
                ),
                Binding::new(
                    KeyCode::Char('r'),
                    Action::TicTacToe(TicTacToeInput::Reset),
                    "Reset board",
                ),
            ];
            for (cell, digit) in ('1'..='9').enumerate() {
                b.push(Binding::new(
                    KeyCode::Char(digit),
                    Action::TicTacToe(TicTacToeInput::Cell(cell)),
                    CELL_DESCRIPTIONS[cell],
                ));
            }
            b
        }
        WindowId::Shortcuts => vec![
            Binding::new(KeyCode::Char('j'), Action::ScrollHelp(1), "Scroll down"),
            Binding::new(KeyCode::Char('k'), Action::ScrollHelp(-1), "Scroll up"),
        ],
    };

    bindings.extend([
        Binding::new(KeyCode::Esc, Action::Close, "Close window"),
        Binding::new(KeyCode::Char('m'), Action::ToggleMinimize, "Minimize"),
        Binding::new(KeyCode::Char('f'), Action::ToggleFullscreen, "Toggle fullscreen"),
    ]);
    Scope::new(owner, window.title(), true, bindings)
}

const CELL_DESCRIPTIONS: [&str; 9] = [
    "Play top-left",
    "Play top-center",
    "Play top-right",
    "Play middle-left",
    "Play center",
    "Play middle-right",
    "Play bottom-left",
    "Play bottom-center",
    "Play bottom-right",
];

fn open_description(id: WindowId) -> &'static str {
    match id {
        WindowId::Snake => "Open Snake",
        WindowId::Flappy => "Open Flappy Bird",
        WindowId::TicTacToe => "Open Tic-Tac-Toe",
        WindowId::Shortcuts => "Show keyboard shortcuts",
    }
}

/// Help listing for every scope, home first.
pub fn help_groups() -> Vec<HelpGroup> {
    std::iter::once(ScopeId::Home)
        .chain(WindowId::ALL.iter().map(|&id| ScopeId::Window(id)))
        .map(|owner| {
            let scope = scope_for(owner);
            HelpGroup {
                name: scope.name,
                entries: scope
                    .bindings
                    .iter()
                    .map(|b| (b.key_label(), b.description))
                    .collect(),
            }
        })
        .collect()
}

/// Lines the help window needs: a heading and a blank line per group.
pub fn help_line_count() -> usize {
    help_groups().iter().map(|g| g.entries.len() + 2).sum()
}

/// Height of the help window when not fullscreen, borders included.
pub const HELP_WINDOW_HEIGHT: u16 = 30;

/// Furthest the help can scroll while still filling its window.
pub fn help_max_scroll(viewport: Viewport, fullscreen: bool) -> u16 {
    // The bottom row belongs to the dock
    let usable = viewport.rows().saturating_sub(1);
    let height = if fullscreen {
        usable
    } else {
        usable.min(HELP_WINDOW_HEIGHT)
    };
    let visible = height.saturating_sub(2);
    u16::try_from(help_line_count())
        .unwrap_or(u16::MAX)
        .saturating_sub(visible)
}

/// Fit a window's content to its current size on `viewport`.
fn refit(window: &mut Window, viewport: Viewport) {
    match &mut window.content {
        WindowContent::Game(game) => game.resize(window.fullscreen, viewport),
        WindowContent::Shortcuts { scroll } => {
            *scroll = (*scroll).min(help_max_scroll(viewport, window.fullscreen));
        }
    }
}

pub struct Desk {
    /// Open windows in stacking order, topmost last.
    windows: Vec<Window>,
    shortcuts: ShortcutStack<ScopeId, Action>,
    viewport: Viewport,
    rates: TickRates,
    /// Whether the terminal has focus. Nothing ticks without it.
    has_focus: bool,
    quit: bool,
}

impl Desk {
    pub fn new(viewport: Viewport, rates: TickRates) -> Self {
        let mut shortcuts = ShortcutStack::new();
        shortcuts.push(scope_for(ScopeId::Home));
        Self {
            windows: Vec::new(),
            shortcuts,
            viewport,
            rates,
            has_focus: true,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn shortcuts(&self) -> &ShortcutStack<ScopeId, Action> {
        &self.shortcuts
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.window(id).is_some()
    }

    /// The topmost window that isn't minimized.
    pub fn focused(&self) -> Option<&Window> {
        self.windows.iter().rev().find(|w| !w.minimized)
    }

    pub fn focused_id(&self) -> Option<WindowId> {
        self.focused().map(|w| w.id)
    }

    /// Minimized windows, oldest first.
    pub fn dock(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter().filter(|w| w.minimized)
    }

    /// Open `id`, or bring it back to the front if it is already open.
    pub fn open<R: Rng>(&mut self, id: WindowId, rng: &mut R) {
        if let Some(pos) = self.windows.iter().position(|w| w.id == id) {
            let mut window = self.windows.remove(pos);
            if window.minimized {
                info!(window = id.title(), "restoring window");
            }
            window.minimized = false;
            self.windows.push(window);
        } else {
            let content = match id.game_kind() {
                Some(kind) => WindowContent::Game(ActiveGame::new(
                    kind,
                    false,
                    self.viewport,
                    self.rates,
                    rng,
                )),
                None => WindowContent::Shortcuts { scroll: 0 },
            };
            info!(window = id.title(), "opening window");
            self.windows.push(Window {
                id,
                minimized: false,
                fullscreen: false,
                content,
            });
        }
        self.shortcuts.push(scope_for(ScopeId::Window(id)));
    }

    /// Close `id` and drop its state.
    pub fn close(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() != before {
            info!(window = id.title(), "closing window");
        }
        self.shortcuts.remove(&ScopeId::Window(id));
    }

    /// Minimize a visible window, or restore a minimized one.
    pub fn toggle_minimize<R: Rng>(&mut self, id: WindowId, rng: &mut R) {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        if window.minimized {
            self.open(id, rng);
        } else {
            window.minimized = true;
            info!(window = id.title(), "minimizing window");
            self.shortcuts.remove(&ScopeId::Window(id));
        }
    }

    pub fn toggle_fullscreen(&mut self, id: WindowId) {
        let viewport = self.viewport;
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        window.fullscreen = !window.fullscreen;
        info!(
            window = id.title(),
            fullscreen = window.fullscreen,
            "toggling fullscreen"
        );
        refit(window, viewport);
    }

    /// Resolve a key through the scope stack and apply it.
    /// Returns false if no scope bound the key.
    pub fn handle_key<R: Rng>(&mut self, key: KeyCode, rng: &mut R) -> bool {
        match self.shortcuts.dispatch(key) {
            Some(action) => {
                debug!(?key, ?action, "shortcut");
                self.apply(action, rng);
                true
            }
            None => false,
        }
    }

    pub fn apply<R: Rng>(&mut self, action: Action, rng: &mut R) {
        match action {
            Action::Open(id) => self.open(id, rng),
            Action::Quit => {
                info!("quit requested");
                self.quit = true;
            }
            Action::Close => {
                if let Some(id) = self.focused_id() {
                    self.close(id);
                }
            }
            Action::ToggleMinimize => {
                if let Some(id) = self.focused_id() {
                    self.toggle_minimize(id, rng);
                }
            }
            Action::ToggleFullscreen => {
                if let Some(id) = self.focused_id() {
                    self.toggle_fullscreen(id);
                }
            }
            Action::ScrollHelp(delta) => {
                let viewport = self.viewport;
                let Some(window) = self.focused_mut() else {
                    return;
                };
                let max = help_max_scroll(viewport, window.fullscreen);
                if let WindowContent::Shortcuts { scroll } = &mut window.content {
                    *scroll = if delta < 0 {
                        scroll.saturating_sub(delta.unsigned_abs())
                    } else {
                        scroll.saturating_add(delta.unsigned_abs()).min(max)
                    };
                }
            }
            Action::Snake(_) | Action::Flappy(_) | Action::TicTacToe(_) => {
                self.apply_game_input(action, rng)
            }
        }
    }

    fn apply_game_input<R: Rng>(&mut self, action: Action, rng: &mut R) {
        let Some(window) = self.focused_mut() else {
            return;
        };
        let id = window.id;
        let WindowContent::Game(game) = &mut window.content else {
            return;
        };
        let before = game.phase();
        match (game, action) {
            (ActiveGame::Snake(g), Action::Snake(input)) => {
                arcade::snake::process_input(g, input, rng)
            }
            (ActiveGame::Flappy(g), Action::Flappy(input)) => {
                arcade::flappy::process_input(g, input)
            }
            (ActiveGame::TicTacToe(g), Action::TicTacToe(input)) => {
                arcade::tictactoe::process_input(g, input)
            }
            _ => return,
        }
        self.log_transition(id, before);
    }

    /// Handle a click resolved by the UI.
    pub fn click<R: Rng>(&mut self, target: ClickTarget, rng: &mut R) {
        match target {
            ClickTarget::Backdrop => self.apply(Action::Close, rng),
            ClickTarget::PlaySurface => self.apply(Action::Flappy(FlappyInput::Click), rng),
            ClickTarget::Cell(cell) => {
                self.apply(Action::TicTacToe(TicTacToeInput::Cell(cell)), rng)
            }
            ClickTarget::Dock(id) => self.open(id, rng),
            ClickTarget::Minimize => self.apply(Action::ToggleMinimize, rng),
            ClickTarget::Fullscreen => self.apply(Action::ToggleFullscreen, rng),
            ClickTarget::Close => self.apply(Action::Close, rng),
        }
    }

    /// Advance the focused game by `dt_ms`. Returns true if anything changed.
    ///
    /// Minimized and covered windows don't tick, and nothing ticks while the
    /// terminal is unfocused.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        if !self.has_focus {
            return false;
        }
        let Some(window) = self.focused_mut() else {
            return false;
        };
        let id = window.id;
        let WindowContent::Game(game) = &mut window.content else {
            return false;
        };
        let before = game.phase();
        let changed = game.tick(dt_ms, rng);
        if changed {
            self.log_transition(id, before);
        }
        changed
    }

    /// Terminal gained or lost focus.
    pub fn set_focus(&mut self, focused: bool) {
        if self.has_focus != focused {
            debug!(focused, "terminal focus changed");
        }
        self.has_focus = focused;
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Terminal resized: refit every game.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.viewport = viewport;
        for window in &mut self.windows {
            refit(window, viewport);
        }
    }

    fn focused_mut(&mut self) -> Option<&mut Window> {
        self.windows.iter_mut().rev().find(|w| !w.minimized)
    }

    fn log_transition(&self, id: WindowId, before: Phase) {
        let Some(game) = self.window(id).and_then(Window::game) else {
            return;
        };
        let after = game.phase();
        if before == after {
            return;
        }
        match (before, after) {
            (_, Phase::Over) => match game {
                ActiveGame::TicTacToe(g) => {
                    info!(window = id.title(), outcome = ?g.outcome, "game over")
                }
                _ => info!(
                    window = id.title(),
                    score = game.score().unwrap_or(0),
                    "game over"
                ),
            },
            (Phase::NotStarted, Phase::Running) | (Phase::Over, Phase::Running) => {
                info!(window = id.title(), "game started")
            }
            _ => debug!(
                window = id.title(),
                from = before.label(),
                to = after.label(),
                "phase changed"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn desk() -> (Desk, ChaCha8Rng) {
        (
            Desk::new(Viewport::default(), TickRates::default()),
            ChaCha8Rng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_home_keys_open_windows() {
        let (mut desk, mut rng) = desk();
        assert!(desk.handle_key(KeyCode::Char('s'), &mut rng));
        assert_eq!(desk.focused_id(), Some(WindowId::Snake));
        assert!(desk.shortcuts().contains(&ScopeId::Window(WindowId::Snake)));
    }

    #[test]
    fn test_overlay_blocks_home_keys() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Snake, &mut rng);
        // 't' is a home key, but the snake scope blocks it
        assert!(!desk.handle_key(KeyCode::Char('t'), &mut rng));
        assert!(!desk.is_open(WindowId::TicTacToe));
        assert!(!desk.handle_key(KeyCode::Char('q'), &mut rng));
        assert!(!desk.should_quit());
    }

    #[test]
    fn test_f_means_fullscreen_inside_overlay() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Snake, &mut rng);
        desk.handle_key(KeyCode::Char('f'), &mut rng);
        assert!(!desk.is_open(WindowId::Flappy));
        assert!(desk.window(WindowId::Snake).is_some_and(|w| w.fullscreen));
    }

    #[test]
    fn test_escape_closes_and_drops_scope() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::TicTacToe, &mut rng);
        desk.handle_key(KeyCode::Esc, &mut rng);
        assert!(!desk.is_open(WindowId::TicTacToe));
        assert_eq!(desk.shortcuts().len(), 1);
        // Home keys work again
        assert!(desk.handle_key(KeyCode::Char('q'), &mut rng));
        assert!(desk.should_quit());
    }

    #[test]
    fn test_minimize_moves_to_dock_and_restore() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Snake, &mut rng);
        desk.handle_key(KeyCode::Char('m'), &mut rng);
        assert_eq!(desk.focused_id(), None);
        let docked: Vec<_> = desk.dock().map(|w| w.id).collect();
        assert_eq!(docked, vec![WindowId::Snake]);

        // Opening a minimized window restores it
        desk.handle_key(KeyCode::Char('s'), &mut rng);
        assert_eq!(desk.focused_id(), Some(WindowId::Snake));
        assert_eq!(desk.dock().count(), 0);
    }

    #[test]
    fn test_minimized_window_keeps_game_state() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Snake, &mut rng);
        desk.handle_key(KeyCode::Char(' '), &mut rng);
        desk.tick(100, &mut rng);
        let score_before = desk.window(WindowId::Snake).and_then(|w| w.game()?.score());
        desk.handle_key(KeyCode::Char('m'), &mut rng);
        desk.open(WindowId::Snake, &mut rng);
        let window = desk.window(WindowId::Snake);
        assert_eq!(window.and_then(|w| w.game()?.score()), score_before);
        assert_eq!(
            window.and_then(|w| w.game()).map(|g| g.phase()),
            Some(Phase::Running)
        );
    }

    #[test]
    fn test_focus_falls_to_window_below() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Snake, &mut rng);
        desk.apply(Action::Open(WindowId::TicTacToe), &mut rng);
        assert_eq!(desk.focused_id(), Some(WindowId::TicTacToe));
        desk.handle_key(KeyCode::Esc, &mut rng);
        assert_eq!(desk.focused_id(), Some(WindowId::Snake));
        // Snake scope is active again
        assert!(desk.handle_key(KeyCode::Up, &mut rng));
    }

    #[test]
    fn test_minimized_game_does_not_tick() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Snake, &mut rng);
        desk.handle_key(KeyCode::Char(' '), &mut rng);
        desk.handle_key(KeyCode::Char('m'), &mut rng);
        assert!(!desk.tick(400, &mut rng));
        let Some(ActiveGame::Snake(game)) = desk.window(WindowId::Snake).and_then(|w| w.game())
        else {
            panic!("snake window missing");
        };
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_no_ticks_without_terminal_focus() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Flappy, &mut rng);
        desk.handle_key(KeyCode::Char(' '), &mut rng);
        desk.set_focus(false);
        assert!(!desk.tick(100, &mut rng));
        desk.set_focus(true);
        assert!(desk.tick(100, &mut rng));
    }

    #[test]
    fn test_backdrop_click_closes_focused() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Flappy, &mut rng);
        desk.click(ClickTarget::Backdrop, &mut rng);
        assert!(!desk.is_open(WindowId::Flappy));
    }

    #[test]
    fn test_cell_click_plays_move() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::TicTacToe, &mut rng);
        desk.handle_key(KeyCode::Char('p'), &mut rng);
        desk.click(ClickTarget::Cell(4), &mut rng);
        let Some(ActiveGame::TicTacToe(game)) =
            desk.window(WindowId::TicTacToe).and_then(|w| w.game())
        else {
            panic!("tic-tac-toe window missing");
        };
        assert_eq!(game.board[4], Some(arcade::Mark::X));
    }

    #[test]
    fn test_title_buttons_control_focused_window() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Snake, &mut rng);
        desk.click(ClickTarget::Fullscreen, &mut rng);
        assert!(desk.window(WindowId::Snake).is_some_and(|w| w.fullscreen));

        desk.click(ClickTarget::Minimize, &mut rng);
        assert_eq!(desk.focused_id(), None);
        assert_eq!(
            desk.shortcuts().top().map(|s| s.owner),
            Some(ScopeId::Home)
        );

        desk.click(ClickTarget::Dock(WindowId::Snake), &mut rng);
        desk.click(ClickTarget::Close, &mut rng);
        assert!(!desk.is_open(WindowId::Snake));
    }

    #[test]
    fn test_dock_click_restores() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Flappy, &mut rng);
        desk.toggle_minimize(WindowId::Flappy, &mut rng);
        desk.click(ClickTarget::Dock(WindowId::Flappy), &mut rng);
        assert_eq!(desk.focused_id(), Some(WindowId::Flappy));
    }

    #[test]
    fn test_help_scroll_is_clamped() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Shortcuts, &mut rng);
        desk.handle_key(KeyCode::Char('k'), &mut rng);
        for _ in 0..500 {
            desk.handle_key(KeyCode::Char('j'), &mut rng);
        }
        let Some(WindowContent::Shortcuts { scroll }) =
            desk.window(WindowId::Shortcuts).map(|w| &w.content)
        else {
            panic!("help window missing");
        };
        assert_eq!(*scroll, help_max_scroll(desk.viewport(), false));
        assert!((*scroll as usize) < help_line_count());
    }

    #[test]
    fn test_help_scroll_moves_back_from_the_end() {
        let (mut desk, mut rng) = desk();
        desk.open(WindowId::Shortcuts, &mut rng);
        for _ in 0..100 {
            desk.handle_key(KeyCode::Char('j'), &mut rng);
        }
        desk.handle_key(KeyCode::Char('k'), &mut rng);
        let Some(WindowContent::Shortcuts { scroll }) =
            desk.window(WindowId::Shortcuts).map(|w| &w.content)
        else {
            panic!("help window missing");
        };
        assert_eq!(*scroll, help_max_scroll(desk.viewport(), false) - 1);
    }

    #[test]
    fn test_help_max_scroll_tracks_window_height() {
        let viewport = Viewport::from_terminal(80, 24);
        // 23 usable rows, 21 inside the borders
        assert_eq!(
            help_max_scroll(viewport, false) as usize,
            help_line_count() - 21
        );
        let tall = Viewport::from_terminal(80, 200);
        assert_eq!(help_max_scroll(tall, true), 0);
        // Windowed help never exceeds its own height
        assert_eq!(
            help_max_scroll(tall, false) as usize,
            help_line_count() - (HELP_WINDOW_HEIGHT as usize - 2)
        );
    }

    #[test]
    fn test_fullscreen_exit_reclamps_help_scroll() {
        let mut desk = Desk::new(Viewport::from_terminal(80, 60), TickRates::default());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        desk.open(WindowId::Shortcuts, &mut rng);
        desk.toggle_fullscreen(WindowId::Shortcuts);
        assert_eq!(help_max_scroll(desk.viewport(), true), 0);
        desk.toggle_fullscreen(WindowId::Shortcuts);
        for _ in 0..100 {
            desk.handle_key(KeyCode::Char('j'), &mut rng);
        }
        desk.toggle_fullscreen(WindowId::Shortcuts);
        let Some(WindowContent::Shortcuts { scroll }) =
            desk.window(WindowId::Shortcuts).map(|w| &w.content)
        else {
            panic!("help window missing");
        };
        assert_eq!(*scroll, 0);
    }

    #[test]
    fn test_help_groups_list_every_scope() {
        let groups = help_groups();
        let names: Vec<_> = groups.iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec!["Home", "Snake", "Flappy Bird", "Tic-Tac-Toe", "Keyboard Shortcuts"]
        );
        assert!(groups[0]
            .entries
            .iter()
            .any(|(key, desc)| key == "q" && *desc == "Quit"));
    }

    #[test]
    fn test_fullscreen_grows_snake_grid() {
        let mut desk = Desk::new(Viewport::new(1400, 1000), TickRates::default());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        desk.open(WindowId::Snake, &mut rng);
        desk.toggle_fullscreen(WindowId::Snake);
        let Some(ActiveGame::Snake(game)) = desk.window(WindowId::Snake).and_then(|w| w.game())
        else {
            panic!("snake window missing");
        };
        // min(1200, 800) / 15 = 53
        assert_eq!(game.grid_size, 53);
    }
}
