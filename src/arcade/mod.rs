//! Arcade minigames: Snake, Flappy Bird, Tic-Tac-Toe.
//!
//! Each game is an independent simulation: a plain state struct plus free
//! functions for input and ticking. Nothing here touches the terminal.

pub mod flappy;
pub mod snake;
pub mod tictactoe;

use rand::Rng;

pub use flappy::{FlappyGame, FlappyInput, Pipe};
pub use snake::{Direction, Position, SnakeGame, SnakeInput};
pub use tictactoe::{Mark, Outcome, TicTacToeGame, TicTacToeInput};

/// Largest `dt_ms` a single tick call will integrate.
///
/// Anything longer (suspended process, debugger, slow terminal) is treated as
/// this much time so a game never jumps dozens of steps at once.
pub const MAX_TICK_DT_MS: u64 = 500;

/// Pixels covered by one terminal column when sizing boards from the terminal.
pub const PIXELS_PER_COLUMN: u32 = 10;

/// Pixels covered by one terminal row when sizing boards from the terminal.
pub const PIXELS_PER_ROW: u32 = 20;

/// Space kept free around a fullscreen board, in pixels.
pub const FULLSCREEN_MARGIN: u32 = 200;

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    Over,
}

impl Phase {
    pub fn is_running(self) -> bool {
        self == Phase::Running
    }

    pub fn is_over(self) -> bool {
        self == Phase::Over
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::NotStarted => "Ready",
            Phase::Running => "Playing",
            Phase::Paused => "Paused",
            Phase::Over => "Game over",
        }
    }
}

/// Size of the area a fullscreen board may occupy, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport for a terminal of `cols` x `rows` cells.
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as u32 * PIXELS_PER_COLUMN,
            height: rows as u32 * PIXELS_PER_ROW,
        }
    }

    /// Terminal rows this viewport covers.
    pub fn rows(self) -> u16 {
        u16::try_from(self.height / PIXELS_PER_ROW).unwrap_or(u16::MAX)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_terminal(80, 24)
    }
}

/// Tick intervals for the real-time games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRates {
    pub snake_ms: u64,
    pub flappy_ms: u64,
}

impl Default for TickRates {
    fn default() -> Self {
        Self {
            snake_ms: snake::DEFAULT_MOVE_INTERVAL_MS,
            flappy_ms: flappy::DEFAULT_TICK_MS,
        }
    }
}

/// Which game a window hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    Flappy,
    TicTacToe,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Snake, GameKind::Flappy, GameKind::TicTacToe];

    pub fn name(self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::Flappy => "flappy bird",
            GameKind::TicTacToe => "tic-tac-toe",
        }
    }

    /// Parse a command-line game name.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "snake" => Some(GameKind::Snake),
            "flappy" | "bird" | "flappy-bird" => Some(GameKind::Flappy),
            "tictactoe" | "tic-tac-toe" | "ttt" => Some(GameKind::TicTacToe),
            _ => None,
        }
    }
}

/// A running game. One per open game window.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Snake(SnakeGame),
    Flappy(FlappyGame),
    TicTacToe(TicTacToeGame),
}

impl ActiveGame {
    /// Create a fresh game sized for the given window mode.
    pub fn new<R: Rng>(
        kind: GameKind,
        fullscreen: bool,
        viewport: Viewport,
        rates: TickRates,
        rng: &mut R,
    ) -> Self {
        match kind {
            GameKind::Snake => {
                let grid = SnakeGame::grid_size_for(fullscreen, viewport);
                ActiveGame::Snake(SnakeGame::new(grid, rates.snake_ms, rng))
            }
            GameKind::Flappy => {
                let (w, h) = FlappyGame::board_size_for(fullscreen, viewport);
                ActiveGame::Flappy(FlappyGame::new(w, h, rates.flappy_ms))
            }
            GameKind::TicTacToe => ActiveGame::TicTacToe(TicTacToeGame::new()),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Snake(_) => GameKind::Snake,
            ActiveGame::Flappy(_) => GameKind::Flappy,
            ActiveGame::TicTacToe(_) => GameKind::TicTacToe,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ActiveGame::Snake(g) => g.phase,
            ActiveGame::Flappy(g) => g.phase,
            ActiveGame::TicTacToe(g) => g.phase,
        }
    }

    /// Score shown for real-time games. Tic-tac-toe has none.
    pub fn score(&self) -> Option<u32> {
        match self {
            ActiveGame::Snake(g) => Some(g.score),
            ActiveGame::Flappy(g) => Some(g.score),
            ActiveGame::TicTacToe(_) => None,
        }
    }

    /// Advance by `dt_ms` of wall-clock time. Returns true if state changed.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        match self {
            ActiveGame::Snake(g) => snake::tick_snake(g, dt_ms, rng),
            ActiveGame::Flappy(g) => flappy::tick_flappy(g, dt_ms, rng),
            ActiveGame::TicTacToe(_) => false,
        }
    }

    /// Fit the game to a new window size by clamping entities.
    pub fn resize(&mut self, fullscreen: bool, viewport: Viewport) {
        match self {
            ActiveGame::Snake(g) => {
                snake::resize(g, SnakeGame::grid_size_for(fullscreen, viewport));
            }
            ActiveGame::Flappy(g) => {
                let (w, h) = FlappyGame::board_size_for(fullscreen, viewport);
                flappy::resize(g, w, h);
            }
            ActiveGame::TicTacToe(_) => {}
        }
    }
}
