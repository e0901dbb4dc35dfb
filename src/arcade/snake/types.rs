//! Snake game data structures.

use crate::arcade::{Phase, Viewport, FULLSCREEN_MARGIN};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Windowed grid size; fullscreen grids never go below it.
pub const MIN_GRID_SIZE: i16 = 30;

/// Nominal cell size in pixels, used to derive the fullscreen grid.
pub const CELL_SIZE: u32 = 15;

/// Milliseconds between movement steps.
pub const DEFAULT_MOVE_INTERVAL_MS: u64 = 100;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Main game state. The grid is always square.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub phase: Phase,
    pub grid_size: i16,

    /// Body segments, head first.
    pub snake: VecDeque<Position>,
    /// Direction applied on the last step.
    pub direction: Direction,
    /// Direction that the next step will apply.
    pub next_direction: Direction,

    pub food: Position,
    pub score: u32,

    // Timing
    pub move_interval_ms: u64,
    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total movement steps elapsed.
    pub tick_count: u64,
}

impl SnakeGame {
    /// Create a new game on a `grid_size` x `grid_size` grid.
    pub fn new<R: Rng>(grid_size: i16, move_interval_ms: u64, rng: &mut R) -> Self {
        let grid_size = grid_size.max(2);
        let mut game = Self {
            phase: Phase::NotStarted,
            grid_size,
            snake: VecDeque::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: Position::new(0, 0),
            score: 0,
            move_interval_ms: move_interval_ms.max(1),
            accumulated_time_ms: 0,
            tick_count: 0,
        };
        game.reset(rng);
        game.phase = Phase::NotStarted;
        game
    }

    /// Put a single-segment snake back at the center, heading right.
    ///
    /// Leaves `phase` at `Running`; callers that want the start screen set it.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let center = self.grid_size / 2;
        self.snake.clear();
        self.snake.push_back(Position::new(center, center));
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.accumulated_time_ms = 0;
        self.tick_count = 0;
        self.phase = Phase::Running;
        // A one-segment snake on a grid of at least 2x2 always leaves room.
        self.food = spawn_food(self, rng).unwrap_or(Position::new(0, 0));
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_size && pos.y >= 0 && pos.y < self.grid_size
    }

    /// Grid size for a windowed or fullscreen board.
    ///
    /// Fullscreen fits as many `CELL_SIZE` cells as the viewport allows after
    /// the margin, using the smaller axis, but never fewer than the windowed grid.
    pub fn grid_size_for(fullscreen: bool, viewport: Viewport) -> i16 {
        if !fullscreen {
            return MIN_GRID_SIZE;
        }
        let horizontal = viewport.width.saturating_sub(FULLSCREEN_MARGIN) / CELL_SIZE;
        let vertical = viewport.height.saturating_sub(FULLSCREEN_MARGIN) / CELL_SIZE;
        let cells = horizontal.min(vertical).min(i16::MAX as u32) as i16;
        cells.max(MIN_GRID_SIZE)
    }
}

/// Pick a random cell not covered by the snake. `None` when the grid is full.
pub fn spawn_food<R: Rng>(game: &SnakeGame, rng: &mut R) -> Option<Position> {
    let size = game.grid_size;
    (0..size)
        .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
        .filter(|pos| !game.snake.contains(pos))
        .choose(rng)
}
