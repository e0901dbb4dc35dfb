//! Flappy Bird data structures.
//!
//! All coordinates are in pixels, origin at the top-left of the board,
//! y growing downward.

use crate::arcade::{Phase, Viewport, FULLSCREEN_MARGIN};
use rand::Rng;

/// Bird is a square of this side length.
pub const BIRD_SIZE: f64 = 15.0;
pub const PIPE_WIDTH: f64 = 45.0;
/// Vertical opening between the top and bottom pipe.
pub const PIPE_GAP: f64 = 120.0;
/// Velocity change per tick (positive = downward).
pub const GRAVITY: f64 = 0.6;
/// Velocity set by a jump.
pub const JUMP_STRENGTH: f64 = -10.0;
/// Horizontal scroll per tick.
pub const PIPE_SPEED: f64 = 3.0;
/// A new pipe spawns once the newest one is this far from the right edge.
pub const PIPE_SPAWN_DISTANCE: f64 = 200.0;
/// Minimum pipe length above and below the gap.
pub const PIPE_MARGIN: f64 = 50.0;

/// Windowed board size.
pub const GAME_WIDTH: f64 = 450.0;
pub const GAME_HEIGHT: f64 = 300.0;

/// Fullscreen boards never exceed this.
pub const FULLSCREEN_MAX_WIDTH: f64 = 800.0;
pub const FULLSCREEN_MAX_HEIGHT: f64 = 600.0;

/// Roughly 60 ticks per second.
pub const DEFAULT_TICK_MS: u64 = 16;

/// Bird spawn point as a fraction of the board.
const BIRD_START_X: f64 = 0.22;
const BIRD_START_Y: f64 = 0.3;

/// A point on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A pipe pair: solid from the top down to `height`, open for `PIPE_GAP`,
/// solid again to the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Length of the top pipe, i.e. where the gap starts.
    pub height: f64,
    /// Whether the bird has cleared this pipe (for scoring).
    pub passed: bool,
}

impl Pipe {
    pub fn gap_bottom(&self) -> f64 {
        self.height + PIPE_GAP
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub phase: Phase,
    pub width: f64,
    pub height: f64,

    pub bird: Point,
    /// Vertical velocity in pixels per tick (positive = downward).
    pub velocity: f64,

    /// Pipes ordered left to right.
    pub pipes: Vec<Pipe>,
    pub score: u32,

    // Timing
    pub tick_interval_ms: u64,
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total physics ticks elapsed.
    pub tick_count: u64,
}

impl FlappyGame {
    /// Create a new game on a `width` x `height` board.
    pub fn new(width: f64, height: f64, tick_interval_ms: u64) -> Self {
        Self {
            phase: Phase::NotStarted,
            width,
            height,
            bird: initial_bird_position(width, height),
            velocity: 0.0,
            pipes: Vec::new(),
            score: 0,
            tick_interval_ms: tick_interval_ms.max(1),
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Back to the start screen on the current board.
    pub fn reset(&mut self) {
        self.phase = Phase::NotStarted;
        self.bird = initial_bird_position(self.width, self.height);
        self.velocity = 0.0;
        self.pipes.clear();
        self.score = 0;
        self.accumulated_time_ms = 0;
        self.tick_count = 0;
    }

    /// Board size for a windowed or fullscreen game.
    pub fn board_size_for(fullscreen: bool, viewport: Viewport) -> (f64, f64) {
        if !fullscreen {
            return (GAME_WIDTH, GAME_HEIGHT);
        }
        let width = viewport.width.saturating_sub(FULLSCREEN_MARGIN) as f64;
        let height = viewport.height.saturating_sub(FULLSCREEN_MARGIN) as f64;
        (
            width.min(FULLSCREEN_MAX_WIDTH).max(GAME_WIDTH),
            height.min(FULLSCREEN_MAX_HEIGHT).max(GAME_HEIGHT),
        )
    }

    /// Valid range for a pipe's gap start on this board.
    pub fn pipe_height_range(&self) -> (f64, f64) {
        let min = PIPE_MARGIN;
        let max = (self.height - PIPE_GAP - PIPE_MARGIN).max(min);
        (min, max)
    }

    /// Append a pipe at the right edge with a random gap position.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let (min, max) = self.pipe_height_range();
        let height = if max > min {
            rng.gen_range(min..max)
        } else {
            min
        };
        self.pipes.push(Pipe {
            x: self.width,
            height,
            passed: false,
        });
    }
}

/// Where the bird sits before the game starts.
pub fn initial_bird_position(width: f64, height: f64) -> Point {
    Point {
        x: width * BIRD_START_X,
        y: height * BIRD_START_Y,
    }
}
