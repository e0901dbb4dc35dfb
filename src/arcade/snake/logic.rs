//! Snake game logic: movement, input processing, collision detection.

use super::types::*;
use crate::arcade::{Phase, MAX_TICK_DT_MS};
use rand::Rng;

/// UI-agnostic input actions for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Up,
    Down,
    Left,
    Right,
    /// Space: start, pause/resume, or restart after game over.
    Toggle,
}

/// Process player input.
pub fn process_input<R: Rng>(game: &mut SnakeGame, input: SnakeInput, rng: &mut R) {
    match input {
        SnakeInput::Toggle => match game.phase {
            Phase::NotStarted | Phase::Paused => game.phase = Phase::Running,
            Phase::Running => game.phase = Phase::Paused,
            // Restart straight into play
            Phase::Over => game.reset(rng),
        },
        SnakeInput::Up => queue_direction(game, Direction::Up),
        SnakeInput::Down => queue_direction(game, Direction::Down),
        SnakeInput::Left => queue_direction(game, Direction::Left),
        SnakeInput::Right => queue_direction(game, Direction::Right),
    }
}

/// Buffer a direction for the next step.
///
/// Compared against the direction applied on the last step, not the queued
/// one, so two quick presses cannot fold the snake back onto its neck.
pub fn queue_direction(game: &mut SnakeGame, direction: Direction) {
    if game.phase.is_over() {
        return;
    }
    if direction != game.direction.opposite() {
        game.next_direction = direction;
    }
}

/// Advance Snake game. Called from the main loop.
///
/// `dt_ms` is milliseconds since last call. Internally steps movement in
/// `move_interval_ms` increments. Returns true if the game state changed.
pub fn tick_snake<R: Rng>(game: &mut SnakeGame, dt_ms: u64, rng: &mut R) -> bool {
    if !game.phase.is_running() {
        return false;
    }

    game.accumulated_time_ms += dt_ms.min(MAX_TICK_DT_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= game.move_interval_ms {
        game.accumulated_time_ms -= game.move_interval_ms;
        step_snake(game, rng);
        changed = true;

        if game.phase.is_over() {
            game.accumulated_time_ms = 0;
            break;
        }
    }

    changed
}

/// Single movement step.
pub fn step_snake<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    game.tick_count += 1;
    game.direction = game.next_direction;

    let (dx, dy) = game.direction.delta();
    let head = game.head();
    let new_head = Position::new(head.x + dx, head.y + dy);

    if !game.in_bounds(new_head) || game.snake.contains(&new_head) {
        game.phase = Phase::Over;
        return;
    }

    game.snake.push_front(new_head);

    if new_head == game.food {
        game.score += 1;
        match spawn_food(game, rng) {
            Some(food) => game.food = food,
            // Snake fills the board
            None => game.phase = Phase::Over,
        }
    } else {
        game.snake.pop_back();
    }
}

/// Move the game onto a grid of `grid_size` cells, clamping every segment
/// and the food into the new bounds.
pub fn resize(game: &mut SnakeGame, grid_size: i16) {
    let grid_size = grid_size.max(2);
    if grid_size == game.grid_size {
        return;
    }
    game.grid_size = grid_size;
    let max = grid_size - 1;
    for seg in game.snake.iter_mut() {
        seg.x = seg.x.min(max);
        seg.y = seg.y.min(max);
    }
    game.food.x = game.food.x.min(max);
    game.food.y = game.food.y.min(max);
}
