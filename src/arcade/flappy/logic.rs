//! Game logic for the Flappy Bird minigame.

use super::types::*;
use crate::arcade::{Phase, MAX_TICK_DT_MS};
use rand::Rng;

/// Input actions for Flappy Bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Space: start, jump, or reset after game over.
    Action,
    /// Pointer click on the play surface: start or jump.
    Click,
}

/// Process player input.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) {
    match (input, game.phase) {
        (_, Phase::NotStarted) => game.phase = Phase::Running,
        (FlappyInput::Action, Phase::Over) => game.reset(),
        (FlappyInput::Click, Phase::Over) => {}
        _ => jump(game),
    }
}

/// Set the bird's velocity to the jump impulse. Ignored unless running.
pub fn jump(game: &mut FlappyGame) {
    if game.phase.is_running() {
        game.velocity = JUMP_STRENGTH;
    }
}

/// True if a bird at `bird` touches the floor, the ceiling, or a pipe.
pub fn collides(bird: Point, pipes: &[Pipe], board_height: f64) -> bool {
    if bird.y <= 0.0 || bird.y >= board_height - BIRD_SIZE {
        return true;
    }
    pipes.iter().any(|pipe| {
        let overlaps_x = bird.x + BIRD_SIZE > pipe.x && bird.x < pipe.x + PIPE_WIDTH;
        let outside_gap = bird.y < pipe.height || bird.y + BIRD_SIZE > pipe.gap_bottom();
        overlaps_x && outside_gap
    })
}

/// Advance the game. Called from the main loop.
///
/// `dt_ms` is milliseconds since last call. Physics runs in
/// `tick_interval_ms` steps. Returns true if the game state changed.
pub fn tick_flappy<R: Rng>(game: &mut FlappyGame, dt_ms: u64, rng: &mut R) -> bool {
    if !game.phase.is_running() {
        return false;
    }

    game.accumulated_time_ms += dt_ms.min(MAX_TICK_DT_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= game.tick_interval_ms {
        game.accumulated_time_ms -= game.tick_interval_ms;
        step_flappy(game, rng);
        changed = true;

        if game.phase.is_over() {
            game.accumulated_time_ms = 0;
            break;
        }
    }

    changed
}

/// Single physics step.
pub fn step_flappy<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    game.tick_count += 1;

    game.velocity += GRAVITY;
    game.bird.y += game.velocity;

    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED;
    }
    game.pipes.retain(|p| p.x > -PIPE_WIDTH);

    let needs_pipe = game
        .pipes
        .last()
        .map_or(true, |p| p.x < game.width - PIPE_SPAWN_DISTANCE);
    if needs_pipe {
        game.spawn_pipe(rng);
    }

    let bird_x = game.bird.x;
    for pipe in &mut game.pipes {
        if !pipe.passed && pipe.x + PIPE_WIDTH < bird_x {
            pipe.passed = true;
            game.score += 1;
        }
    }

    if collides(game.bird, &game.pipes, game.height) {
        game.phase = Phase::Over;
    }
}

/// Move the game onto a `width` x `height` board.
///
/// Unless the game is running (not started or over) the bird simply
/// moves to the new start point. While running, it is clamped into the new
/// bounds. Pipes are always clamped.
pub fn resize(game: &mut FlappyGame, width: f64, height: f64) {
    if width == game.width && height == game.height {
        return;
    }
    game.width = width;
    game.height = height;

    let (min, max) = game.pipe_height_range();
    for pipe in &mut game.pipes {
        pipe.x = pipe.x.min(width);
        pipe.height = pipe.height.clamp(min, max);
    }

    if game.phase.is_running() {
        game.bird.x = game.bird.x.clamp(0.0, (width - BIRD_SIZE).max(0.0));
        game.bird.y = game.bird.y.clamp(0.0, (height - BIRD_SIZE).max(0.0));
    } else {
        game.bird = initial_bird_position(width, height);
    }
}
