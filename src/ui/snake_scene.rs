//! Snake window rendering.
//!
//! Uses half-block pixel rendering. Each grid cell maps to a colored pixel;
//! pairs of vertical pixels are packed into one terminal row using the `▀`
//! (upper half block) character with fg=top, bg=bottom colors.

use super::game_common::{
    create_game_layout, info_line, render_center_prompt, render_game_over_banner,
    render_info_panel_frame, render_status_bar, window_size_for_content, ResultTone,
};
use crate::arcade::{Phase, SnakeGame};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HALF_TOP: char = '\u{2580}'; // ▀ fg fills top half, bg fills bottom half

// ── Snake gradient colors ────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);

/// Window size that shows the whole grid.
pub fn preferred_size(game: &SnakeGame) -> (u16, u16) {
    let side = game.grid_size.max(0) as u16;
    window_size_for_content(side, side.div_ceil(2))
}

/// Render the Snake window.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, game: &SnakeGame, fullscreen: bool) {
    let layout = create_game_layout(frame, area, "Snake", Color::LightGreen, fullscreen);

    render_play_field(frame, layout.content, game);

    match game.phase {
        Phase::NotStarted => {
            render_center_prompt(frame, layout.content, "Press Space to start", Color::Yellow)
        }
        Phase::Paused => render_center_prompt(frame, layout.content, "Paused", Color::Yellow),
        Phase::Over => render_game_over_banner(
            frame,
            layout.content,
            ResultTone::Loss,
            "GAME OVER",
            &format!("Score {}", game.score),
            "[Space] Play again",
        ),
        Phase::Running => {}
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Interpolated color for a body segment.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

/// Grid of cell colors, `None` for empty cells.
fn pixel_grid(game: &SnakeGame) -> Vec<Vec<Option<Color>>> {
    let size = game.grid_size.max(0) as usize;
    let mut pixels = vec![vec![None; size]; size];

    // Food pulses with the tick counter
    let (fx, fy) = (game.food.x as usize, game.food.y as usize);
    if fx < size && fy < size {
        let pulse = ((game.tick_count % 20) as f64 / 20.0 * std::f64::consts::PI * 2.0).sin();
        let food_g = (80.0 + pulse * 30.0) as u8;
        let food_b = (40.0 + pulse * 20.0) as u8;
        pixels[fy][fx] = Some(Color::Rgb(255, food_g, food_b));
    }

    let snake_len = game.snake.len();
    for (i, seg) in game.snake.iter().enumerate() {
        let (sx, sy) = (seg.x as usize, seg.y as usize);
        if sx < size && sy < size {
            pixels[sy][sx] = Some(if i == 0 {
                HEAD_COLOR
            } else {
                body_color(i, snake_len)
            });
        }
    }
    pixels
}

/// Draw the grid, one terminal column per cell and two cells per row.
fn render_play_field(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let pixels = pixel_grid(game);
    let size = pixels.len();

    let cols = (size as u16).min(area.width);
    let rows = (size.div_ceil(2) as u16).min(area.height);
    let x_off = area.x + (area.width - cols) / 2;
    let y_off = area.y + (area.height - rows) / 2;

    let lines: Vec<Line> = (0..rows as usize)
        .map(|row| {
            let spans: Vec<Span> = (0..cols as usize)
                .map(|col| {
                    let top = pixels[row * 2][col].unwrap_or(EMPTY_BG);
                    let bottom = pixels
                        .get(row * 2 + 1)
                        .and_then(|r| r[col])
                        .unwrap_or(EMPTY_BG);
                    Span::styled(HALF_TOP.to_string(), Style::default().fg(top).bg(bottom))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), Rect::new(x_off, y_off, cols, rows));
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let (text, color) = match game.phase {
        Phase::NotStarted => ("Ready".to_string(), Color::Yellow),
        Phase::Running => (format!("Score: {}", game.score), Color::Green),
        Phase::Paused => ("Paused".to_string(), Color::Yellow),
        Phase::Over => (format!("Game over! Score: {}", game.score), Color::Red),
    };
    render_status_bar(
        frame,
        area,
        &text,
        color,
        &[
            ("[Arrows]", "Steer"),
            ("[Space]", "Start/Pause"),
            ("[M]", "Min"),
            ("[F]", "Full"),
            ("[Esc]", "Close"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }
    let lines = vec![
        info_line("Score", game.score.to_string(), Color::White),
        info_line("Length", game.len().to_string(), Color::LightGreen),
        info_line("State", game.phase.label().to_string(), Color::Yellow),
        info_line(
            "Grid",
            format!("{}x{}", game.grid_size, game.grid_size),
            Color::Gray,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arcade::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_body_color_gradient_endpoints() {
        assert_eq!(body_color(0, 5), Color::Rgb(50, 220, 50));
        assert_eq!(body_color(4, 5), Color::Rgb(20, 80, 20));
    }

    #[test]
    fn test_pixel_grid_marks_head_and_food() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut game = SnakeGame::new(30, 100, &mut rng);
        game.food = Position::new(0, 0);
        let pixels = pixel_grid(&game);
        let head = game.head();
        assert_eq!(pixels[head.y as usize][head.x as usize], Some(HEAD_COLOR));
        assert!(pixels[0][0].is_some());
        assert_eq!(pixels.len(), 30);
    }

    #[test]
    fn test_preferred_size_fits_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let game = SnakeGame::new(30, 100, &mut rng);
        assert_eq!(preferred_size(&game), (52, 19));
    }
}
