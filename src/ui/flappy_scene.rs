//! Flappy Bird window rendering.
//!
//! The board is in pixels; each terminal cell covers a block of them and
//! shows whatever sits at the block's center.

use super::game_common::{
    centered_rect, create_game_layout, info_line, render_center_prompt,
    render_game_over_banner, render_info_panel_frame, render_status_bar,
    window_size_for_content, ResultTone,
};
use super::HitMap;
use crate::arcade::flappy::{BIRD_SIZE, PIPE_WIDTH};
use crate::arcade::{FlappyGame, Phase, PIXELS_PER_COLUMN, PIXELS_PER_ROW};
use crate::desk::ClickTarget;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(10, 14, 30);
const PIPE: Color = Color::Rgb(60, 190, 60);

/// Terminal cells needed to show the board at one cell per pixel block.
fn board_cells(game: &FlappyGame) -> (u16, u16) {
    (
        (game.width / PIXELS_PER_COLUMN as f64).ceil() as u16,
        (game.height / PIXELS_PER_ROW as f64).ceil() as u16,
    )
}

pub fn preferred_size(game: &FlappyGame) -> (u16, u16) {
    let (cols, rows) = board_cells(game);
    window_size_for_content(cols, rows)
}

/// Render the Flappy Bird window.
pub fn render_flappy(
    frame: &mut Frame,
    area: Rect,
    game: &FlappyGame,
    fullscreen: bool,
    hits: &mut HitMap,
) {
    let layout = create_game_layout(frame, area, "Flappy Bird", Color::Cyan, fullscreen);

    let play_area = play_rect(layout.content, game);
    render_play_area(frame, play_area, game);
    hits.push(play_area, Some(ClickTarget::PlaySurface));

    match game.phase {
        Phase::NotStarted => {
            render_center_prompt(frame, play_area, "Space or click to start", Color::Yellow)
        }
        Phase::Over => render_game_over_banner(
            frame,
            play_area,
            ResultTone::Loss,
            "CRASHED",
            &format!("Score {}", game.score),
            "[Space] Play again",
        ),
        Phase::Running | Phase::Paused => {}
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Board rect inside `content`, centered and shrunk to fit.
fn play_rect(content: Rect, game: &FlappyGame) -> Rect {
    let (cols, rows) = board_cells(game);
    centered_rect(content, cols, rows)
}

/// What occupies one display cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Pipe,
    Bird,
}

/// Classify the display cell at (`col`, `row`) of a `cols` x `rows` view.
fn cell_at(game: &FlappyGame, col: u16, row: u16, cols: u16, rows: u16) -> Cell {
    let px_per_col = game.width / cols.max(1) as f64;
    let px_per_row = game.height / rows.max(1) as f64;
    let cx = (col as f64 + 0.5) * px_per_col;
    let cy = (row as f64 + 0.5) * px_per_row;

    let bird_cx = game.bird.x + BIRD_SIZE / 2.0;
    let bird_cy = game.bird.y + BIRD_SIZE / 2.0;
    if (bird_cx / px_per_col).floor() as i64 == col as i64
        && (bird_cy / px_per_row).floor() as i64 == row as i64
    {
        return Cell::Bird;
    }

    let in_pipe = game.pipes.iter().any(|pipe| {
        cx >= pipe.x
            && cx < pipe.x + PIPE_WIDTH
            && (cy < pipe.height || cy > pipe.gap_bottom())
    });
    if in_pipe {
        Cell::Pipe
    } else {
        Cell::Sky
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bird_char = if game.velocity < -0.5 {
        "▲"
    } else if game.velocity > 1.0 {
        "▼"
    } else {
        "►"
    };
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .bg(SKY)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| match cell_at(game, col, row, area.width, area.height) {
                    Cell::Bird => Span::styled(bird_char, bird_style),
                    Cell::Pipe => Span::styled("█", Style::default().fg(PIPE).bg(SKY)),
                    Cell::Sky => Span::styled(" ", Style::default().bg(SKY)),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let (text, color) = match game.phase {
        Phase::NotStarted => ("Press Space to start!".to_string(), Color::Yellow),
        Phase::Over => (format!("Game over! Score: {}", game.score), Color::Red),
        _ => (format!("Score: {}", game.score), Color::Green),
    };
    render_status_bar(
        frame,
        area,
        &text,
        color,
        &[
            ("[Space/Click]", "Flap"),
            ("[M]", "Min"),
            ("[F]", "Full"),
            ("[Esc]", "Close"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }
    let lines = vec![
        info_line("Score", game.score.to_string(), Color::White),
        info_line("State", game.phase.label().to_string(), Color::Yellow),
        info_line(
            "Board",
            format!("{}x{}", game.width as u32, game.height as u32),
            Color::Gray,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
