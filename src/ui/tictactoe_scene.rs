//! Tic-Tac-Toe window rendering.

use super::game_common::{
    centered_rect, create_game_layout, info_line, render_center_prompt,
    render_game_over_banner, render_info_panel_frame, render_status_bar,
    window_size_for_content, ResultTone,
};
use super::HitMap;
use crate::arcade::{Mark, Outcome, Phase, TicTacToeGame};
use crate::desk::ClickTarget;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
/// Three cells plus two separators.
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const GRID_COLOR: Color = Color::DarkGray;

pub fn preferred_size() -> (u16, u16) {
    window_size_for_content(BOARD_WIDTH, BOARD_HEIGHT + 2)
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::LightRed,
        Mark::O => Color::LightBlue,
    }
}

/// Screen rect of board cell `index` for a board drawn at `board`.
fn cell_rect(board: Rect, index: usize) -> Rect {
    let col = (index % 3) as u16;
    let row = (index / 3) as u16;
    Rect::new(
        board.x + col * (CELL_WIDTH + 1),
        board.y + row * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

/// Render the Tic-Tac-Toe window.
pub fn render_tictactoe(
    frame: &mut Frame,
    area: Rect,
    game: &TicTacToeGame,
    fullscreen: bool,
    hits: &mut HitMap,
) {
    let layout = create_game_layout(frame, area, "Tic-Tac-Toe", Color::Magenta, fullscreen);

    let board = centered_rect(layout.content, BOARD_WIDTH, BOARD_HEIGHT);
    if board.width == BOARD_WIDTH && board.height == BOARD_HEIGHT {
        render_board(frame, board, game, hits);
    }

    match game.phase {
        Phase::NotStarted => {
            render_center_prompt(frame, layout.content, "Press P to start", Color::Yellow)
        }
        Phase::Paused => render_center_prompt(frame, layout.content, "Paused", Color::Yellow),
        Phase::Over => {
            let (tone, title, message) = match game.outcome {
                Some(Outcome::Winner(mark)) => (
                    ResultTone::Win,
                    format!("{} WINS", mark.symbol()),
                    "Three in a row",
                ),
                _ => (ResultTone::Draw, "DRAW".to_string(), "Board is full"),
            };
            render_game_over_banner(
                frame,
                layout.content,
                tone,
                &title,
                message,
                "[R] New game",
            );
        }
        Phase::Running => {}
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_board(frame: &mut Frame, board: Rect, game: &TicTacToeGame, hits: &mut HitMap) {
    // Grid lines
    let grid_style = Style::default().fg(GRID_COLOR);
    for i in 1..3u16 {
        let x = board.x + i * (CELL_WIDTH + 1) - 1;
        for y in board.y..board.y + BOARD_HEIGHT {
            frame.render_widget(
                Paragraph::new(Span::styled("│", grid_style)),
                Rect::new(x, y, 1, 1),
            );
        }
        let y = board.y + i * (CELL_HEIGHT + 1) - 1;
        let line = (0..BOARD_WIDTH)
            .map(|dx| if (dx + 1) % (CELL_WIDTH + 1) == 0 { '┼' } else { '─' })
            .collect::<String>();
        frame.render_widget(
            Paragraph::new(Span::styled(line, grid_style)),
            Rect::new(board.x, y, BOARD_WIDTH, 1),
        );
    }

    for (index, cell) in game.board.iter().enumerate() {
        let rect = cell_rect(board, index);
        hits.push(rect, Some(ClickTarget::Cell(index)));

        let highlighted = game.winning_line.is_some_and(|line| line.contains(&index));
        let (text, style) = match cell {
            Some(mark) => {
                let mut style = Style::default()
                    .fg(mark_color(*mark))
                    .add_modifier(Modifier::BOLD);
                if highlighted {
                    style = style.bg(Color::Rgb(40, 60, 40));
                }
                (mark.symbol().to_string(), style)
            }
            // Empty cells show the key that plays them
            None => ((index + 1).to_string(), Style::default().fg(Color::Rgb(60, 60, 60))),
        };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(text, style)),
            Line::from(""),
        ];
        let mut paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        if highlighted {
            paragraph = paragraph.style(Style::default().bg(Color::Rgb(40, 60, 40)));
        }
        frame.render_widget(paragraph, rect);
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let (text, color) = match (game.phase, game.outcome) {
        (Phase::Over, Some(Outcome::Winner(mark))) => {
            (format!("{} wins!", mark.symbol()), Color::Green)
        }
        (Phase::Over, _) => ("It's a draw".to_string(), Color::Yellow),
        (Phase::Running, _) => (
            format!("{} to move", game.current.symbol()),
            mark_color(game.current),
        ),
        (phase, _) => (phase.label().to_string(), Color::Yellow),
    };
    render_status_bar(
        frame,
        area,
        &text,
        color,
        &[
            ("[1-9]", "Play"),
            ("[P]", "Start/Pause"),
            ("[R]", "Reset"),
            ("[Esc]", "Close"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }
    let lines = vec![
        info_line(
            "Turn",
            game.current.symbol().to_string(),
            mark_color(game.current),
        ),
        info_line("Moves", game.move_count.to_string(), Color::White),
        info_line("State", game.phase.label().to_string(), Color::Yellow),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
