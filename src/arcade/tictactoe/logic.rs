//! Tic-Tac-Toe rules: move validation, win and draw detection.

use super::types::*;
use crate::arcade::Phase;

/// Input actions for Tic-Tac-Toe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeInput {
    /// `p`: start, pause or resume.
    TogglePause,
    /// `r`: clear the board.
    Reset,
    /// Play the cell at this index (0-8).
    Cell(usize),
}

/// Process player input.
pub fn process_input(game: &mut TicTacToeGame, input: TicTacToeInput) {
    match input {
        TicTacToeInput::TogglePause => match game.phase {
            Phase::NotStarted | Phase::Paused => game.phase = Phase::Running,
            Phase::Running => game.phase = Phase::Paused,
            Phase::Over => {}
        },
        TicTacToeInput::Reset => *game = TicTacToeGame::new(),
        TicTacToeInput::Cell(index) => {
            make_move(game, index);
        }
    }
}

/// Place the current player's mark. Returns false if the move was ignored.
///
/// Ignored when the game is not running, the cell is taken or out of range.
pub fn make_move(game: &mut TicTacToeGame, index: usize) -> bool {
    if !game.phase.is_running() || !game.is_empty_cell(index) {
        return false;
    }

    game.board[index] = Some(game.current);
    game.move_count += 1;

    match check_winner(&game.board) {
        Some(outcome) => {
            game.outcome = Some(outcome);
            game.winning_line = winning_line(&game.board);
            game.phase = Phase::Over;
        }
        None => game.current = game.current.other(),
    }
    true
}

/// The first completed line, checking rows, then columns, then diagonals.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        board[a].is_some() && board[a] == board[b] && board[a] == board[c]
    })
}

/// Winner if any line is complete, draw if the board is full, else `None`.
pub fn check_winner(board: &Board) -> Option<Outcome> {
    if let Some([a, _, _]) = winning_line(board) {
        return board[a].map(Outcome::Winner);
    }
    if board.iter().all(Option::is_some) {
        return Some(Outcome::Draw);
    }
    None
}
