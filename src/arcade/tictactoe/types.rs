//! Tic-Tac-Toe data structures.

use crate::arcade::Phase;

/// Number of cells on the board, indexed row-major from 0.
pub const CELL_COUNT: usize = 9;

/// The 8 lines that win: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Mark),
    Draw,
}

pub type Board = [Option<Mark>; CELL_COUNT];

/// Main game state.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    pub phase: Phase,
    pub board: Board,
    /// Whose turn it is.
    pub current: Mark,
    pub outcome: Option<Outcome>,
    /// Cells of the completed line, for highlighting.
    pub winning_line: Option<[usize; 3]>,
    pub move_count: u8,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            board: [None; CELL_COUNT],
            current: Mark::X,
            outcome: None,
            winning_line: None,
            move_count: 0,
        }
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < CELL_COUNT && self.board[index].is_none()
    }
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Board from a compact string: `X`, `O`, anything else is empty.
///
/// Handy for tests and debugging; extra characters are ignored.
pub fn board_from_str(cells: &str) -> Board {
    let mut board = [None; CELL_COUNT];
    for (slot, c) in board.iter_mut().zip(cells.chars()) {
        *slot = match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        };
    }
    board
}
