use crate::board::{Board, Mark, Occupant, Position};

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    /// The game is still ongoing.
    Undetermined,
    FirstWins,
    SecondWins,
    /// The board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Undetermined
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::FirstWins => Some(Mark::First),
            Outcome::SecondWins => Some(Mark::Second),
            Outcome::Undetermined | Outcome::Draw => None,
        }
    }

    fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::First => Outcome::FirstWins,
            Mark::Second => Outcome::SecondWins,
        }
    }
}

/// Minimum number of moves before any line can be complete: N by the line's
/// owner and N - 1 by the opponent.
pub fn min_moves_for_win(size: usize) -> usize {
    2 * size - 1
}

/// Determines the game outcome produced by `last_move`.
///
/// Only the lines through `last_move` are checked, since a new line can only be
/// completed through the cell just played.
pub fn evaluate(board: &Board, last_move: Option<Position>) -> Outcome {
    let Some(last_move) = last_move else {
        return Outcome::Undetermined;
    };

    if board.moves_made() < min_moves_for_win(board.size()) {
        return Outcome::Undetermined;
    }

    if let Some(mark) = board.cell(last_move).occupant().mark() {
        if is_winning_move(board, last_move, mark) {
            return Outcome::won_by(mark);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undetermined
    }
}

fn is_winning_move(board: &Board, at: Position, mark: Mark) -> bool {
    let n = board.size();
    let owned = Occupant::from(mark);
    let owns = |row: usize, col: usize| board.occupant(row, col) == owned;

    (0..n).all(|j| owns(at.row, j))
        || (0..n).all(|i| owns(i, at.col))
        || (at.row == at.col && (0..n).all(|i| owns(i, i)))
        || (at.row + at.col == n - 1 && (0..n).all(|i| owns(i, n - 1 - i)))
}
