//! The two kinds of participants: the search-driven AI and a human at a console.

use crate::board::{Board, Cell, Mark};
use crate::error::{GameError, MoveError};
use crate::minimax::Minimax;
use crate::random::RandomSource;
use crate::selector::MoveSelector;
use std::io::{BufRead, Write};
use tracing::debug;

/// Something that can produce a move for its mark.
pub trait Player {
    fn mark(&self) -> Mark;

    fn name(&self) -> &str;

    /// Plays one move on `board` and returns the occupied cell.
    fn produce_move(&mut self, board: &mut Board) -> Result<Cell, GameError>;

    /// Distinct board states searched so far, for the final report.
    fn visited_nodes(&self) -> usize {
        0
    }
}

/// Automated player backed by a [`MoveSelector`].
pub struct AiPlayer<R: RandomSource> {
    name: String,
    selector: MoveSelector<R>,
}

impl<R: RandomSource> AiPlayer<R> {
    pub fn new(name: impl Into<String>, engine: Minimax, random: R) -> Self {
        Self::from_selector(name, MoveSelector::new(engine, random))
    }

    pub fn from_selector(name: impl Into<String>, selector: MoveSelector<R>) -> Self {
        Self {
            name: name.into(),
            selector,
        }
    }
}

impl<R: RandomSource> Player for AiPlayer<R> {
    fn mark(&self) -> Mark {
        self.selector.mark()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn produce_move(&mut self, board: &mut Board) -> Result<Cell, GameError> {
        debug!(ai = %self.name, "AI making move");
        Ok(self.selector.select_best_move(board)?)
    }

    fn visited_nodes(&self) -> usize {
        self.selector.visited_nodes_count()
    }
}

/// Human player typing coordinates into a console.
///
/// Reads a row and then a column, re-prompting until both are in range and the
/// cell is free.
pub struct HumanPlayer<R: BufRead, W: Write> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, mark: Mark, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
            output,
        }
    }

    fn read_coordinate(&mut self, axis: &str, size: usize) -> Result<usize, GameError> {
        let bound = size - 1;
        loop {
            writeln!(self.output, "choose {axis} (0-{bound})")?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(value) if value < size => return Ok(value),
                Ok(value) => writeln!(
                    self.output,
                    "invalid input, value {value} is outside of the game board!"
                )?,
                Err(_) => writeln!(self.output, "invalid input, expected a number")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn produce_move(&mut self, board: &mut Board) -> Result<Cell, GameError> {
        loop {
            let row = self.read_coordinate("row", board.size())?;
            let col = self.read_coordinate("column", board.size())?;
            let at = board.position(row, col)?;

            match board.apply_move(at, self.mark) {
                Ok(cell) => return Ok(cell),
                Err(MoveError::IllegalMove { .. }) => {
                    writeln!(self.output, "invalid move, this area is already occupied!")?
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
