//! Turn orchestration and the end-of-game report.

use crate::board::{Board, Mark};
use crate::error::GameError;
use crate::player::Player;
use crate::rule::{Outcome, evaluate};
use std::fmt;
use tracing::{info, instrument};

/// Runs one game between two players on a board owned by the game.
pub struct Game {
    board: Board,
    first: Box<dyn Player>,
    second: Box<dyn Player>,
}

impl Game {
    /// `first` must hold [`Mark::First`] and `second` [`Mark::Second`].
    pub fn new(board: Board, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        assert_eq!(first.mark(), Mark::First, "first player must play the first mark");
        assert_eq!(second.mark(), Mark::Second, "second player must play the second mark");
        Self {
            board,
            first,
            second,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Alternates plies, starting with the first mark, until the outcome rule
    /// reports a win or a draw.
    #[instrument(skip_all, fields(size = self.board.size()))]
    pub fn play(&mut self) -> Result<GameReport, GameError> {
        info!("starting tic-tac-toe game");
        let mut turn = Mark::First;

        loop {
            let player = match turn {
                Mark::First => &mut self.first,
                Mark::Second => &mut self.second,
            };
            info!(player = player.name(), mark = %turn, "turn");

            let cell = player.produce_move(&mut self.board)?;
            info!(cell = %cell, "board:\n{}", self.board);

            let outcome = evaluate(&self.board, Some(cell.position()));
            if outcome.is_terminal() {
                let report = self.report(outcome);
                info!(?outcome, visited_nodes = report.visited_nodes, "game finished");
                return Ok(report);
            }
            turn = turn.opponent();
        }
    }

    fn report(&self, outcome: Outcome) -> GameReport {
        let winner = outcome.winner().map(|mark| match mark {
            Mark::First => self.first.name().to_string(),
            Mark::Second => self.second.name().to_string(),
        });
        GameReport {
            outcome,
            winner,
            visited_nodes: self.first.visited_nodes() + self.second.visited_nodes(),
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: Outcome,
    /// Name of the winning player, if any.
    pub winner: Option<String>,
    /// Distinct board states searched by the automated players.
    pub visited_nodes: usize,
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.outcome, &self.winner) {
            (Outcome::Draw, _) => writeln!(f, "It's a draw!")?,
            (Outcome::Undetermined, _) => writeln!(f, "The game is not finished.")?,
            (_, Some(name)) => writeln!(f, "{name} wins!")?,
            (outcome, None) => writeln!(f, "{outcome:?}")?,
        }
        write!(f, "number of visited nodes: {}", self.visited_nodes)
    }
}
