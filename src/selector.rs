use crate::board::{Board, Cell, Mark, Position};
use crate::error::MoveError;
use crate::minimax::Minimax;
use crate::random::RandomSource;
use tracing::{debug, info, instrument};

/// Picks and plays the automated player's move.
///
/// Every empty cell is tried in row-major order and scored by the search engine.
/// The first cell reaching the highest score wins ties.
pub struct MoveSelector<R: RandomSource> {
    mark: Mark,
    engine: Minimax,
    random: R,
    random_opening: bool,
}

impl<R: RandomSource> MoveSelector<R> {
    /// Plays as the engine's maximizer. Opening moves on a pristine board are
    /// random unless disabled with [`MoveSelector::with_random_opening`].
    pub fn new(engine: Minimax, random: R) -> Self {
        Self {
            mark: engine.maximizer(),
            engine,
            random,
            random_opening: true,
        }
    }

    pub fn with_random_opening(mut self, random_opening: bool) -> Self {
        self.random_opening = random_opening;
        self
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn engine(&self) -> &Minimax {
        &self.engine
    }

    pub fn visited_nodes_count(&self) -> usize {
        self.engine.visited_nodes_count()
    }

    /// Selects the best move for this player, plays it and returns the cell.
    #[instrument(skip_all, fields(mark = %self.mark))]
    pub fn select_best_move(&mut self, board: &mut Board) -> Result<Cell, MoveError> {
        let empty_cells = board.empty_cells();
        if empty_cells.is_empty() {
            return Err(MoveError::NoMovesAvailable);
        }

        if self.random_opening && board.is_pristine() {
            self.do_random_move(board, &empty_cells)
        } else {
            self.do_best_move(board, &empty_cells)
        }
    }

    fn do_random_move(&mut self, board: &mut Board, empty_cells: &[Cell]) -> Result<Cell, MoveError> {
        debug!("doing random move");
        let cell = self
            .random
            .choose(empty_cells)
            .ok_or(MoveError::NoMovesAvailable)?;
        board.apply_move(cell.position(), self.mark)
    }

    fn do_best_move(&mut self, board: &mut Board, empty_cells: &[Cell]) -> Result<Cell, MoveError> {
        debug!("doing best move");
        self.engine.clear_memo();

        let mut best: Option<(Position, i32)> = None;
        for cell in empty_cells {
            let at = cell.position();
            board.apply_move(at, self.mark)?;
            let score = self.engine.minimax(board, Some(at));
            board.undo_move(at);

            debug!(row = at.row, col = at.col, score, "scored move");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((at, score));
                debug!(row = at.row, col = at.col, score, "best move changed");
            }
        }

        let (at, score) = best.ok_or(MoveError::NoMovesAvailable)?;
        info!(
            row = at.row,
            col = at.col,
            score,
            visited_nodes = self.engine.visited_nodes_count(),
            "selected move"
        );
        board.apply_move(at, self.mark)
    }
}
