use crate::board::{Board, Mark, Position};
use crate::memo::{MemoKey, MemoTable};
use crate::rule::{Outcome, evaluate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How terminal positions are scored, from the maximizing player's point of view.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    /// Wins score `K - depth` and losses `depth - K`, with `K = N² + 1`.
    /// Prefers the fastest win and the slowest loss.
    #[default]
    DepthWeighted,
    /// Wins score `+1`, losses `-1`, whatever the path length.
    Unweighted,
}

/// The minimax search engine.
///
/// The board is borrowed mutably for the whole search and every simulated move
/// is undone before the call that made it returns. Memo entries are keyed by the
/// occupant layout and the side to move, plus the depth under
/// [`Scoring::DepthWeighted`], and carry a [`crate::memo::Bound`] so they stay
/// valid when combined with alpha-beta pruning.
pub struct Minimax {
    maximizer: Mark,
    scoring: Scoring,
    use_alpha_beta_pruning: bool,
    use_memoization: bool,
    memo: MemoTable,
    visited: HashSet<String>,
}

impl Default for Minimax {
    fn default() -> Self {
        MinimaxBuilder::new(Mark::Second).build()
    }
}

/// A builder for creating instances of `Minimax`.
pub struct MinimaxBuilder {
    maximizer: Mark,
    scoring: Scoring,
    use_alpha_beta_pruning: bool,
    use_memoization: bool,
}

impl MinimaxBuilder {
    /// Creates a new builder for an engine maximizing on behalf of `maximizer`.
    pub fn new(maximizer: Mark) -> Self {
        Self {
            maximizer,
            scoring: Scoring::default(),
            use_alpha_beta_pruning: true,
            use_memoization: true,
        }
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    /// Enables or disables the memo table.
    pub fn with_memoization(mut self, use_memo: bool) -> Self {
        self.use_memoization = use_memo;
        self
    }

    pub fn build(self) -> Minimax {
        Minimax::new(
            self.maximizer,
            self.scoring,
            self.use_alpha_beta_pruning,
            self.use_memoization,
        )
    }
}

impl Minimax {
    /// Returns a new builder for `Minimax`.
    pub fn builder(maximizer: Mark) -> MinimaxBuilder {
        MinimaxBuilder::new(maximizer)
    }

    /// Creates a new engine. Prefer [`Minimax::builder`].
    pub fn new(
        maximizer: Mark,
        scoring: Scoring,
        use_alpha_beta_pruning: bool,
        use_memoization: bool,
    ) -> Self {
        Self {
            maximizer,
            scoring,
            use_alpha_beta_pruning,
            use_memoization,
            memo: MemoTable::new(),
            visited: HashSet::new(),
        }
    }

    pub fn maximizer(&self) -> Mark {
        self.maximizer
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Scores the board right after the maximizer played `last_move`: the
    /// opponent moves next.
    pub fn minimax(&mut self, board: &mut Board, last_move: Option<Position>) -> i32 {
        self.search(board, last_move, false, 0, i32::MIN, i32::MAX)
    }

    /// Recursive minimax with optional alpha-beta pruning and memoization.
    ///
    /// `maximizing` tells whether the maximizer moves next. `depth` counts plies
    /// from the root of this search.
    pub fn search(
        &mut self,
        board: &mut Board,
        last_move: Option<Position>,
        maximizing: bool,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let hash = board.hash();
        let outcome = evaluate(board, last_move);
        if outcome.is_terminal() {
            self.visited.insert(hash);
            return self.terminal_score(outcome, depth, board.cell_count());
        }

        let empty_cells = board.empty_cells();
        if empty_cells.is_empty() {
            // Only reachable without a last move to check; nobody can move.
            self.visited.insert(hash);
            return 0;
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let key = self.use_memoization.then(|| MemoKey {
            board: hash.clone(),
            maximizing,
            depth: match self.scoring {
                Scoring::DepthWeighted => depth,
                Scoring::Unweighted => 0,
            },
        });
        self.visited.insert(hash);
        if let Some(key) = &key {
            if let Some(score) = self.memo.probe(key, &mut alpha, &mut beta) {
                return score;
            }
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for cell in empty_cells {
            let at = cell.position();
            board.place(at, mover);
            let score = self.search(board, Some(at), !maximizing, depth + 1, alpha, beta);
            board.undo_move(at);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };

            if self.use_alpha_beta_pruning {
                if maximizing {
                    alpha = alpha.max(best);
                } else {
                    beta = beta.min(best);
                }
                if alpha >= beta {
                    break;
                }
            }
        }

        if let Some(key) = key {
            self.memo.store(key, best, alpha_orig, beta_orig);
        }
        best
    }

    /// Number of distinct board states this engine has entered.
    pub fn visited_nodes_count(&self) -> usize {
        self.visited.len()
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Drops all memoized scores. Called once per move selection.
    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }

    fn terminal_score(&self, outcome: Outcome, depth: u32, cell_count: usize) -> i32 {
        let maximizer_won = match outcome {
            Outcome::Draw => return 0,
            Outcome::Undetermined => unreachable!("undetermined outcome has no score"),
            Outcome::FirstWins | Outcome::SecondWins => outcome.winner() == Some(self.maximizer),
        };

        match self.scoring {
            Scoring::Unweighted => {
                if maximizer_won {
                    1
                } else {
                    -1
                }
            }
            Scoring::DepthWeighted => {
                let k = cell_count as i32 + 1;
                let depth = depth as i32;
                if maximizer_won { k - depth } else { depth - k }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(first: &[(usize, usize)], second: &[(usize, usize)]) -> Board {
        let mut board = Board::new(3);
        for &(row, col) in first {
            board.apply_move(Position::new(row, col), Mark::First).unwrap();
        }
        for &(row, col) in second {
            board.apply_move(Position::new(row, col), Mark::Second).unwrap();
        }
        board
    }

    fn engine(scoring: Scoring, pruning: bool, memo: bool) -> Minimax {
        Minimax::builder(Mark::Second)
            .with_scoring(scoring)
            .with_alpha_beta_pruning(pruning)
            .with_memoization(memo)
            .build()
    }

    #[test]
    fn empty_board_is_a_draw() {
        for scoring in [Scoring::Unweighted, Scoring::DepthWeighted] {
            // arrange
            let mut board = Board::new(3);
            let mut minimax = Minimax::builder(Mark::First).with_scoring(scoring).build();

            // act
            let score = minimax.search(&mut board, None, true, 0, i32::MIN, i32::MAX);

            // assert
            assert_eq!(score, 0, "{scoring:?}");
            assert!(board.is_pristine());
            assert!(minimax.visited_nodes_count() > 1);
        }
    }

    #[test]
    fn maximizer_win_scores_positive() {
        // arrange
        let mut board = board_with(&[(1, 0), (2, 1)], &[(0, 0), (0, 1), (0, 2)]);
        let mut unweighted = engine(Scoring::Unweighted, true, true);
        let mut weighted = engine(Scoring::DepthWeighted, true, true);

        // act
        let last = Some(Position::new(0, 2));
        let unweighted_score = unweighted.minimax(&mut board, last);
        let weighted_score = weighted.minimax(&mut board, last);

        // assert
        assert_eq!(unweighted_score, 1);
        assert_eq!(weighted_score, 10);
        assert_eq!(unweighted.visited_nodes_count(), 1);
    }

    #[test]
    fn forced_loss_scores_negative() {
        // arrange: First threatens (1,2) and moves next.
        let mut board = board_with(&[(1, 0), (1, 1)], &[(0, 0), (0, 2)]);
        let mut unweighted = engine(Scoring::Unweighted, true, true);
        let mut weighted = engine(Scoring::DepthWeighted, true, true);

        // act
        let last = Some(Position::new(0, 2));
        let unweighted_score = unweighted.minimax(&mut board, last);
        let weighted_score = weighted.minimax(&mut board, last);

        // assert
        assert_eq!(unweighted_score, -1);
        assert_eq!(weighted_score, 1 - 10);
        assert_eq!(board.moves_made(), 4);
    }

    #[test]
    fn full_board_without_line_scores_zero() {
        // X O X
        // X O O
        // O X X
        let mut board = board_with(
            &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
            &[(0, 1), (1, 1), (1, 2), (2, 0)],
        );
        let mut minimax = engine(Scoring::Unweighted, true, true);

        let score = minimax.minimax(&mut board, Some(Position::new(2, 2)));

        assert_eq!(score, 0);
    }

    #[test]
    fn search_restores_the_board() {
        let mut board = board_with(&[(0, 0)], &[(1, 1)]);
        let before = board.hash();
        let mut minimax = engine(Scoring::DepthWeighted, true, true);

        minimax.search(&mut board, Some(Position::new(1, 1)), false, 0, i32::MIN, i32::MAX);

        assert_eq!(board.hash(), before);
        assert_eq!(board.moves_made(), 2);
    }

    #[test]
    fn pruning_and_memoization_do_not_change_scores() {
        for scoring in [Scoring::Unweighted, Scoring::DepthWeighted] {
            for opening in [(0, 0), (0, 1), (1, 1)] {
                let mut board = board_with(&[opening], &[]);
                let last = Some(Position::new(opening.0, opening.1));

                let scores: Vec<i32> = [(false, false), (true, false), (false, true), (true, true)]
                    .into_iter()
                    .map(|(pruning, memo)| {
                        engine(scoring, pruning, memo).search(
                            &mut board,
                            last,
                            true,
                            0,
                            i32::MIN,
                            i32::MAX,
                        )
                    })
                    .collect();

                assert!(
                    scores.iter().all(|&s| s == scores[0]),
                    "{scoring:?} after {opening:?}: {scores:?}"
                );
            }
        }
    }

    #[test]
    fn memoized_scores_match_for_every_two_ply_board() {
        let mut board = Board::new(3);
        for first in board.empty_cells() {
            board.apply_move(first.position(), Mark::First).unwrap();
            for second in board.empty_cells() {
                let last = Some(second.position());
                board.apply_move(second.position(), Mark::Second).unwrap();

                let plain =
                    engine(Scoring::Unweighted, true, false).minimax(&mut board, last);
                let memoized =
                    engine(Scoring::Unweighted, false, true).minimax(&mut board, last);

                assert_eq!(plain, memoized, "{}", board.hash());
                board.undo_move(second.position());
            }
            board.undo_move(first.position());
        }
    }

    #[test]
    fn memo_is_reused_within_a_search() {
        let mut board = board_with(&[(0, 0)], &[]);
        let mut memoized = engine(Scoring::Unweighted, false, true);
        let mut plain = engine(Scoring::Unweighted, false, false);

        memoized.search(&mut board, Some(Position::new(0, 0)), true, 0, i32::MIN, i32::MAX);
        plain.search(&mut board, Some(Position::new(0, 0)), true, 0, i32::MIN, i32::MAX);

        assert!(memoized.memo_len() > 0);
        assert_eq!(plain.memo_len(), 0);
        // Both engines see the same set of distinct states.
        assert_eq!(memoized.visited_nodes_count(), plain.visited_nodes_count());
        memoized.clear_memo();
        assert_eq!(memoized.memo_len(), 0);
    }

    #[test]
    fn visited_nodes_count_is_deterministic() {
        let count = || {
            let mut board = board_with(&[(2, 0)], &[(2, 1)]);
            let mut minimax = Minimax::default();
            minimax.minimax(&mut board, Some(Position::new(2, 1)));
            minimax.visited_nodes_count()
        };

        let first = count();
        assert!(first >= 1);
        assert_eq!(first, count());
    }
}
