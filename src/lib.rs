//! Perfect-play Tic-Tac-Toe on a square N x N board.
//!
//! The engine is an exhaustive minimax search with optional alpha-beta pruning and
//! memoization of board states. It is meant for boards small enough to search to
//! the end, such as the classic 3 x 3.
//!
//! # Example
//!
//! ```rust
//! use minimax_ttt::board::{Board, Mark, Position};
//! use minimax_ttt::minimax::{Minimax, Scoring};
//! use minimax_ttt::random::SeededRandom;
//! use minimax_ttt::selector::MoveSelector;
//!
//! // The human opened in a corner
//! let mut board = Board::new(3);
//! board.apply_move(Position::new(0, 0), Mark::First).unwrap();
//!
//! // Configure the engine for the second player using the builder
//! let engine = Minimax::builder(Mark::Second)
//!     .with_scoring(Scoring::DepthWeighted)
//!     .with_alpha_beta_pruning(true)
//!     .with_memoization(true)
//!     .build();
//! let mut selector = MoveSelector::new(engine, SeededRandom::default());
//!
//! // Search every reply and play the best one
//! let cell = selector.select_best_move(&mut board).unwrap();
//!
//! assert_eq!(cell.position(), Position::new(1, 1));
//! println!("The best move is: {}", cell);
//! ```

/// Board, cells, marks and positions.
pub mod board;
/// Game configuration loaded from TOML.
pub mod config;
/// Error types for moves, games and configuration.
pub mod error;
/// Turn orchestration and the final report.
pub mod game;
/// The memo table used by the search engine.
pub mod memo;
/// The minimax search engine.
pub mod minimax;
/// Automated and human players.
pub mod player;
/// Injectable random sources.
pub mod random;
/// Win, draw and undetermined detection.
pub mod rule;
/// Top-level move selection for the automated player.
pub mod selector;
