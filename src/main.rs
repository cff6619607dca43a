//! Console Tic-Tac-Toe against the minimax AI.

use anyhow::Result;
use clap::Parser;
use minimax_ttt::board::{Board, Mark};
use minimax_ttt::config::GameConfig;
use minimax_ttt::game::Game;
use minimax_ttt::minimax::{Minimax, Scoring};
use minimax_ttt::player::{AiPlayer, HumanPlayer, Player};
use minimax_ttt::random::AnyRandom;
use minimax_ttt::selector::MoveSelector;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Tic-Tac-Toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play Tic-Tac-Toe against a minimax AI", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of the board
    #[arg(long)]
    board_size: Option<usize>,

    /// Terminal scoring policy
    #[arg(long, value_enum)]
    scoring: Option<Scoring>,

    /// Disable alpha-beta pruning
    #[arg(long)]
    no_pruning: bool,

    /// Disable the memo table
    #[arg(long)]
    no_memo: bool,

    /// Search the AI's opening move instead of picking it at random
    #[arg(long)]
    no_random_opening: bool,

    /// Let the AI open the game
    #[arg(long)]
    ai_first: bool,

    /// Seed for the random opening move
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(scoring) = self.scoring {
            config.scoring = scoring;
        }
        if self.no_pruning {
            config.pruning = false;
        }
        if self.no_memo {
            config.memoize = false;
        }
        if self.no_random_opening {
            config.random_opening = false;
        }
        if self.ai_first {
            config.ai_first = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    info!(?config, "Starting Tic Tac Toe Game");

    let (human_mark, ai_mark) = if config.ai_first {
        (Mark::Second, Mark::First)
    } else {
        (Mark::First, Mark::Second)
    };

    let engine = Minimax::builder(ai_mark)
        .with_scoring(config.scoring)
        .with_alpha_beta_pruning(config.pruning)
        .with_memoization(config.memoize)
        .build();
    let selector = MoveSelector::new(engine, AnyRandom::from_seed(config.seed))
        .with_random_opening(config.random_opening);

    let ai: Box<dyn Player> = Box::new(AiPlayer::from_selector("AI", selector));
    let human: Box<dyn Player> = Box::new(HumanPlayer::new(
        "You",
        human_mark,
        std::io::stdin().lock(),
        std::io::stdout(),
    ));
    let (first, second) = if config.ai_first {
        (ai, human)
    } else {
        (human, ai)
    };

    let mut game = Game::new(Board::new(config.board_size), first, second);
    let report = game.play()?;

    info!("Tic Tac Toe Game Finished, results:");
    println!("{report}");
    Ok(())
}
