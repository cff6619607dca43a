use std::path::Path;

use crate::error::ConfigError;
use crate::minimax::Scoring;
use tracing::warn;

pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Boards above this size take a very long time to search exhaustively.
pub const LARGEST_FAST_BOARD_SIZE: usize = 4;

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length N of the board.
    pub board_size: usize,
    pub scoring: Scoring,
    /// Alpha-beta pruning in the search.
    pub pruning: bool,
    /// Memo table in the search.
    pub memoize: bool,
    /// Play a random cell when the AI opens on an empty board.
    pub random_opening: bool,
    /// The AI takes the first mark and opens the game.
    pub ai_first: bool,
    /// Seeds the opening move. Thread randomness when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            scoring: Scoring::default(),
            pruning: true,
            memoize: true,
            random_opening: true,
            ai_first: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation(
                "board_size must be at least 1".to_string(),
            ));
        }
        if self.board_size > LARGEST_FAST_BOARD_SIZE {
            warn!(
                board_size = self.board_size,
                "exhaustive search on this board size may not finish in reasonable time"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.board_size, 3);
        assert_eq!(config.scoring, Scoring::DepthWeighted);
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let config = GameConfig::from_toml_str(
            r#"
            board_size = 4
            scoring = "unweighted"
            pruning = false
            seed = 17
            "#,
        )
        .unwrap();

        assert_eq!(config.board_size, 4);
        assert_eq!(config.scoring, Scoring::Unweighted);
        assert!(!config.pruning);
        assert!(config.memoize);
        assert_eq!(config.seed, Some(17));
    }

    #[test]
    fn zero_board_size_is_rejected() {
        let err = GameConfig::from_toml_str("board_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = GameConfig::from_toml_str("scoring = \"fastest\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = Path::new("/nonexistent/minimax-ttt.toml");

        assert!(matches!(
            GameConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
        assert_eq!(GameConfig::load_or_default(path).unwrap(), GameConfig::default());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = GameConfig {
            ai_first: true,
            seed: Some(5),
            ..GameConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
    }
}
