use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::scorer::{GameRules, DEFAULT_ROUND_LIMIT, DEFAULT_SCORE_INCREASE};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Word list file; the built-in list is used when unset
    pub vocabulary_path: Option<String>,
    pub round_limit: usize,
    pub score_increase: u32,
    /// Fixed seed for a reproducible game
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let game = GameConfig {
            vocabulary_path: var("VOCABULARY_PATH").filter(|path| !path.trim().is_empty()),
            round_limit: var("GAME_ROUND_LIMIT")
                .unwrap_or_else(|| DEFAULT_ROUND_LIMIT.to_string())
                .parse()
                .context("GAME_ROUND_LIMIT must be a number")?,
            score_increase: var("GAME_SCORE_INCREASE")
                .unwrap_or_else(|| DEFAULT_SCORE_INCREASE.to_string())
                .parse()
                .context("GAME_SCORE_INCREASE must be a number")?,
            seed: var("GAME_SEED")
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("GAME_SEED must be an unsigned 64-bit number")?,
        };

        Ok(Config { game })
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            round_limit: self.game.round_limit,
            score_increase: self.game.score_increase,
        }
    }
}
