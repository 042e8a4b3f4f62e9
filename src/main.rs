mod config;
mod dictionary;
mod error;
mod game;
mod models;
mod session;
mod utils;

use anyhow::{Context, Result};
use config::Config;
use dictionary::Vocabulary;
use game::WordGameEngine;
use rand::{rngs::StdRng, SeedableRng};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the session protocol
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_unscramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting word unscramble...");

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let vocabulary = match &config.game.vocabulary_path {
        Some(path) => match Vocabulary::load(path).await {
            Ok(vocab) => vocab,
            Err(e) => {
                tracing::warn!("{:#}. Using the built-in word list.", e);
                Vocabulary::builtin()
            }
        },
        None => Vocabulary::builtin(),
    };
    tracing::debug!("Vocabulary: {}", vocabulary.words().join(", "));

    let rng = match config.game.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut engine = WordGameEngine::new(vocabulary, config.rules(), rng)
        .context("Failed to start the game")?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    session::run_session(&mut engine, stdin, &mut stdout).await?;

    tracing::info!("Goodbye");
    Ok(())
}
