use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rand::Rng;
use tokio::fs;

use crate::error::EngineError;
use crate::utils::letters::distinct_letters;

/// Draw attempts allowed per vocabulary word before giving up
pub const DRAW_ATTEMPT_FACTOR: usize = 16;

/// Word list the game ships with
pub const DEFAULT_WORDS: &[&str] = &[
    "animal", "auto", "anagram", "android", "compose", "computer", "default", "function",
    "happy", "kotlin", "language", "movie", "music", "password", "pizza", "program",
    "science", "study", "symbol", "system", "tablet", "train", "tree", "update",
    "variable", "website", "window", "wonder", "work", "world", "apple", "beach",
    "chair", "dance", "earth", "flame", "grape", "house", "image", "juice",
    "keyboard", "light", "mountain", "ocean", "plant", "queen", "river", "stone",
    "tiger", "umbrella", "voice", "water", "youth", "zebra",
];

static BUILTIN: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::from_words(DEFAULT_WORDS.iter().copied()));

/// Pool of candidate target words, lowercased and deduplicated
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Load a vocabulary from a file with one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        let vocabulary = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into vocabulary", vocabulary.len());

        Ok(vocabulary)
    }

    /// The built-in word list
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a vocabulary, dropping blanks, duplicates and words that cannot be scrambled
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .filter(|word| {
                let keep = distinct_letters(word) >= 2;
                if !keep {
                    tracing::warn!("Dropping '{}' from vocabulary: it cannot be scrambled", word);
                }
                keep
            })
            .collect();

        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Check if a word is in the vocabulary
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search(&word.to_lowercase()).is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick a word uniformly at random, redrawing while it is already in `used`.
    ///
    /// Redraws are capped at `len * DRAW_ATTEMPT_FACTOR`.
    pub fn draw_unused(
        &self,
        rng: &mut impl Rng,
        used: &HashSet<String>,
    ) -> Result<&str, EngineError> {
        if self.words.is_empty() {
            return Err(EngineError::EmptyVocabulary);
        }

        let attempts = self.words.len() * DRAW_ATTEMPT_FACTOR;
        for _ in 0..attempts {
            let word = &self.words[rng.random_range(0..self.words.len())];
            if !used.contains(word) {
                return Ok(word.as_str());
            }
        }

        Err(EngineError::DrawExhausted { attempts })
    }
}
