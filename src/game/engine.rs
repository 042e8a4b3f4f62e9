use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::dictionary::Vocabulary;
use crate::error::EngineError;
use crate::game::{GameRules, Scorer, Scrambler, WordValidator};
use crate::models::{GameCommand, GameState, GameSummary};

/// Runs one word-unscramble session at a time and enforces its rules.
///
/// The engine keeps the answer and the set of words already shown to itself;
/// callers only ever see [`GameState`] snapshots.
pub struct WordGameEngine<R> {
    vocabulary: Vocabulary,
    rules: GameRules,
    scorer: Scorer,
    rng: R,
    used_words: HashSet<String>,
    target: String,
    state: GameState,
    session_id: Uuid,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl<R: Rng> WordGameEngine<R> {
    /// Build an engine and start its first session
    pub fn new(vocabulary: Vocabulary, rules: GameRules, rng: R) -> Result<Self, EngineError> {
        rules.validate()?;
        if vocabulary.is_empty() {
            return Err(EngineError::EmptyVocabulary);
        }
        if vocabulary.len() <= rules.round_limit {
            return Err(EngineError::VocabularyTooSmall {
                available: vocabulary.len(),
                required: rules.round_limit,
            });
        }

        let mut engine = Self {
            vocabulary,
            scorer: Scorer::new(&rules),
            rules,
            rng,
            used_words: HashSet::new(),
            target: String::new(),
            state: GameState::new_game(String::new()),
            session_id: Uuid::nil(),
            started_at: Utc::now(),
            finished_at: None,
        };
        engine.reset()?;
        Ok(engine)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Final report, available once the session is over
    pub fn summary(&self) -> Option<GameSummary> {
        let finished_at = self.finished_at?;
        Some(GameSummary {
            session_id: self.session_id,
            final_score: self.state.score,
            max_score: self.scorer.max_score(self.rules.round_limit),
            words_played: self.used_words.len(),
            started_at: self.started_at,
            finished_at,
        })
    }

    /// Dispatch a player command
    pub fn apply(&mut self, command: GameCommand) -> Result<GameState, EngineError> {
        match command {
            GameCommand::UpdateGuess(text) => Ok(self.update_guess(text)),
            GameCommand::Submit => self.submit_guess(),
            GameCommand::Skip => self.skip(),
            GameCommand::Reset => self.reset(),
        }
    }

    /// Start a new session from scratch
    pub fn reset(&mut self) -> Result<GameState, EngineError> {
        let empty = HashSet::new();
        let (target, scrambled) = self.draw_word(&empty)?;

        self.used_words.clear();
        self.used_words.insert(target.clone());
        self.target = target;
        self.session_id = Uuid::new_v4();
        self.started_at = Utc::now();
        self.finished_at = None;
        self.state = GameState::new_game(scrambled);

        tracing::info!("Started session {}", self.session_id);
        Ok(self.state.clone())
    }

    pub fn update_guess(&mut self, text: impl Into<String>) -> GameState {
        self.state = self.state.with_guess(text);
        self.state.clone()
    }

    /// Check the current guess; a match scores and moves on, a miss flags the round
    pub fn submit_guess(&mut self) -> Result<GameState, EngineError> {
        if self.state.is_game_over {
            tracing::debug!("Ignoring guess in finished session {}", self.session_id);
            return Ok(self.state.clone());
        }

        if WordValidator::is_correct(&self.state.user_guess, &self.target) {
            let score = self.scorer.award(self.state.score);
            tracing::debug!(
                "Correct guess for word {} in session {}",
                self.state.word_index,
                self.session_id
            );
            self.advance(score)
        } else {
            tracing::debug!(
                "Wrong guess '{}' for word {} in session {}",
                self.state.user_guess,
                self.state.word_index,
                self.session_id
            );
            self.state = self.state.rejected();
            Ok(self.state.clone())
        }
    }

    /// Move on to the next word without scoring
    pub fn skip(&mut self) -> Result<GameState, EngineError> {
        if self.state.is_game_over {
            tracing::debug!("Ignoring skip in finished session {}", self.session_id);
            return Ok(self.state.clone());
        }

        tracing::debug!(
            "Skipped word {} in session {}",
            self.state.word_index,
            self.session_id
        );
        self.advance(self.state.score)
    }

    fn advance(&mut self, score: u32) -> Result<GameState, EngineError> {
        if self.used_words.len() >= self.rules.round_limit {
            self.state = self.state.finished(score);
            self.finished_at = Some(Utc::now());
            tracing::info!(
                "Session {} over with score {}",
                self.session_id,
                self.state.score
            );
            return Ok(self.state.clone());
        }

        let used = std::mem::take(&mut self.used_words);
        let drawn = self.draw_word(&used);
        self.used_words = used;
        let (target, scrambled) = drawn?;

        self.used_words.insert(target.clone());
        self.target = target;
        self.state = self.state.next_round(scrambled, score);
        Ok(self.state.clone())
    }

    /// Pick an unused word and its scrambled form without touching engine state
    fn draw_word(&mut self, used: &HashSet<String>) -> Result<(String, String), EngineError> {
        let target = self.vocabulary.draw_unused(&mut self.rng, used)?.to_string();
        let scrambled = Scrambler::scramble(&target, &mut self.rng)?;
        debug_assert!(self.vocabulary.contains(&target));
        debug_assert!(WordValidator::is_scramble_of(&scrambled, &target));
        Ok((target, scrambled))
    }
}
