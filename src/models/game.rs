use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Snapshot of a game as the player sees it.
///
/// Snapshots are never edited in place: every transition builds a new one
/// from the previous value, so the caller only ever holds the latest copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Letters of the current target word in shuffled order
    pub scrambled_word: String,
    /// 1-based number of the word being shown
    pub word_index: usize,
    pub user_guess: String,
    pub score: u32,
    /// Set when the last submitted guess did not match
    pub guess_was_wrong: bool,
    pub is_game_over: bool,
}

impl GameState {
    /// First snapshot of a fresh session
    pub fn new_game(scrambled_word: String) -> Self {
        Self {
            scrambled_word,
            word_index: 1,
            user_guess: String::new(),
            score: 0,
            guess_was_wrong: false,
            is_game_over: false,
        }
    }

    /// Player edited the guess buffer
    pub fn with_guess(&self, text: impl Into<String>) -> Self {
        Self {
            user_guess: text.into(),
            guess_was_wrong: false,
            ..self.clone()
        }
    }

    /// Submitted guess did not match; the round stays the same
    pub fn rejected(&self) -> Self {
        Self {
            user_guess: String::new(),
            guess_was_wrong: true,
            ..self.clone()
        }
    }

    /// Move on to the next word
    pub fn next_round(&self, scrambled_word: String, score: u32) -> Self {
        Self {
            scrambled_word,
            word_index: self.word_index + 1,
            user_guess: String::new(),
            score,
            guess_was_wrong: false,
            is_game_over: false,
        }
    }

    /// Last word resolved; the word index does not move
    pub fn finished(&self, score: u32) -> Self {
        Self {
            user_guess: String::new(),
            score,
            guess_was_wrong: false,
            is_game_over: true,
            ..self.clone()
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }
}

/// Commands a player can issue against the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    UpdateGuess(String),
    Submit,
    Skip,
    Reset,
}

/// End-of-session report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub session_id: Uuid,
    pub final_score: u32,
    pub max_score: u32,
    pub words_played: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
