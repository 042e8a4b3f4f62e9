pub mod game;

pub use game::{GameCommand, GamePhase, GameState, GameSummary};
