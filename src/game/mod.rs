// Game engine modules

pub mod engine;
pub mod scorer;
pub mod scrambler;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::WordGameEngine;
pub use scorer::{GameRules, Scorer};
pub use scrambler::Scrambler;
pub use validator::WordValidator;
