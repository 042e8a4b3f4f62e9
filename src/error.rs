use thiserror::Error;

/// Faults the game engine can report.
///
/// Every player action is total; these only surface when the engine is built
/// from a bad vocabulary or rule set, or when a bounded retry loop runs out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("The vocabulary is empty")]
    EmptyVocabulary,
    #[error("Vocabulary holds {available} words but a game needs more than {required}")]
    VocabularyTooSmall { available: usize, required: usize },
    #[error("Invalid game rules: {0}")]
    InvalidRules(&'static str),
    #[error("No unused word found after {attempts} draws")]
    DrawExhausted { attempts: usize },
    #[error("Word '{0}' has fewer than two distinct letters and cannot be scrambled")]
    Unscramblable(String),
    #[error("Could not scramble '{word}' after {attempts} shuffles")]
    ScrambleExhausted { word: String, attempts: usize },
}
