use crate::error::EngineError;

/// Rounds in one session
pub const DEFAULT_ROUND_LIMIT: usize = 10;
/// Points for each correctly unscrambled word
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Round and scoring policy for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub round_limit: usize,
    pub score_increase: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            round_limit: DEFAULT_ROUND_LIMIT,
            score_increase: DEFAULT_SCORE_INCREASE,
        }
    }
}

impl GameRules {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.round_limit == 0 {
            return Err(EngineError::InvalidRules("round limit must be at least 1"));
        }
        if self.score_increase == 0 {
            return Err(EngineError::InvalidRules("score increase must be at least 1"));
        }
        Ok(())
    }
}

pub struct Scorer {
    increment: u32,
}

impl Scorer {
    pub fn new(rules: &GameRules) -> Self {
        Self {
            increment: rules.score_increase,
        }
    }

    /// Score after one more correct guess
    pub fn award(&self, score: u32) -> u32 {
        score.saturating_add(self.increment)
    }

    /// Best possible score over `rounds` words
    pub fn max_score(&self, rounds: usize) -> u32 {
        u32::try_from(rounds)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.increment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = GameRules::default();
        assert_eq!(rules.round_limit, 10);
        assert_eq!(rules.score_increase, 20);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_invalid_rules() {
        let rules = GameRules {
            round_limit: 0,
            ..GameRules::default()
        };
        assert!(matches!(rules.validate(), Err(EngineError::InvalidRules(_))));

        let rules = GameRules {
            score_increase: 0,
            ..GameRules::default()
        };
        assert!(matches!(rules.validate(), Err(EngineError::InvalidRules(_))));
    }

    #[test]
    fn test_award() {
        let scorer = Scorer::new(&GameRules::default());
        assert_eq!(scorer.award(0), 20);
        assert_eq!(scorer.award(180), 200);
        assert_eq!(scorer.award(u32::MAX - 5), u32::MAX);
    }

    #[test]
    fn test_max_score() {
        let scorer = Scorer::new(&GameRules::default());
        assert_eq!(scorer.max_score(10), 200);
        assert_eq!(scorer.max_score(0), 0);
    }
}
