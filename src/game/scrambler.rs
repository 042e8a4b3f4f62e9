use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::EngineError;
use crate::utils::letters::{distinct_letters, eq_ignore_case};

/// Shuffles allowed before a scramble is reported as failed
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 100;

pub struct Scrambler;

impl Scrambler {
    /// Shuffle the letters of `word` until the result differs from it (ignoring case).
    ///
    /// Words with fewer than two distinct letters can never differ from their
    /// shuffles and are rejected up front.
    pub fn scramble(word: &str, rng: &mut impl Rng) -> Result<String, EngineError> {
        if distinct_letters(word) < 2 {
            return Err(EngineError::Unscramblable(word.to_string()));
        }

        let mut letters: Vec<char> = word.chars().collect();
        for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
            letters.shuffle(rng);
            let candidate: String = letters.iter().collect();
            if !eq_ignore_case(&candidate, word) {
                return Ok(candidate);
            }
        }

        Err(EngineError::ScrambleExhausted {
            word: word.to_string(),
            attempts: MAX_SCRAMBLE_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DEFAULT_WORDS;
    use crate::utils::letters::same_letters;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scramble_is_a_different_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for word in DEFAULT_WORDS {
            for _ in 0..10 {
                let scrambled = Scrambler::scramble(word, &mut rng).unwrap();
                assert!(same_letters(&scrambled, word), "{} is not a permutation of {}", scrambled, word);
                assert!(!eq_ignore_case(&scrambled, word), "{} was not scrambled", word);
            }
        }
    }

    #[test]
    fn test_scramble_two_letter_word() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(Scrambler::scramble("ab", &mut rng).unwrap(), "ba");
        }
    }

    #[test]
    fn test_scramble_ignores_case_when_comparing() {
        // "Ba" shuffled to "aB" is the only acceptable output; "Ba" itself is rejected
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            assert_eq!(Scrambler::scramble("Ba", &mut rng).unwrap(), "aB");
        }
    }

    #[test]
    fn test_scramble_single_letter_words_fail_fast() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Scrambler::scramble("aaa", &mut rng),
            Err(EngineError::Unscramblable("aaa".to_string()))
        );
        assert_eq!(
            Scrambler::scramble("aA", &mut rng),
            Err(EngineError::Unscramblable("aA".to_string()))
        );
        assert!(Scrambler::scramble("", &mut rng).is_err());
    }

    #[test]
    fn test_scramble_is_deterministic_for_a_seed() {
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        for word in ["keyboard", "umbrella", "mountain"] {
            assert_eq!(
                Scrambler::scramble(word, &mut first).unwrap(),
                Scrambler::scramble(word, &mut second).unwrap()
            );
        }
    }
}
