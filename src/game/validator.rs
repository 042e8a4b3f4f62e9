use crate::utils::letters::{eq_ignore_case, same_letters};

pub struct WordValidator;

impl WordValidator {
    /// Check a guess against the target word, ignoring case
    pub fn is_correct(guess: &str, target: &str) -> bool {
        eq_ignore_case(guess, target)
    }

    /// Check that `scrambled` rearranges the letters of `target` without spelling it
    pub fn is_scramble_of(scrambled: &str, target: &str) -> bool {
        same_letters(scrambled, target) && !eq_ignore_case(scrambled, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_correct_ignores_case() {
        assert!(WordValidator::is_correct("apple", "apple"));
        assert!(WordValidator::is_correct("APPLE", "apple"));
        assert!(WordValidator::is_correct("ApPlE", "apple"));
    }

    #[test]
    fn test_is_correct_rejects_other_input() {
        assert!(!WordValidator::is_correct("", "apple"));
        assert!(!WordValidator::is_correct("ppeal", "apple"));
        assert!(!WordValidator::is_correct(" apple", "apple"));
        assert!(!WordValidator::is_correct("apples", "apple"));
    }

    #[test]
    fn test_is_scramble_of() {
        assert!(WordValidator::is_scramble_of("ppeal", "apple"));
        assert!(!WordValidator::is_scramble_of("Apple", "apple"));
        assert!(!WordValidator::is_scramble_of("ppea", "apple"));
    }
}
