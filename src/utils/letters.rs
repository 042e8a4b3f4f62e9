use std::collections::HashMap;

/// Count each letter of a word, ignoring case
pub fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for ch in word.chars().flat_map(char::to_lowercase) {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Number of distinct letters in a word, ignoring case
pub fn distinct_letters(word: &str) -> usize {
    letter_counts(word).len()
}

/// True when both words use exactly the same letters the same number of times
pub fn same_letters(a: &str, b: &str) -> bool {
    letter_counts(a) == letter_counts(b)
}

/// Case-insensitive string equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
