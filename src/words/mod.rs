//! Word lists and word detection
//!
//! Provides the dictionary membership test, the embedded word list compiled
//! into the binary, and the row/column scan that finds words on a grid.

mod detect;
mod dictionary;
mod embedded;
pub mod loader;

pub use detect::{MatchPolicy, find_words, word_score, words_from_highlights};
pub use dictionary::{Dictionary, MAX_WORD_LEN, MIN_WORD_LEN};
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // Lengths 3-5, lowercase
        for &word in WORDS {
            assert!(
                (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()),
                "Word '{word}' has bad length"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_sorted_and_unique() {
        for pair in WORDS.windows(2) {
            assert!(pair[0] < pair[1], "'{}' >= '{}'", pair[0], pair[1]);
        }
    }

    #[test]
    fn builtin_dictionary_has_common_words() {
        let dict = Dictionary::builtin();
        for word in ["cat", "cats", "tea", "word", "house"] {
            assert!(dict.contains(word), "'{word}' missing from builtin list");
        }
    }
}
