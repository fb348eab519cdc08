//! Dictionary membership
//!
//! The engine's only coupling to a word list is this membership test:
//! lower-cased entries of at least three letters, hashed for constant-time
//! lookup on the detection hot path.

use crate::core::GRID_SIZE;
use rustc_hash::FxHashSet;

/// Shortest letter run that can count as a word
pub const MIN_WORD_LEN: usize = 3;

/// Longest run a line can hold, so longer entries are dead weight
pub const MAX_WORD_LEN: usize = GRID_SIZE;

/// A fixed word set with case-insensitive membership
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<Box<str>>,
}

impl Dictionary {
    /// Build a dictionary from any word iterator
    ///
    /// Entries are trimmed and lower-cased. Entries outside the
    /// [`MIN_WORD_LEN`]..=[`MAX_WORD_LEN`] range or containing
    /// non-ASCII-alphabetic characters are skipped rather than rejected,
    /// so messy master lists still load.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                if word.len() < MIN_WORD_LEN
                    || word.len() > MAX_WORD_LEN
                    || !word.bytes().all(|b| b.is_ascii_alphabetic())
                {
                    None
                } else {
                    Some(word.to_ascii_lowercase().into_boxed_str())
                }
            })
            .collect();

        Self { words }
    }

    /// The word list compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use queuedle_solver::words::Dictionary;
    ///
    /// let dict = Dictionary::builtin();
    /// assert!(dict.contains("cat"));
    /// assert!(!dict.contains("zzzzz"));
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(super::WORDS.iter().copied())
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_ascii_lowercase().as_str())
    }

    /// Membership for a run of lower-case letters, without allocating
    ///
    /// Grid lines are already stored lower-case, so the detector probes
    /// through this.
    #[inline]
    pub(crate) fn contains_run(&self, letters: &[u8]) -> bool {
        std::str::from_utf8(letters).is_ok_and(|s| self.words.contains(s))
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
