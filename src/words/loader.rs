//! Dictionary loading utilities
//!
//! Builds dictionaries from word list files or the embedded constant.

use super::dictionary::Dictionary;
use super::embedded::WORDS;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Blank lines and entries outside the three-to-five letter ASCII range
/// are skipped, so mixed-length master lists work as-is.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use queuedle_solver::words::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(content.lines()))
}

/// Build the dictionary from the embedded word list
///
/// # Examples
/// ```
/// use queuedle_solver::words::loader::embedded_dictionary;
///
/// let dictionary = embedded_dictionary();
/// assert!(dictionary.contains("cat"));
/// ```
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::from_words(WORDS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_matches_word_count() {
        let dictionary = embedded_dictionary();
        assert_eq!(dictionary.len(), WORDS.len());
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let dir = std::env::temp_dir().join("queuedle_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.txt");
        std::fs::write(&path, "cat\n\n  tea  \ntoolong\nab\nCATS\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("tea"));
        assert!(dictionary.contains("cats"));
        assert!(!dictionary.contains("toolong"));
        assert!(!dictionary.contains("ab"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let result = load_from_file("/nonexistent/queuedle/words.txt");
        assert!(result.is_err());
    }
}
