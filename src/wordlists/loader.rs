//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::SecretWord;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Parse word list text, one word per line
///
/// Blank lines are ignored; entries that are not purely alphabetic are
/// skipped with a warning.
#[must_use]
pub fn parse_words(content: &str, origin: &str) -> Vec<SecretWord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match SecretWord::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("{origin}:{}: skipping '{trimmed}': {e}", index + 1);
                    None
                }
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/easy.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content, &path.display().to_string()))
}

/// Convert embedded string slice to word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::EASY;
///
/// let words = words_from_slice(EASY);
/// assert_eq!(words.len(), EASY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| SecretWord::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_trims_and_lowercases() {
        let words = parse_words("Cat\n  dog \n\nSUN\n", "test");
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, vec!["cat", "dog", "sun"]);
    }

    #[test]
    fn parse_words_skips_invalid_entries() {
        let words = parse_words("cat\nr2d2\nice cream\nowl\n", "test");
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, vec!["cat", "owl"]);
    }

    #[test]
    fn parse_words_handles_crlf() {
        let words = parse_words("cat\r\ndog\r\n", "test");
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["planet", "rhythm", "x-ray"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "planet");
        assert_eq!(words[1].text(), "rhythm");
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("hangman-loader-does-not-exist.txt");
        let err = load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
