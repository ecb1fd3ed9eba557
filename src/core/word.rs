//! Secret word representation
//!
//! A `SecretWord` stores the target word along with letter position indices
//! for occurrence counting and masking.

use rustc_hash::FxHashMap;
use std::fmt;

use super::LetterSet;

/// The word a session is trying to uncover
///
/// Stores the word as bytes and maintains a map of letter positions for duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Banana").unwrap();
    /// assert_eq!(word.text(), "banana");
    /// assert_eq!(word.occurrences(b'a'), 3);
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in text.as_bytes().iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position, if in range
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.text.as_bytes().get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// How many times a letter appears in the word
    #[inline]
    #[must_use]
    pub fn occurrences(&self, letter: u8) -> usize {
        self.positions_of(letter).len()
    }

    /// The set of distinct letters in the word
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.char_positions.keys().copied().collect()
    }

    /// True when every letter of the word is in `guessed`
    #[must_use]
    pub fn is_revealed_by(&self, guessed: LetterSet) -> bool {
        guessed.is_superset(self.letters())
    }

    /// Word with unguessed letters replaced by `None`
    #[must_use]
    pub fn mask(&self, guessed: LetterSet) -> Vec<Option<char>> {
        self.text
            .bytes()
            .map(|b| guessed.contains(b).then_some(char::from(b)))
            .collect()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_lowercases() {
        let word = SecretWord::new("CaT").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("café"), Err(WordError::NonAscii));
        assert_eq!(SecretWord::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("c4t"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("letter").unwrap();
        assert_eq!(word.positions_of(b't'), &[2, 3]);
        assert_eq!(word.positions_of(b'e'), &[1, 4]);
        assert_eq!(word.positions_of(b'z'), &[]);
        assert_eq!(word.occurrences(b't'), 2);
        assert_eq!(word.occurrences(b'z'), 0);
    }

    #[test]
    fn word_letter_at() {
        let word = SecretWord::new("dog").unwrap();
        assert_eq!(word.letter_at(0), Some(b'd'));
        assert_eq!(word.letter_at(2), Some(b'g'));
        assert_eq!(word.letter_at(3), None);
    }

    #[test]
    fn word_distinct_letters() {
        let word = SecretWord::new("banana").unwrap();
        let letters = word.letters();
        assert_eq!(letters.len(), 3);
        assert!(letters.contains(b'b'));
        assert!(letters.contains(b'n'));
        assert!(letters.contains(b'a'));
    }

    #[test]
    fn word_mask_and_reveal() {
        let word = SecretWord::new("banana").unwrap();
        let mut guessed = LetterSet::new();
        guessed.insert(b'a');

        assert_eq!(
            word.mask(guessed),
            vec![None, Some('a'), None, Some('a'), None, Some('a')]
        );
        assert!(!word.is_revealed_by(guessed));

        guessed.insert(b'b');
        guessed.insert(b'n');
        guessed.insert(b'z');
        assert!(word.is_revealed_by(guessed));
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("frog").unwrap();
        assert_eq!(format!("{word}"), "frog");
    }
}
