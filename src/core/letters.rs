//! Compact set of guessed letters
//!
//! Stores the letters a-z as bits of a `u32`, so the set is `Copy` and
//! snapshots of a session stay cheap.

use std::fmt;

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter - b'a'))
        } else {
            None
        }
    }

    /// Insert a letter; returns false if it was already present or is not a-z
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::new();
        assert!(set.is_empty());
        assert!(set.insert(b'q'));
        assert!(!set.insert(b'q'));
        assert!(set.contains(b'q'));
        assert!(!set.contains(b'r'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rejects_non_letters() {
        let mut set = LetterSet::new();
        assert!(!set.insert(b'A'));
        assert!(!set.insert(b'1'));
        assert!(!set.contains(b'A'));
        assert!(set.is_empty());
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), b"aberz".to_vec());
        assert_eq!(set.to_string(), "aberz");
    }

    #[test]
    fn superset_and_difference() {
        let word: LetterSet = b"cat".iter().copied().collect();
        let guessed: LetterSet = b"tacx".iter().copied().collect();
        assert!(guessed.is_superset(word));
        assert!(!word.is_superset(guessed));
        assert_eq!(guessed.difference(word).to_string(), "x");
        let alphabet: LetterSet = (b'a'..=b'z').collect();
        assert!(alphabet.is_superset(guessed));
        assert_eq!(alphabet.len(), 26);
    }
}
