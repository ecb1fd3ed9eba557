//! Word lists per difficulty
//!
//! A `WordSource` is the immutable difficulty → words table, built once at
//! startup either from the embedded lists or from a directory holding
//! `easy.txt`, `medium.txt` and `hard.txt`.

mod embedded;
pub mod loader;

pub use embedded::{EASY, HARD, MEDIUM};

use crate::core::{Difficulty, SecretWord};
use log::info;
use rand::Rng;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Startup failures while building the word table; all of them are fatal
#[derive(Debug)]
pub enum WordListError {
    MissingWordList {
        difficulty: Difficulty,
        path: PathBuf,
    },
    EmptyWordList(Difficulty),
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWordList { difficulty, path } => write!(
                f,
                "Missing word list for {difficulty}: {}",
                path.display()
            ),
            Self::EmptyWordList(difficulty) => {
                write!(f, "Word list for {difficulty} has no usable words")
            }
            Self::Io { path, source } => write!(f, "Failed to read {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Candidate words for every difficulty; every tier is non-empty
#[derive(Debug, Clone)]
pub struct WordSource {
    tiers: [Vec<SecretWord>; 3],
}

const fn tier_index(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}

impl WordSource {
    /// Build a source from explicit lists
    ///
    /// # Errors
    /// `EmptyWordList` if any tier has no words.
    pub fn new(
        easy: Vec<SecretWord>,
        medium: Vec<SecretWord>,
        hard: Vec<SecretWord>,
    ) -> Result<Self, WordListError> {
        let tiers = [easy, medium, hard];
        for difficulty in Difficulty::ALL {
            if tiers[tier_index(difficulty)].is_empty() {
                return Err(WordListError::EmptyWordList(difficulty));
            }
        }
        Ok(Self { tiers })
    }

    /// Word lists compiled into the binary
    ///
    /// # Errors
    /// `EmptyWordList` if a bundled list was built empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(EASY),
            loader::words_from_slice(MEDIUM),
            loader::words_from_slice(HARD),
        )
    }

    /// Read `<dir>/<difficulty>.txt` for every difficulty
    ///
    /// # Errors
    /// `MissingWordList` if a file does not exist, `Io` if it cannot be read,
    /// `EmptyWordList` if it yields no usable words.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, WordListError> {
        let dir = dir.as_ref();
        let mut tiers: [Vec<SecretWord>; 3] = Default::default();

        for difficulty in Difficulty::ALL {
            let path = dir.join(format!("{}.txt", difficulty.key()));
            let words = loader::load_from_file(&path).map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    WordListError::MissingWordList {
                        difficulty,
                        path: path.clone(),
                    }
                } else {
                    WordListError::Io {
                        path: path.clone(),
                        source,
                    }
                }
            })?;
            info!(
                "Loaded {} {} words from {}",
                words.len(),
                difficulty.key(),
                path.display()
            );
            tiers[tier_index(difficulty)] = words;
        }

        let [easy, medium, hard] = tiers;
        Self::new(easy, medium, hard)
    }

    /// Ordered candidate words for a tier
    #[must_use]
    pub fn load(&self, difficulty: Difficulty) -> &[SecretWord] {
        &self.tiers[tier_index(difficulty)]
    }

    /// Pick a word uniformly at random
    pub fn pick<R: Rng>(&self, difficulty: Difficulty, rng: &mut R) -> &SecretWord {
        let words = self.load(difficulty);
        &words[rng.random_range(0..words.len())]
    }

    /// Length of the longest word across all tiers
    #[must_use]
    pub fn longest_word(&self) -> usize {
        self.tiers
            .iter()
            .flatten()
            .map(SecretWord::len)
            .max()
            .unwrap_or(0)
    }
}
