//! Player names

use std::fmt;

use super::GameError;

/// Names must be strictly longer than this many characters
pub const MIN_NAME_EXCLUSIVE: usize = 3;

/// A validated player name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Validate a player name
    ///
    /// # Errors
    /// Returns `GameError::InvalidPlayerName` if the name is empty or has
    /// three characters or fewer.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::PlayerName;
    ///
    /// assert!(PlayerName::new("Bobby").is_ok());
    /// assert!(PlayerName::new("Bob").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, GameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::InvalidPlayerName(
                "Player name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() <= MIN_NAME_EXCLUSIVE {
            return Err(GameError::InvalidPlayerName(format!(
                "Player name must be longer than {MIN_NAME_EXCLUSIVE} characters"
            )));
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
