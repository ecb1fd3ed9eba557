//! Score policies
//!
//! Two policies are supported. `LetterCount` is the running tally the game
//! keeps while playing: one point per uncovered letter and a flat penalty per
//! hint. `Classic` is the advertised rulebook: +100 per correct guess, -50 per
//! hint and -50 per wrong guess.

use std::fmt;
use std::str::FromStr;

/// Points removed for each hint, under either policy
pub const HINT_PENALTY: i64 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringPolicy {
    #[default]
    LetterCount,
    Classic,
}

impl ScoringPolicy {
    /// Score change for a correct guess of a letter appearing `occurrences` times
    #[must_use]
    pub const fn correct(self, occurrences: usize) -> i64 {
        match self {
            Self::LetterCount => occurrences as i64,
            Self::Classic => 100,
        }
    }

    /// Score change for a wrong guess
    #[must_use]
    pub const fn wrong(self) -> i64 {
        match self {
            Self::LetterCount => 0,
            Self::Classic => -50,
        }
    }

    /// Score change for a hint
    #[must_use]
    pub const fn hint(self) -> i64 {
        -HINT_PENALTY
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LetterCount => "letters",
            Self::Classic => "classic",
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "letters" | "letter-count" => Ok(Self::LetterCount),
            "classic" => Ok(Self::Classic),
            other => Err(format!(
                "Unknown scoring policy '{other}' (expected letters or classic)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_count_policy() {
        let policy = ScoringPolicy::LetterCount;
        assert_eq!(policy.correct(1), 1);
        assert_eq!(policy.correct(3), 3);
        assert_eq!(policy.wrong(), 0);
        assert_eq!(policy.hint(), -50);
    }

    #[test]
    fn classic_policy() {
        let policy = ScoringPolicy::Classic;
        assert_eq!(policy.correct(1), 100);
        assert_eq!(policy.correct(3), 100);
        assert_eq!(policy.wrong(), -50);
        assert_eq!(policy.hint(), -50);
    }

    #[test]
    fn parse_policy_names() {
        assert_eq!("letters".parse(), Ok(ScoringPolicy::LetterCount));
        assert_eq!("Classic".parse(), Ok(ScoringPolicy::Classic));
        assert!("generous".parse::<ScoringPolicy>().is_err());
        assert_eq!(ScoringPolicy::default(), ScoringPolicy::LetterCount);
    }
}
