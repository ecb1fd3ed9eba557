//! Session state and its transitions
//!
//! A `Session` is one play-through: a fixed secret word, the letters guessed so
//! far, the wrong-guess and hint counters and a running score. It performs no
//! I/O; recording finished games is left to `game::GameEngine`.

use super::{Difficulty, GameError, LetterSet, PlayerName, ScoringPolicy, SecretWord};

/// Hints granted at the start of every session
pub const DEFAULT_HINTS: u8 = 3;

/// Number of gallows illustrations; a session is lost on the last one
pub const DEFAULT_STAGE_COUNT: usize = 11;

/// Fewest stages that still allow one wrong guess before the loss
pub const MIN_STAGE_COUNT: usize = 2;

/// Tunables shared by every session an engine starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    stage_count: usize,
    hints: u8,
    scoring: ScoringPolicy,
}

impl SessionConfig {
    /// Validated configuration; `hints` is capped at [`DEFAULT_HINTS`]
    ///
    /// # Errors
    /// `InvalidStageCount` if `stage_count` is below [`MIN_STAGE_COUNT`].
    pub fn new(stage_count: usize, hints: u8, scoring: ScoringPolicy) -> Result<Self, GameError> {
        if stage_count < MIN_STAGE_COUNT {
            return Err(GameError::InvalidStageCount(stage_count));
        }
        Ok(Self {
            stage_count,
            hints: hints.min(DEFAULT_HINTS),
            scoring,
        })
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub const fn stage_count(&self) -> usize {
        self.stage_count
    }

    #[must_use]
    pub const fn hints(&self) -> u8 {
        self.hints
    }

    #[must_use]
    pub const fn scoring(&self) -> ScoringPolicy {
        self.scoring
    }

    /// Wrong guesses that end the game
    #[must_use]
    pub const fn max_wrong(&self) -> usize {
        self.stage_count - 1
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stage_count: DEFAULT_STAGE_COUNT,
            hints: DEFAULT_HINTS,
            scoring: ScoringPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Mutable progress of one play-through
#[derive(Debug, Clone)]
pub struct Session {
    player: PlayerName,
    difficulty: Difficulty,
    word: SecretWord,
    guessed: LetterSet,
    wrong: usize,
    hints: u8,
    score: i64,
    config: SessionConfig,
}

/// Read-only view of a session after a transition
///
/// The answer is only disclosed once the session is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub player: String,
    pub difficulty: Difficulty,
    pub mask: Vec<Option<char>>,
    pub guessed: LetterSet,
    pub wrong_letters: LetterSet,
    pub wrong: usize,
    pub max_wrong: usize,
    pub hints_left: u8,
    pub score: i64,
    pub status: Status,
    pub answer: Option<String>,
}

impl Snapshot {
    /// Word as displayed, with `_` for hidden letters
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.mask
            .iter()
            .map(|slot| slot.unwrap_or('_'))
            .collect()
    }

    /// Positions still hidden
    pub fn hidden_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
    }
}

/// Normalize a typed character to a lowercase ASCII letter
fn normalize(letter: char) -> Result<u8, GameError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_lowercase() as u8)
    } else {
        Err(GameError::InvalidLetter(letter))
    }
}

impl Session {
    #[must_use]
    pub fn new(
        player: PlayerName,
        difficulty: Difficulty,
        word: SecretWord,
        config: SessionConfig,
    ) -> Self {
        Self {
            player,
            difficulty,
            word,
            guessed: LetterSet::new(),
            wrong: 0,
            hints: config.hints,
            score: 0,
            config,
        }
    }

    #[must_use]
    pub fn player(&self) -> &PlayerName {
        &self.player
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub const fn wrong(&self) -> usize {
        self.wrong
    }

    #[must_use]
    pub const fn hints_left(&self) -> u8 {
        self.hints
    }

    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.word.is_revealed_by(self.guessed) {
            Status::Won
        } else if self.wrong >= self.config.max_wrong() {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status().is_terminal() {
            Err(GameError::SessionOver)
        } else {
            Ok(())
        }
    }

    /// Guess a letter
    ///
    /// Guessing a letter twice leaves the session untouched and reports the
    /// current status again.
    ///
    /// # Errors
    /// `InvalidLetter` for non-alphabetic input, `SessionOver` once won or lost.
    pub fn guess(&mut self, letter: char) -> Result<Status, GameError> {
        self.ensure_in_progress()?;
        let letter = normalize(letter)?;

        if !self.guessed.insert(letter) {
            return Ok(self.status());
        }

        let occurrences = self.word.occurrences(letter);
        if occurrences > 0 {
            self.score += self.config.scoring.correct(occurrences);
        } else {
            self.wrong += 1;
            self.score += self.config.scoring.wrong();
        }

        Ok(self.status())
    }

    /// Spend a hint to uncover `letter`
    ///
    /// # Errors
    /// `NoHintsRemaining` when the allotment is spent, `InvalidHint` if the
    /// letter is not hidden in the word, `InvalidLetter`, `SessionOver`. The
    /// session is not modified on error.
    pub fn hint(&mut self, letter: char) -> Result<Status, GameError> {
        self.ensure_in_progress()?;
        if self.hints == 0 {
            return Err(GameError::NoHintsRemaining);
        }

        let byte = normalize(letter)?;
        if !self.word.has_letter(byte) || self.guessed.contains(byte) {
            return Err(GameError::InvalidHint(letter));
        }

        self.hints -= 1;
        self.guessed.insert(byte);
        self.score += self.config.scoring.hint();

        Ok(self.status())
    }

    /// Spend a hint on the letter at `position` of the word
    ///
    /// # Errors
    /// Same as [`Session::hint`], plus `InvalidPosition` for an index past the end.
    pub fn reveal(&mut self, position: usize) -> Result<Status, GameError> {
        self.ensure_in_progress()?;
        if self.hints == 0 {
            return Err(GameError::NoHintsRemaining);
        }

        let letter = self
            .word
            .letter_at(position)
            .ok_or(GameError::InvalidPosition(position))?;
        self.hint(char::from(letter))
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let status = self.status();
        Snapshot {
            player: self.player.to_string(),
            difficulty: self.difficulty,
            mask: self.word.mask(self.guessed),
            guessed: self.guessed,
            wrong_letters: self.guessed.difference(self.word.letters()),
            wrong: self.wrong,
            max_wrong: self.config.max_wrong(),
            hints_left: self.hints,
            score: self.score,
            status,
            answer: status
                .is_terminal()
                .then(|| self.word.text().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word: &str) -> Session {
        session_with(word, SessionConfig::default())
    }

    fn session_with(word: &str, config: SessionConfig) -> Session {
        Session::new(
            PlayerName::new("Alice").unwrap(),
            Difficulty::Easy,
            SecretWord::new(word).unwrap(),
            config,
        )
    }

    #[test]
    fn new_session_starts_clean() {
        let s = session("cat");
        assert!(s.guessed().is_empty());
        assert_eq!(s.wrong(), 0);
        assert_eq!(s.hints_left(), 3);
        assert_eq!(s.score(), 0);
        assert_eq!(s.status(), Status::InProgress);
    }

    #[test]
    fn correct_guess_scores_occurrences() {
        let mut s = session("banana");
        assert_eq!(s.guess('a').unwrap(), Status::InProgress);
        assert_eq!(s.score(), 3);
        assert_eq!(s.wrong(), 0);
    }

    #[test]
    fn wrong_guess_increments_wrong_count() {
        let mut s = session("cat");
        s.guess('z').unwrap();
        assert_eq!(s.wrong(), 1);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let mut s = session("cat");
        s.guess('C').unwrap();
        assert!(s.guessed().contains(b'c'));
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn repeated_guess_is_a_no_op() {
        let mut s = session("cat");
        s.guess('z').unwrap();
        s.guess('c').unwrap();
        let before = s.snapshot();

        assert_eq!(s.guess('z').unwrap(), Status::InProgress);
        assert_eq!(s.guess('c').unwrap(), Status::InProgress);
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn non_letter_guess_is_rejected() {
        let mut s = session("cat");
        assert!(matches!(s.guess('3'), Err(GameError::InvalidLetter('3'))));
        assert!(s.guessed().is_empty());
    }

    #[test]
    fn wrong_count_matches_wrong_letters() {
        let mut s = session("cat");
        for letter in ['x', 'c', 'y', 'x', 'a', 'q'] {
            s.guess(letter).unwrap();
            let snap = s.snapshot();
            assert_eq!(snap.wrong, snap.wrong_letters.len());
        }
        assert_eq!(s.wrong(), 3);
    }

    #[test]
    fn win_when_all_letters_guessed() {
        let mut s = session("cat");
        assert_eq!(s.guess('c').unwrap(), Status::InProgress);
        assert_eq!(s.guess('a').unwrap(), Status::InProgress);
        assert_eq!(s.guess('t').unwrap(), Status::Won);
        assert_eq!(s.score(), 3);
        assert_eq!(s.snapshot().answer.as_deref(), Some("cat"));
    }

    #[test]
    fn loss_on_last_stage() {
        let mut s = session("cat");
        let wrong_letters = "bdefghijkl";
        for (i, letter) in wrong_letters.chars().enumerate() {
            let status = s.guess(letter).unwrap();
            if i + 1 < DEFAULT_STAGE_COUNT - 1 {
                assert_eq!(status, Status::InProgress);
            } else {
                assert_eq!(status, Status::Lost);
            }
        }
        assert_eq!(s.wrong(), 10);
        assert!(matches!(s.guess('c'), Err(GameError::SessionOver)));
    }

    #[test]
    fn loss_threshold_follows_stage_count() {
        let config = SessionConfig::new(3, DEFAULT_HINTS, ScoringPolicy::default()).unwrap();
        let mut s = session_with("cat", config);
        assert_eq!(s.guess('x').unwrap(), Status::InProgress);
        assert_eq!(s.guess('y').unwrap(), Status::Lost);
    }

    #[test]
    fn config_rejects_degenerate_stage_counts() {
        for stages in [0, 1] {
            assert!(matches!(
                SessionConfig::new(stages, DEFAULT_HINTS, ScoringPolicy::default()),
                Err(GameError::InvalidStageCount(n)) if n == stages
            ));
        }

        let config = SessionConfig::new(MIN_STAGE_COUNT, DEFAULT_HINTS, ScoringPolicy::default())
            .unwrap();
        let mut s = session_with("cat", config);
        assert_eq!(s.status(), Status::InProgress);
        assert_eq!(s.guess('z').unwrap(), Status::Lost);
    }

    #[test]
    fn config_caps_hints() {
        let config = SessionConfig::new(DEFAULT_STAGE_COUNT, 9, ScoringPolicy::default()).unwrap();
        assert_eq!(config.hints(), DEFAULT_HINTS);
        assert_eq!(session_with("cat", config).hints_left(), DEFAULT_HINTS);
    }

    #[test]
    fn hint_uncovers_letter_and_costs_points() {
        let mut s = session("banana");
        assert_eq!(s.hint('n').unwrap(), Status::InProgress);
        assert_eq!(s.hints_left(), 2);
        assert_eq!(s.score(), -50);
        assert!(s.guessed().contains(b'n'));
        assert_eq!(s.wrong(), 0);
    }

    #[test]
    fn hint_can_win() {
        let mut s = session("cat");
        s.guess('c').unwrap();
        s.guess('a').unwrap();
        assert_eq!(s.hint('t').unwrap(), Status::Won);
    }

    #[test]
    fn hint_without_allotment_changes_nothing() {
        let mut s = session("alphabet");
        s.hint('l').unwrap();
        s.hint('p').unwrap();
        s.hint('h').unwrap();
        let before = s.snapshot();

        assert!(matches!(s.hint('b'), Err(GameError::NoHintsRemaining)));
        assert!(matches!(s.reveal(0), Err(GameError::NoHintsRemaining)));
        assert_eq!(s.snapshot(), before);
        assert_eq!(before.hints_left, 0);
    }

    #[test]
    fn hint_for_absent_or_known_letter_is_rejected() {
        let mut s = session("cat");
        s.guess('c').unwrap();
        assert!(matches!(s.hint('z'), Err(GameError::InvalidHint('z'))));
        assert!(matches!(s.hint('c'), Err(GameError::InvalidHint('c'))));
        assert_eq!(s.hints_left(), 3);
        assert_eq!(s.wrong(), 0);
    }

    #[test]
    fn reveal_by_position() {
        let mut s = session("dog");
        assert_eq!(s.reveal(1).unwrap(), Status::InProgress);
        assert!(s.guessed().contains(b'o'));
        assert!(matches!(s.reveal(1), Err(GameError::InvalidHint('o'))));
        assert!(matches!(s.reveal(7), Err(GameError::InvalidPosition(7))));
    }

    #[test]
    fn classic_scoring() {
        let config = SessionConfig::default().with_scoring(ScoringPolicy::Classic);
        let mut s = session_with("banana", config);
        s.guess('a').unwrap();
        s.guess('z').unwrap();
        s.hint('b').unwrap();
        assert_eq!(s.score(), 100 - 50 - 50);
    }

    #[test]
    fn snapshot_hides_answer_while_playing() {
        let mut s = session("frog");
        s.guess('o').unwrap();
        let snap = s.snapshot();
        assert_eq!(snap.masked_word(), "_o__");
        assert_eq!(snap.hidden_positions().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(snap.answer, None);
        assert_eq!(snap.max_wrong, 10);
    }
}
