//! Persisted leaderboard
//!
//! The ledger is an append-only CSV file with one row per finished session:
//! `player,score,difficulty,DD/MM/YYYY HH:MM:SS`, no header.

mod entry;

pub use entry::{LedgerEntry, TIMESTAMP_FORMAT};

use csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};
use log::{debug, warn};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum LedgerError {
    /// Nothing has been recorded yet; callers show an empty leaderboard
    MissingLedgerFile(PathBuf),
    Io { path: PathBuf, source: io::Error },
    /// The row could not be encoded or flushed
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLedgerFile(path) => {
                write!(f, "Score file {} does not exist", path.display())
            }
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Csv { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::MissingLedgerFile(_) => None,
        }
    }
}

/// Destination for finished sessions
pub trait ScoreSink {
    /// Record one finished session
    ///
    /// # Errors
    /// Returns `LedgerError` if the row cannot be persisted.
    fn record(&mut self, entry: &LedgerEntry) -> Result<(), LedgerError>;
}

/// In-memory sink, used by tests and dry runs
impl ScoreSink for Vec<LedgerEntry> {
    fn record(&mut self, entry: &LedgerEntry) -> Result<(), LedgerError> {
        self.push(entry.clone());
        Ok(())
    }
}

impl<T: ScoreSink + ?Sized> ScoreSink for &mut T {
    fn record(&mut self, entry: &LedgerEntry) -> Result<(), LedgerError> {
        (**self).record(entry)
    }
}

/// Order entries by descending score, keeping file order between ties
pub fn sort_by_score(entries: &mut [LedgerEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

/// CSV ledger on disk
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> LedgerError {
        LedgerError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> LedgerError {
        LedgerError::Csv {
            path: self.path.clone(),
            source,
        }
    }

    /// Read every row in file order
    ///
    /// Rows that fail to decode are skipped with a warning.
    ///
    /// # Errors
    /// `MissingLedgerFile` if the file does not exist, `Io` for other read failures.
    pub fn load(&self) -> Result<Vec<LedgerEntry>, LedgerError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LedgerError::MissingLedgerFile(self.path.clone())
            } else {
                self.io_error(e)
            }
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let entries = reader
            .deserialize::<LedgerEntry>()
            .filter_map(|record| match record {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("{}: skipping record: {e}", self.path.display());
                    None
                }
            })
            .collect();

        Ok(entries)
    }

    /// Read every row, highest score first
    ///
    /// # Errors
    /// Same as [`Ledger::load`].
    pub fn load_sorted(&self) -> Result<Vec<LedgerEntry>, LedgerError> {
        let mut entries = self.load()?;
        sort_by_score(&mut entries);
        Ok(entries)
    }
}

impl ScoreSink for Ledger {
    /// Append one row, creating the file (and its directory) when needed
    fn record(&mut self, entry: &LedgerEntry) -> Result<(), LedgerError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file);
        writer.serialize(entry).map_err(|e| self.csv_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;

        debug!(
            "Recorded {} ({}) in {}",
            entry.player,
            entry.score,
            self.path.display()
        );
        Ok(())
    }
}
