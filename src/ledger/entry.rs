//! One leaderboard row

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Timestamp layout used in the ledger file
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A completed (won or lost) session
///
/// Serialized as one headerless CSV record in field order:
/// player, score, difficulty label, timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub player: String,
    pub score: i64,
    #[serde(with = "difficulty_label")]
    pub difficulty: Difficulty,
    #[serde(with = "timestamp")]
    pub completed_at: NaiveDateTime,
}

impl LedgerEntry {
    /// Format the completion time as stored on disk
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.completed_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// `Easy` / `Medium` / `Hard` on disk, parsed case-insensitively
mod difficulty_label {
    use crate::core::Difficulty;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(difficulty: &Difficulty, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(difficulty.label())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Difficulty, D::Error> {
        let raw = String::deserialize(d)?;
        raw.parse().map_err(de::Error::custom)
    }
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(at: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&at.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn write_row(entry: &LedgerEntry) -> String {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.serialize(entry).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    fn read_row(line: &str) -> Result<LedgerEntry, csv::Error> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes())
            .deserialize()
            .next()
            .unwrap()
    }

    #[test]
    fn serializes_in_ledger_layout() {
        let entry = LedgerEntry {
            player: "Alice".to_string(),
            score: -47,
            difficulty: Difficulty::Medium,
            completed_at: at(8, 5, 3),
        };
        assert_eq!(write_row(&entry), "Alice,-47,Medium,09/03/2024 08:05:03\n");
    }

    #[test]
    fn deserializes_valid_row() {
        let entry = read_row("Bobby,200,hard,09/03/2024 23:59:59\n").unwrap();
        assert_eq!(entry.player, "Bobby");
        assert_eq!(entry.score, 200);
        assert_eq!(entry.difficulty, Difficulty::Hard);
        assert_eq!(entry.completed_at, at(23, 59, 59));
    }

    #[test]
    fn rejects_bad_rows() {
        assert!(read_row("Bobby,200,09/03/2024 23:59:59\n").is_err());
        assert!(read_row("Bobby,,Easy,09/03/2024 23:59:59\n").is_err());
        assert!(read_row("Bobby,5,Insane,09/03/2024 23:59:59\n").is_err());
        assert!(read_row("Bobby,5,Easy,2024-03-09\n").is_err());
    }
}
