//! Core domain types for the movie dataset.
//!
//! This module defines the canonical record schema and the in-memory
//! `Dataset` table. Key Rust concepts demonstrated here:
//! - `Option<T>` for fields that may be missing in the raw data
//! - Structs with public fields
//! - BTreeSet for deduplicated, deterministically ordered vocabularies
//! - Borrowing: accessor methods return references into owned data

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One movie, in the canonical schema.
///
/// The raw CSV carries columns `MOVIES, GENRE, ONE-LINE, RunTime, STARS,
/// YEAR, VOTES`; the loader renames them to the fields below. Numeric
/// fields are `None` whenever the raw text contains no parseable number —
/// downstream code treats `None` as "rank lowest" and renders a
/// placeholder instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Comma-separated genre list, kept verbatim for display.
    /// Use [`MovieRecord::genre_list`] for the normalized form.
    pub genre: String,
    pub synopsis: String,
    /// Runtime in minutes, extracted as the first digit run in the raw text
    pub duration_min: Option<u32>,
    /// Comma-separated actor/director names, kept verbatim for display
    pub stars: String,
    /// Release year, the first 4-digit number in the raw text
    /// (handles ranges like "(2018-2020)")
    pub year: Option<u16>,
    pub imdb_votes: Option<f64>,
}

impl MovieRecord {
    /// Normalized genre tokens: split on comma, trim, lowercase, drop empties.
    ///
    /// "Animation, Action, Adventure" -> ["animation", "action", "adventure"]
    pub fn genre_list(&self) -> Vec<String> {
        split_normalized(&self.genre)
    }

    /// Normalized star/director tokens, same treatment as [`genre_list`].
    ///
    /// [`genre_list`]: MovieRecord::genre_list
    pub fn star_list(&self) -> Vec<String> {
        split_normalized(&self.stars)
    }
}

/// Split a comma-separated field into trimmed, lowercased, non-empty tokens
pub(crate) fn split_normalized(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The in-memory movie table.
///
/// Loaded once at startup and shared immutably for the rest of the process
/// (callers wrap it in an `Arc`). Row order is the file order; nothing
/// mutates the table after load, so no locking is ever needed.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MovieRecord>,
}

impl Dataset {
    /// Build a Dataset from already-parsed records (used by the loader
    /// and by tests that construct fixtures by hand).
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// All records, in file order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every distinct genre token across the whole table.
    ///
    /// BTreeSet gives sorted iteration order, which keeps preference
    /// extraction deterministic from run to run.
    pub fn genre_vocabulary(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|r| r.genre_list())
            .collect()
    }

    /// Every distinct actor/director token across the whole table,
    /// sorted and deduplicated like [`genre_vocabulary`].
    ///
    /// [`genre_vocabulary`]: Dataset::genre_vocabulary
    pub fn star_vocabulary(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|r| r.star_list())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, genre: &str, stars: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            synopsis: String::new(),
            duration_min: None,
            stars: stars.to_string(),
            year: None,
            imdb_votes: None,
        }
    }

    #[test]
    fn test_genre_list_normalizes() {
        let r = record("X", "Animation, Action , Adventure", "");
        assert_eq!(r.genre_list(), vec!["animation", "action", "adventure"]);
    }

    #[test]
    fn test_genre_list_drops_empty_tokens() {
        let r = record("X", "Drama,, ,Comedy", "");
        assert_eq!(r.genre_list(), vec!["drama", "comedy"]);
    }

    #[test]
    fn test_vocabulary_dedupes_across_records() {
        let dataset = Dataset::from_records(vec![
            record("A", "Action, Drama", "Tom Hanks, Meg Ryan"),
            record("B", "Drama, Comedy", "Tom Hanks"),
        ]);

        let genres: Vec<_> = dataset.genre_vocabulary().into_iter().collect();
        assert_eq!(genres, vec!["action", "comedy", "drama"]);

        let stars: Vec<_> = dataset.star_vocabulary().into_iter().collect();
        assert_eq!(stars, vec!["meg ryan", "tom hanks"]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.genre_vocabulary().is_empty());
        assert!(dataset.star_vocabulary().is_empty());
    }
}
