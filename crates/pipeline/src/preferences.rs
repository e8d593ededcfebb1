//! Preference extraction from free-text chat input.
//!
//! This module provides utilities to infer what the user wants from what
//! they typed: known genre and star names are spotted as substrings of the
//! lowercased utterance and accumulated into a session-scoped
//! [`PreferenceState`].
//!
//! ## Learning Note
//! This demonstrates the "context builder" pattern in Rust:
//! - Derive the vocabularies once upfront from the dataset
//! - Avoid re-scanning the whole table on every chat turn
//! - Use BTreeSet for deduplicated, sorted, deterministic iteration

use data_loader::Dataset;
use std::collections::BTreeSet;
use tracing::debug;

/// The known genre and star tokens, derived from the dataset.
///
/// Built once per session; both sets iterate in sorted order, so the order
/// in which preferences are discovered is deterministic from run to run.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    genres: BTreeSet<String>,
    stars: BTreeSet<String>,
}

impl Vocabulary {
    /// Derive both vocabularies from the dataset's comma-separated fields
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let vocab = Self {
            genres: dataset.genre_vocabulary(),
            stars: dataset.star_vocabulary(),
        };
        debug!(
            "Built vocabulary: {} genres, {} stars",
            vocab.genres.len(),
            vocab.stars.len()
        );
        vocab
    }

    pub fn genres(&self) -> &BTreeSet<String> {
        &self.genres
    }

    pub fn stars(&self) -> &BTreeSet<String> {
        &self.stars
    }
}

/// Accumulated session preferences: which genres and which actors/directors
/// the user has mentioned so far.
///
/// Grows monotonically by union as utterances are processed; nothing is
/// ever removed except by [`PreferenceState::clear`]. All entries are
/// lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceState {
    genres: BTreeSet<String>,
    stars: BTreeSet<String>,
}

impl PreferenceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one utterance for known genre and star tokens and merge any
    /// hits into the preference sets.
    ///
    /// Matching is plain case-insensitive substring containment. That is a
    /// known heuristic weakness (a short star surname can match an
    /// unrelated word), kept deliberately: it is how this recommender
    /// understands its users, not a bug to fix here.
    ///
    /// Idempotent: absorbing the same utterance twice yields the same sets.
    pub fn absorb_utterance(&mut self, utterance: &str, vocabulary: &Vocabulary) {
        let low = utterance.to_lowercase();

        for genre in vocabulary.genres() {
            if low.contains(genre.as_str()) && !self.genres.contains(genre) {
                debug!("Detected genre preference: {genre}");
                self.genres.insert(genre.clone());
            }
        }

        for star in vocabulary.stars() {
            if low.contains(star.as_str()) && !self.stars.contains(star) {
                debug!("Detected star preference: {star}");
                self.stars.insert(star.clone());
            }
        }
    }

    /// Drop everything. The only removal path there is.
    pub fn clear(&mut self) {
        self.genres.clear();
        self.stars.clear();
    }

    pub fn genres(&self) -> &BTreeSet<String> {
        &self.genres
    }

    pub fn stars(&self) -> &BTreeSet<String> {
        &self.stars
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.stars.is_empty()
    }
}
