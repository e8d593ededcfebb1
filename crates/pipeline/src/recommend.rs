//! Filtering and ranking of movie candidates.
//!
//! Given the loaded table and the session's accumulated preferences,
//! [`recommend`] narrows the rows down and ranks what is left:
//!
//! 1. Genre filter: score each row by how many requested genres it carries,
//!    drop rows scoring zero
//! 2. Star filter: keep rows whose stars field contains any requested name
//! 3. Rank by (genre_score desc, votes desc) when genres are active,
//!    else by votes desc alone; missing votes always rank last
//! 4. Truncate to the requested top-k

use data_loader::{Dataset, MovieRecord};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

/// One ranked result row.
///
/// `genre_score` is `Some` only when a genre filter was active for the
/// query that produced this row.
#[derive(Debug, Clone)]
pub struct RankedMovie {
    pub record: MovieRecord,
    pub genre_score: Option<u32>,
}

/// Filter and rank the dataset against the given preferences.
///
/// Both filters are optional. With neither active the result is simply the
/// globally most-voted `top_k` rows. An empty result is a normal value,
/// not an error — the caller decides how to phrase "nothing matched".
pub fn recommend(
    dataset: &Dataset,
    genres: &BTreeSet<String>,
    star_keywords: &BTreeSet<String>,
    top_k: usize,
) -> Vec<RankedMovie> {
    let genre_filter_active = !genres.is_empty();

    let mut candidates: Vec<RankedMovie> = dataset
        .records()
        .iter()
        .filter_map(|record| {
            let genre_score = if genre_filter_active {
                let score = genre_score(record, genres);
                if score == 0 {
                    return None;
                }
                Some(score)
            } else {
                None
            };

            if !star_keywords.is_empty() && !stars_match(record, star_keywords) {
                return None;
            }

            Some(RankedMovie {
                record: record.clone(),
                genre_score,
            })
        })
        .collect();

    debug!(
        "Recommender: {} of {} rows passed the filters",
        candidates.len(),
        dataset.len()
    );

    // Stable sort keeps file order for full ties
    candidates.sort_by(|a, b| {
        b.genre_score
            .cmp(&a.genre_score)
            .then_with(|| votes_descending(&a.record, &b.record))
    });

    candidates.truncate(top_k);
    candidates
}

/// Count how many of the requested genres this row carries
fn genre_score(record: &MovieRecord, genres: &BTreeSet<String>) -> u32 {
    let row_genres = record.genre_list();
    genres
        .iter()
        .filter(|g| row_genres.iter().any(|rg| rg == *g))
        .count() as u32
}

/// OR-match: does the stars field contain any requested name as a substring?
///
/// An empty stars field never matches.
fn stars_match(record: &MovieRecord, star_keywords: &BTreeSet<String>) -> bool {
    if record.stars.is_empty() {
        return false;
    }
    let stars_low = record.stars.to_lowercase();
    star_keywords.iter().any(|k| stars_low.contains(k.as_str()))
}

/// Order two rows by vote count, highest first, missing votes last
fn votes_descending(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    match (a.imdb_votes, b.imdb_votes) {
        (Some(va), Some(vb)) => vb.partial_cmp(&va).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
