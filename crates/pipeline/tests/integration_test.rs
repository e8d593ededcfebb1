//! Integration tests for the pipeline.
//!
//! These tests drive the full extract -> recommend -> compose flow over a
//! realistic multi-turn scenario.

use data_loader::{Dataset, MovieRecord};
use pipeline::{PreferenceState, Vocabulary, compose_blocks, recommend};

fn record(
    title: &str,
    genre: &str,
    stars: &str,
    year: Option<u16>,
    votes: Option<f64>,
) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        genre: genre.to_string(),
        synopsis: format!("Synopsis of {title}."),
        duration_min: Some(100),
        stars: stars.to_string(),
        year,
        imdb_votes: votes,
    }
}

fn create_test_dataset() -> Dataset {
    Dataset::from_records(vec![
        record(
            "Saving Private Ryan",
            "Drama, War",
            "Steven Spielberg, Tom Hanks",
            Some(1998),
            Some(1300000.0),
        ),
        record(
            "You've Got Mail",
            "Comedy, Drama, Romance",
            "Nora Ephron, Tom Hanks, Meg Ryan",
            Some(1998),
            Some(200000.0),
        ),
        record(
            "Mad Max: Fury Road",
            "Action, Adventure",
            "George Miller, Tom Hardy, Charlize Theron",
            Some(2015),
            Some(900000.0),
        ),
        record(
            "Obscure Short",
            "Comedy",
            "Nobody Known",
            None,
            None,
        ),
    ])
}

#[test]
fn test_multi_turn_preference_accumulation_narrows_results() {
    let dataset = create_test_dataset();
    let vocabulary = Vocabulary::from_dataset(&dataset);
    let mut prefs = PreferenceState::new();

    // Turn 1: genre only
    prefs.absorb_utterance("i'm in the mood for a comedy", &vocabulary);
    let recs = recommend(&dataset, prefs.genres(), prefs.stars(), 5);
    let titles: Vec<_> = recs.iter().map(|r| r.record.title.as_str()).collect();
    assert_eq!(titles, vec!["You've Got Mail", "Obscure Short"]);

    // Turn 2: a star narrows within the accumulated genre
    prefs.absorb_utterance("something with tom hanks maybe?", &vocabulary);
    let recs = recommend(&dataset, prefs.genres(), prefs.stars(), 5);
    let titles: Vec<_> = recs.iter().map(|r| r.record.title.as_str()).collect();
    assert_eq!(titles, vec!["You've Got Mail"]);
}

#[test]
fn test_unfiltered_query_returns_global_top_voted() {
    let dataset = create_test_dataset();
    let prefs = PreferenceState::new();

    let recs = recommend(&dataset, prefs.genres(), prefs.stars(), 2);
    let titles: Vec<_> = recs.iter().map(|r| r.record.title.as_str()).collect();
    assert_eq!(titles, vec!["Saving Private Ryan", "Mad Max: Fury Road"]);
}

#[test]
fn test_composed_output_follows_ranking_order() {
    let dataset = create_test_dataset();
    let vocabulary = Vocabulary::from_dataset(&dataset);
    let mut prefs = PreferenceState::new();

    prefs.absorb_utterance("comedy please", &vocabulary);
    let recs = recommend(&dataset, prefs.genres(), prefs.stars(), 5);
    let text = compose_blocks(&recs);

    let first = text.find("You've Got Mail").unwrap();
    let second = text.find("Obscure Short").unwrap();
    assert!(first < second);

    // The no-votes row renders placeholders and omits its votes line
    let obscure_block = text.split("\n\n").nth(1).unwrap();
    assert!(obscure_block.contains("(Unknown)"));
    assert!(!obscure_block.contains("IMDB Votes"));
}

#[test]
fn test_reset_returns_to_global_ranking() {
    let dataset = create_test_dataset();
    let vocabulary = Vocabulary::from_dataset(&dataset);
    let mut prefs = PreferenceState::new();

    prefs.absorb_utterance("action with tom hardy", &vocabulary);
    assert!(!prefs.is_empty());

    prefs.clear();
    let recs = recommend(&dataset, prefs.genres(), prefs.stars(), 4);
    assert_eq!(recs.len(), 4);
    assert_eq!(recs[0].record.title, "Saving Private Ryan");
}
