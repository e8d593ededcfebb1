//! Pipeline for turning chat input into ranked movie recommendations.
//!
//! This crate provides:
//! - Vocabulary and PreferenceState for extracting preferences from text
//! - recommend() for filtering and ranking the dataset
//! - compose_blocks() for rendering results as chat text
//!
//! ## Architecture
//! A chat turn flows through three stages:
//! 1. The utterance is scanned against the dataset vocabularies and any
//!    hits are merged into the session's PreferenceState
//! 2. recommend() filters and ranks the table against those preferences
//! 3. compose_blocks() renders the ranked rows for display
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{PreferenceState, Vocabulary, recommend, compose_blocks};
//!
//! let vocabulary = Vocabulary::from_dataset(&dataset);
//! let mut prefs = PreferenceState::new();
//!
//! prefs.absorb_utterance("a comedy with tom hanks", &vocabulary);
//! let ranked = recommend(&dataset, prefs.genres(), prefs.stars(), 5);
//! println!("{}", compose_blocks(&ranked));
//! ```

pub mod preferences;
pub mod recommend;
pub mod compose;

// Re-export main types
pub use preferences::{PreferenceState, Vocabulary};
pub use recommend::{RankedMovie, recommend};
pub use compose::{build_llm_prompt, compose_blocks};
