//! # Data Loader Crate
//!
//! This crate handles loading the scraped IMDB movie CSV into memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Dataset) and vocabularies
//! - **parser**: Read the CSV, rename columns, coerce numeric fields
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! // Load the table once at startup
//! let dataset = Dataset::load_from_csv(Path::new("movies.csv"))?;
//!
//! println!("Loaded {} movies", dataset.len());
//! for genre in dataset.genre_vocabulary() {
//!     println!("known genre: {genre}");
//! }
//! ```
//!
//! The table is immutable after load. Callers wrap it in an `Arc` and pass
//! that handle into whatever needs it; there is no process-global cache.

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Dataset, MovieRecord};
