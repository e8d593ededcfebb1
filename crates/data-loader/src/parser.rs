//! Parser for the raw movie CSV.
//!
//! The source file carries its original scraped column names
//! (`MOVIES, GENRE, ONE-LINE, RunTime, STARS, YEAR, VOTES`); this module
//! renames them into the canonical schema and coerces the numeric fields.
//!
//! Rust concepts you'll see here:
//! - serde field renaming to map ugly headers onto clean struct fields
//! - Lenient field parsing: bad numbers become `None`, not errors
//! - The `?` operator threading `Result` through the load path

use crate::error::{DataLoadError, Result};
use crate::types::{Dataset, MovieRecord};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// The raw column names we require in the header row
const REQUIRED_COLUMNS: [&str; 7] =
    ["MOVIES", "GENRE", "ONE-LINE", "RunTime", "STARS", "YEAR", "VOTES"];

/// One row exactly as it appears in the CSV, before coercion.
///
/// All fields are optional strings: the scrape leaves holes, and a hole is
/// data ("we don't know the year"), not an error.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "MOVIES")]
    title: Option<String>,
    #[serde(rename = "GENRE")]
    genre: Option<String>,
    #[serde(rename = "ONE-LINE")]
    synopsis: Option<String>,
    #[serde(rename = "RunTime")]
    runtime: Option<String>,
    #[serde(rename = "STARS")]
    stars: Option<String>,
    #[serde(rename = "YEAR")]
    year: Option<String>,
    #[serde(rename = "VOTES")]
    votes: Option<String>,
}

impl RawRecord {
    /// Coerce a raw row into the canonical schema
    fn into_canonical(self) -> MovieRecord {
        MovieRecord {
            title: self.title.unwrap_or_default().trim().to_string(),
            genre: self.genre.unwrap_or_default().trim().to_string(),
            synopsis: self.synopsis.unwrap_or_default().trim().to_string(),
            duration_min: self.runtime.as_deref().and_then(parse_duration),
            stars: self.stars.unwrap_or_default().trim().to_string(),
            year: self.year.as_deref().and_then(parse_year),
            imdb_votes: self.votes.as_deref().and_then(parse_votes),
        }
    }
}

/// Extract the runtime in minutes: the first run of digits in the raw text.
///
/// "142 min" -> Some(142), "90" -> Some(90), "N/A" -> None
pub fn parse_duration(raw: &str) -> Option<u32> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Extract the release year: the first window of four consecutive digits.
///
/// Handles the dataset's decorated year strings:
/// "(2021)" -> Some(2021), "(2018-2020)" -> Some(2018), "(I) (2019)" -> Some(2019)
pub fn parse_year(raw: &str) -> Option<u16> {
    let bytes = raw.as_bytes();
    for i in 0..bytes.len().saturating_sub(3) {
        if bytes[i..i + 4].iter().all(|b| b.is_ascii_digit()) {
            // Safe to slice: four ASCII digit bytes are valid UTF-8
            return raw[i..i + 4].parse().ok();
        }
    }
    None
}

/// Coerce a vote count to a number, treating anything non-numeric as missing.
///
/// Thousands separators are not stripped: "1,092" is missing, matching the
/// permissive-coercion behavior the rest of the system ranks against.
pub fn parse_votes(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

impl Dataset {
    /// Load the movie table from a CSV file.
    ///
    /// This is the one entry point for loading data. Steps:
    /// 1. Open the file and read the header row
    /// 2. Verify every required raw column is present
    /// 3. Deserialize each row and coerce it to the canonical schema
    /// 4. Reject an empty table
    ///
    /// Failure here is fatal to the application: there is nothing to
    /// recommend without the table, so the caller reports the error and
    /// exits rather than degrading.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let path_str = path.display().to_string();

        // Verify the header before touching any rows, so a schema mismatch
        // reports the missing column instead of a row-level type error
        let headers = reader.headers().map_err(|source| DataLoadError::CsvError {
            path: path_str.clone(),
            source,
        })?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h.trim() == column) {
                return Err(DataLoadError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize::<RawRecord>() {
            let raw = row.map_err(|source| DataLoadError::CsvError {
                path: path_str.clone(),
                source,
            })?;
            records.push(raw.into_canonical());
        }

        if records.is_empty() {
            return Err(DataLoadError::EmptyDataset { path: path_str });
        }

        Ok(Dataset::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_duration_first_digit_run() {
        assert_eq!(parse_duration("142 min"), Some(142));
        assert_eq!(parse_duration("90"), Some(90));
        assert_eq!(parse_duration("about 45, maybe 50"), Some(45));
        assert_eq!(parse_duration("unknown"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn test_parse_year_four_digit_window() {
        assert_eq!(parse_year("(2021)"), Some(2021));
        assert_eq!(parse_year("(2018-2020)"), Some(2018));
        assert_eq!(parse_year("(I) (2019)"), Some(2019));
        // A 3-digit run is not a year
        assert_eq!(parse_year("ep 123"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_parse_votes_coercion() {
        assert_eq!(parse_votes("1092"), Some(1092.0));
        assert_eq!(parse_votes(" 33.0 "), Some(33.0));
        assert_eq!(parse_votes("1,092"), None);
        assert_eq!(parse_votes(""), None);
        assert_eq!(parse_votes("n/a"), None);
    }

    fn write_csv(tag: &str, content: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("moviemate-{}-{}.csv", tag, std::process::id()));
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_from_csv_canonicalizes() {
        let path = write_csv(
            "canonical",
            "MOVIES,YEAR,GENRE,RATING,ONE-LINE,STARS,VOTES,RunTime,Gross\n\
             Blood Red Sky,(2021),\"Action, Horror, Thriller\",6.1,\
             A woman with a mysterious illness is forced into action.,\
             \"Peri Baumeister, Carl Anton Koch\",21062,121,\n\
             The Walking Dead,(2010-2022),\"Drama, Horror, Thriller\",8.2,\
             Sheriff Deputy Rick Grimes wakes up.,\"Andrew Lincoln\",\"885,805\",44,\n",
        );

        let dataset = Dataset::load_from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.title, "Blood Red Sky");
        assert_eq!(first.year, Some(2021));
        assert_eq!(first.duration_min, Some(121));
        assert_eq!(first.imdb_votes, Some(21062.0));
        assert_eq!(first.genre_list(), vec!["action", "horror", "thriller"]);

        // Range year takes the first 4-digit window; comma votes coerce to None
        let second = &dataset.records()[1];
        assert_eq!(second.year, Some(2010));
        assert_eq!(second.imdb_votes, None);
    }

    #[test]
    fn test_load_missing_column_fails() {
        let path = write_csv("missing-column", "MOVIES,GENRE\nSomething,Drama\n");
        let err = Dataset::load_from_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, DataLoadError::MissingColumn { .. }));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Dataset::load_from_csv(Path::new("/no/such/movies.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::IoError(_)));
    }
}
