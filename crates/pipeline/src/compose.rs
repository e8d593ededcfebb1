//! Rendering of ranked results into chat-ready text.
//!
//! Formatting mirrors the card layout the UI shows: a bolded title line
//! with year and runtime, then one line each for genre, stars, synopsis,
//! and (when known) the vote count.

use crate::recommend::RankedMovie;
use data_loader::MovieRecord;

/// Render ranked rows as display blocks, joined by a blank line.
///
/// Missing year renders as `Unknown`, missing runtime as `?`, and the
/// votes line is omitted entirely when the count is missing.
pub fn compose_blocks(results: &[RankedMovie]) -> String {
    results
        .iter()
        .map(|r| compose_block(&r.record))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn compose_block(record: &MovieRecord) -> String {
    let year = record
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let duration = record
        .duration_min
        .map(|d| d.to_string())
        .unwrap_or_else(|| "?".to_string());

    let mut block = format!(
        "**{}** ({}) — {} min\n🎭 Genre: {}\n⭐ Stars/Director: {}\n📝 {}",
        record.title, year, duration, record.genre, record.stars, record.synopsis
    );
    if let Some(votes) = record.imdb_votes {
        block.push_str(&format!("\n📊 IMDB Votes: {}", votes as i64));
    }
    block
}

/// Build the prompt handed to the language model alongside the rendered list
pub fn build_llm_prompt(list_text: &str) -> String {
    format!(
        "User asked for movie recommendations. Suggest in a casual tone. Movies:\n{list_text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(record: MovieRecord) -> RankedMovie {
        RankedMovie {
            record,
            genre_score: None,
        }
    }

    fn full_record() -> MovieRecord {
        MovieRecord {
            title: "Blood Red Sky".to_string(),
            genre: "Action, Horror, Thriller".to_string(),
            synopsis: "A woman with a mysterious illness is forced into action.".to_string(),
            duration_min: Some(121),
            stars: "Peri Baumeister, Carl Anton Koch".to_string(),
            year: Some(2021),
            imdb_votes: Some(21062.0),
        }
    }

    #[test]
    fn test_block_renders_all_fields() {
        let text = compose_blocks(&[ranked(full_record())]);
        assert!(text.starts_with("**Blood Red Sky** (2021) — 121 min"));
        assert!(text.contains("🎭 Genre: Action, Horror, Thriller"));
        assert!(text.contains("⭐ Stars/Director: Peri Baumeister, Carl Anton Koch"));
        assert!(text.contains("📝 A woman with a mysterious illness"));
        assert!(text.contains("📊 IMDB Votes: 21062"));
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let mut record = full_record();
        record.year = None;
        record.duration_min = None;
        record.imdb_votes = None;

        let text = compose_blocks(&[ranked(record)]);
        assert!(text.contains("(Unknown) — ? min"));
        assert!(!text.contains("IMDB Votes"));
    }

    #[test]
    fn test_blocks_joined_by_blank_line() {
        let mut second = full_record();
        second.title = "The Walking Dead".to_string();

        let text = compose_blocks(&[ranked(full_record()), ranked(second)]);
        let blocks: Vec<_> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].starts_with("**The Walking Dead**"));
    }

    #[test]
    fn test_empty_results_render_empty() {
        assert_eq!(compose_blocks(&[]), "");
    }

    #[test]
    fn test_llm_prompt_embeds_list() {
        let prompt = build_llm_prompt("**A** (2020) — 90 min");
        assert!(prompt.starts_with("User asked for movie recommendations."));
        assert!(prompt.ends_with("**A** (2020) — 90 min"));
    }
}
