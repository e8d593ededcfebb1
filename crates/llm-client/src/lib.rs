//! Gemini client for generating the chat blurb.
//!
//! This crate provides a small client for the Google Gemini REST API. It
//! handles:
//! - Building the generateContent request (system instruction + prompt)
//! - Extracting the text reply from the response
//! - Degrading gracefully: no API key means a canned filler phrase, and
//!   any request failure is absorbed into a displayable string
//!
//! The blurb is decorative flavor text. Nothing downstream depends on its
//! content, which is why the public surface never returns an error: a
//! failed call becomes chat content, not a crashed turn.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Fixed system instruction sent with every request
const SYSTEM_INSTRUCTION: &str = "You are a casual, friendly movie recommendation assistant. \
     Keep answers short, helpful, and upbeat.";

/// Canned phrases used when no API key is configured.
///
/// Selection among them is uniformly random by design; tests assert set
/// membership, not exact values.
pub const FILLER_PHRASES: [&str; 3] = [
    "Here are some great picks 🎬",
    "Nice — I’ve got some movies you might enjoy!",
    "Check these out, they’re trending and match your vibe!",
];

/// Errors on the request path, before they are absorbed into display text
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response contained no generated text")]
    EmptyResponse,
}

// --- Gemini generateContent wire format ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the blurb-generation service.
///
/// Holds the API key for the whole session; an absent or empty key puts
/// the client permanently in filler mode, with no network I/O at all.
#[derive(Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl LlmClient {
    /// Create a client. An empty key is treated the same as no key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Use a different Gemini model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// True when a key is configured and real requests will be made
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a short blurb for the given prompt.
    ///
    /// Never fails from the caller's point of view:
    /// - without a key, returns one of [`FILLER_PHRASES`] at random
    /// - with a key, returns the model's reply, or a string embedding the
    ///   error detail when the request fails for any reason
    pub async fn generate(&self, prompt: &str) -> String {
        let Some(api_key) = &self.api_key else {
            let phrase = *FILLER_PHRASES
                .choose(&mut rand::rng())
                .unwrap_or(&FILLER_PHRASES[0]);
            debug!("No API key configured, using filler phrase");
            return phrase.to_string();
        };

        match self.request_completion(prompt, api_key).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Blurb generation failed: {e}");
                format!("Error reaching Gemini: {e}")
            }
        }
    }

    async fn request_completion(&self, prompt: &str, api_key: &str) -> Result<String, LlmError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.7 },
        };

        debug!("Requesting blurb from {}", self.model);
        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(LlmError::EmptyResponse)
    }
}
