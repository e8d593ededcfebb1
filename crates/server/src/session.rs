//! # Chat Session
//!
//! This module coordinates one conversation:
//! 1. Record the user message
//! 2. Answer the "genres" shortcut directly, when asked
//! 3. Absorb new preferences from the utterance
//! 4. Filter and rank the dataset against the accumulated preferences
//! 5. Render the results and fetch an optional LLM blurb
//! 6. Record and return the assistant reply
//!
//! A session is single-user and single-threaded: each turn runs to
//! completion before the next input is accepted. The only await point is
//! the blurb request, and its failure is already absorbed into chat text
//! by the client.

use std::sync::Arc;

use llm_client::LlmClient;
use tracing::{debug, info};

use data_loader::Dataset;
use pipeline::{PreferenceState, Vocabulary, build_llm_prompt, compose_blocks, recommend};

/// Greeting shown when a session starts
pub const GREETING: &str =
    "hi! 👋 Looking for action, romance, or maybe a movie with your favorite actor? Just ask!";

/// Greeting shown after an explicit reset
pub const RESET_GREETING: &str =
    "hi! 👋 Preferences cleared. What kind of movie do you want now?";

/// Reply when the accumulated filters exclude every row
pub const NO_MATCH_REPLY: &str = "Hmm, nothing matches. Want me to relax the filters?";

/// Number of recommendations per reply, bounded to the UI slider's range
pub const DEFAULT_TOP_K: usize = 5;
pub const MIN_TOP_K: usize = 1;
pub const MAX_TOP_K: usize = 10;

/// Who said a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the transcript
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// One user's conversation: transcript, accumulated preferences, and the
/// collaborators needed to answer a turn.
///
/// The dataset handle is shared and immutable; everything mutable lives
/// inside the session, so there is nothing to lock.
pub struct ChatSession {
    dataset: Arc<Dataset>,
    vocabulary: Vocabulary,
    llm: LlmClient,
    prefs: PreferenceState,
    messages: Vec<Message>,
    top_k: usize,
}

impl ChatSession {
    /// Start a session with an opening greeting in the transcript
    pub fn new(dataset: Arc<Dataset>, llm: LlmClient, top_k: usize) -> Self {
        let vocabulary = Vocabulary::from_dataset(&dataset);
        Self {
            dataset,
            vocabulary,
            llm,
            prefs: PreferenceState::new(),
            messages: vec![Message::assistant(GREETING)],
            top_k: top_k.clamp(MIN_TOP_K, MAX_TOP_K),
        }
    }

    /// Main entry point: process one user message and produce the reply.
    ///
    /// The reply is appended to the transcript and also returned so the
    /// caller can display it immediately.
    pub async fn handle_turn(&mut self, input: &str) -> String {
        self.messages.push(Message::user(input));
        let low = input.to_lowercase();

        // Asking about genres is answered directly, no recommendation
        if low.contains("genres") {
            let reply = self.list_genres_reply();
            self.messages.push(Message::assistant(reply.clone()));
            return reply;
        }

        self.prefs.absorb_utterance(&low, &self.vocabulary);
        info!(
            "Preferences after turn: {} genres, {} stars",
            self.prefs.genres().len(),
            self.prefs.stars().len()
        );

        let ranked = recommend(
            &self.dataset,
            self.prefs.genres(),
            self.prefs.stars(),
            self.top_k,
        );
        debug!("Recommender returned {} rows", ranked.len());

        if ranked.is_empty() {
            self.messages.push(Message::assistant(NO_MATCH_REPLY));
            return NO_MATCH_REPLY.to_string();
        }

        let list_text = compose_blocks(&ranked);
        let blurb = self.llm.generate(&build_llm_prompt(&list_text)).await;

        let reply = format!("{blurb}\n\n{list_text}");
        self.messages.push(Message::assistant(reply.clone()));
        reply
    }

    /// Clear preferences and restart the transcript with the reset greeting
    pub fn reset(&mut self) {
        info!("Session reset requested");
        self.prefs.clear();
        self.messages = vec![Message::assistant(RESET_GREETING)];
    }

    /// Adjust how many recommendations each reply carries (clamped 1-10)
    pub fn set_top_k(&mut self, top_k: usize) {
        self.top_k = top_k.clamp(MIN_TOP_K, MAX_TOP_K);
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Full transcript, oldest first
    pub fn history(&self) -> &[Message] {
        &self.messages
    }

    pub fn preferences(&self) -> &PreferenceState {
        &self.prefs
    }

    fn list_genres_reply(&self) -> String {
        let genres: Vec<String> = self.vocabulary.genres().iter().cloned().collect();
        format!(
            "Here are some genres: {}. Which one sounds good?",
            genres.join(", ")
        )
    }
}
