//! Server crate for the MovieMate chat recommender.
//!
//! This crate contains the session state machine that coordinates the
//! pipeline and the LLM client for one conversation.

pub mod session;

pub use session::{
    ChatSession, DEFAULT_TOP_K, GREETING, MAX_TOP_K, MIN_TOP_K, Message, NO_MATCH_REPLY,
    RESET_GREETING, Role,
};
