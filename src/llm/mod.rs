//! LLM module for recap
//!
//! Provides the chat-completion collaborator used for per-chunk extraction.

mod client;
mod openai;
mod prompts;

pub use client::{build_provider, ChatProvider};
pub use openai::OpenAiClient;
pub use prompts::{extraction_system_prompt, extraction_user_message};
