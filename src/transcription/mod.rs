//! Transcription module for recap
//!
//! Handles speech-to-text via the OpenAI audio transcription API.

mod openai;

pub use openai::WhisperClient;
