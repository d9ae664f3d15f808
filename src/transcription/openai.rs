use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

/// Client for the OpenAI audio transcription endpoint.
pub struct WhisperClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl WhisperClient {
    pub fn new(api_key: &str, model: &str, endpoint: &str) -> Result<Self> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!("OpenAI API key is missing. Use --api-key or set OPENAI_API_KEY.");
        }

        let endpoint = if endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            endpoint.trim().trim_end_matches('/').to_string()
        };

        Ok(Self {
            // Transcription uploads can be large; allow a generous timeout.
            http: Client::builder()
                .timeout(Duration::from_secs(600))
                .build()
                .context("Failed to build transcription HTTP client")?,
            api_key,
            model: model.trim().to_string(),
            endpoint,
        })
    }

    /// Transcribe a mono 16kHz WAV file into plain text.
    ///
    /// One synchronous call; the API handles arbitrary-length audio, so no
    /// chunking happens at this stage.
    pub async fn transcribe(&self, wav_path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(wav_path)
            .await
            .with_context(|| format!("Failed to read audio file: {}", wav_path.display()))?;

        let part = Part::bytes(bytes)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .context("Failed to build audio upload part")?;

        let form = Form::new().text("model", self.model.clone()).part("file", part);

        let response = self
            .http
            .post(format!("{}/audio/transcriptions", self.endpoint))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .context("Transcription request failed")?;

        let response = response
            .error_for_status()
            .context("Transcription API returned an error status")?;

        let payload: TranscriptionResponse = response
            .json()
            .await
            .context("Failed to parse transcription response")?;

        Ok(payload.text)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_rejected() {
        let err = match WhisperClient::new("  ", "whisper-1", "") {
            Ok(_) => panic!("expected client creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("API key is missing"));
    }

    #[test]
    fn endpoint_trailing_slash_is_stripped() {
        let client = WhisperClient::new("sk-test", "whisper-1", "https://example.test/v1/")
            .expect("client should build");
        assert_eq!(client.endpoint, "https://example.test/v1");
    }
}
