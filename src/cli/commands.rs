//! CLI command implementations

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::audio;
use crate::cli::args::{ConfigCommand, SummarizeArgs};
use crate::config::Settings;
use crate::llm::build_provider;
use crate::summarize::{chunk, merge, report, Extractor};
use crate::transcription::WhisperClient;

/// Run the full summarization pipeline for one recording.
pub async fn summarize_meeting(settings: &Settings, args: SummarizeArgs) -> Result<()> {
    // Resolve options: CLI flags override configuration.
    let api_key = args
        .api_key
        .as_deref()
        .unwrap_or(&settings.openai.api_key)
        .trim()
        .to_string();
    let whisper_model = args
        .whisper_model
        .as_deref()
        .unwrap_or(&settings.transcription.model);
    let gpt_model = args.gpt_model.as_deref().unwrap_or(&settings.llm.model);
    let max_chars = args.max_chars.unwrap_or(settings.report.max_chars);
    let output: PathBuf = args
        .output
        .clone()
        .unwrap_or_else(|| settings.report.output.clone());
    let include_transcript = args.include_transcript || settings.report.include_transcript;

    // Fail fast on configuration errors, before any collaborator call.
    if api_key.is_empty() {
        anyhow::bail!("OpenAI API key required. Use --api-key or set OPENAI_API_KEY.");
    }
    if max_chars == 0 {
        anyhow::bail!("max_chars must be greater than zero");
    }
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    println!("Transcribing...");
    let wav = tempfile::Builder::new()
        .prefix("recap-")
        .suffix(".wav")
        .tempfile()
        .context("Failed to create temporary audio file")?;
    audio::transcode_to_wav(&args.input, wav.path()).await?;

    let transcriber = WhisperClient::new(&api_key, whisper_model, &settings.openai.endpoint)?;
    let transcript = transcriber.transcribe(wav.path()).await?;

    println!("Chunking transcript...");
    let chunks = chunk(&transcript, max_chars)?;
    println!("{} chunks created. Summarizing...", chunks.len());

    let provider = build_provider(
        &settings.llm.provider,
        &api_key,
        gpt_model,
        &settings.openai.endpoint,
    )?;
    let extractor = Extractor::new(provider);
    let records = extractor.extract(&chunks).await?;

    let merged = merge(&records);
    let rendered = report::render(&merged, include_transcript.then_some(transcript.as_str()));

    std::fs::write(&output, rendered)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;
    println!("Report written to {}", output.display());

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
