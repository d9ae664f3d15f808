//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// recap - Meeting summarization and action-item extraction
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a meeting recording into a markdown report
    Summarize(SummarizeArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Meeting audio/video file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Whisper model for transcription
    #[arg(long)]
    pub whisper_model: Option<String>,

    /// GPT model for summarization
    #[arg(long)]
    pub gpt_model: Option<String>,

    /// Max characters per transcript chunk
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Output markdown report path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Append the full transcript to the report
    #[arg(long)]
    pub include_transcript: bool,

    /// OpenAI API key (overrides config and environment)
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
