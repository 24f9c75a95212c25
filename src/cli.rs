//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use lucid_protocols::{Language, ModelId};

/// Lucid CLI.
#[derive(Parser)]
#[command(name = "lucid")]
#[command(about = "Rewrite selected text in plain language")]
#[command(version)]
pub struct Cli {
    /// Settings file path (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub request: RequestArgs,
}

#[derive(Args)]
pub struct RequestArgs {
    /// Text to rewrite; read from stdin when omitted
    pub text: Option<String>,

    /// Target output language (English name, e.g. "French")
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Model override
    #[arg(short, long)]
    pub model: Option<ModelId>,

    /// Print chunks as they arrive instead of waiting for the full result
    #[arg(long)]
    pub stream: bool,

    /// Print the prompt that was sent alongside the result
    #[arg(long)]
    pub show_prompt: bool,

    /// Page title for a rich-context request
    #[arg(long)]
    pub title: Option<String>,

    /// Nearest section heading above the selection
    #[arg(long)]
    pub heading: Option<String>,

    /// Text of the block enclosing the selection, bounded by the configured
    /// context window
    #[arg(long)]
    pub context: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the supported models
    Models,
    /// List the supported output languages
    Languages,
}
