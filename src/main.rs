//! Lucid - plain-language rewriting for selected text.
//!
//! Reads a selection from the command line or stdin, runs it through the
//! request pipeline, and prints the rewritten text.

mod cli;

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use futures::StreamExt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lucid_config::{SettingsCache, TomlFileStore};
use lucid_core::{gather_context, PromptInput, Simplifier, SimplifyOptions};
use lucid_protocols::{Language, ModelId, PageText};

use cli::{Cli, Commands, RequestArgs};

/// Shared fallback credential, used when the settings hold no key.
const DEFAULT_KEY_ENV: &str = "LUCID_GEMINI_API_KEY";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Commands::Models) => {
            list_models();
            return Ok(());
        }
        Some(Commands::Languages) => {
            list_languages();
            return Ok(());
        }
        None => {}
    }

    let settings_path = match cli.config {
        Some(path) => path,
        None => default_settings_path()?,
    };
    debug!("settings file: {}", settings_path.display());

    let settings = SettingsCache::new(Arc::new(TomlFileStore::new(settings_path)));
    let mut simplifier = Simplifier::new(settings);
    if let Ok(key) = std::env::var(DEFAULT_KEY_ENV) {
        simplifier = simplifier.with_default_api_key(key);
    }

    let selection = read_selection(cli.request.text.clone())?;
    let input = build_input(&simplifier, &cli.request, selection);
    let options = SimplifyOptions {
        model: cli.request.model,
        language: cli.request.language,
        return_prompt: cli.request.show_prompt,
    };

    if cli.request.stream {
        let mut stream = simplifier.simplify_stream(&input, &options).await?;
        let mut stdout = std::io::stdout();
        while let Some(chunk) = stream.next().await {
            write!(stdout, "{}", chunk?)?;
            stdout.flush()?;
        }
        writeln!(stdout)?;
    } else {
        let result = simplifier.simplify(&input, &options).await?;
        if let Some(prompt) = result.prompt {
            eprintln!("--- prompt ---\n{prompt}\n--- result ---");
        }
        println!("{}", result.text);
    }

    Ok(())
}

/// The selection comes from the argument, or stdin when piped in.
fn read_selection(arg: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let text = match arg {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err("no text to rewrite: pass it as an argument or pipe it on stdin".into());
    }
    Ok(text)
}

/// A bare selection, unless any context flag asks for a rich request.
fn build_input(simplifier: &Simplifier, args: &RequestArgs, selection: String) -> PromptInput {
    if args.title.is_none() && args.heading.is_none() && args.context.is_none() {
        return PromptInput::selection(selection);
    }

    let page = PageText {
        title: args.title.clone().unwrap_or_default(),
        heading: args.heading.clone(),
        block_text: args.context.clone(),
        body_text: None,
    };
    let window = simplifier.settings().get().context_window;
    PromptInput::Context(gather_context(&page, &selection, window))
}

fn default_settings_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    dirs::config_dir()
        .map(|dir| dir.join("lucid").join("settings.toml"))
        .ok_or_else(|| "could not determine the configuration directory".into())
}

fn list_models() {
    for model in ModelId::ALL {
        let marker = if model == ModelId::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<18} {} - {}{}",
            model.as_str(),
            model.display_name(),
            model.description(),
            marker
        );
    }
}

fn list_languages() {
    for language in Language::all() {
        let rtl = if language.is_rtl() { " [RTL]" } else { "" };
        println!("{}{}", language.display_name(), rtl);
    }
}
