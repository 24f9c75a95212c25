//! Prompt construction.

use lucid_protocols::{ContextPacket, Language};

/// What the prompt is built from: a bare selection, or a selection with the
/// page context gathered around it.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptInput {
    Selection(String),
    Context(ContextPacket),
}

impl PromptInput {
    pub fn selection(text: impl Into<String>) -> Self {
        PromptInput::Selection(text.into())
    }

    /// The text the user actually highlighted.
    pub fn user_selection(&self) -> &str {
        match self {
            PromptInput::Selection(text) => text,
            PromptInput::Context(packet) => &packet.user_selection,
        }
    }
}

const BASE_INSTRUCTION: &str = "Rewrite the following text in plain, simple words for a general audience. Do not use phrases like 'it means' or 'it describes'—just give the transformed meaning directly. Be concise and clear.";

/// Build the instruction prompt.
///
/// Deterministic: identical inputs produce byte-identical output. The
/// prompt is part of the result cache key, so any drift here silently
/// splits the cache.
pub fn build_prompt(input: &PromptInput, language: Language, extra_instructions: &str) -> String {
    let mut prompt = format!("{BASE_INSTRUCTION} Respond in {language}.");

    for line in extra_instructions
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
    {
        prompt.push_str("\n- ");
        prompt.push_str(line);
    }

    match input {
        PromptInput::Selection(text) => {
            prompt.push_str("\nText: \"");
            prompt.push_str(text);
            prompt.push('"');
        }
        PromptInput::Context(packet) => {
            prompt.push_str("\nPage Title: ");
            prompt.push_str(&packet.page_title);
            prompt.push_str("\nSection Heading: ");
            prompt.push_str(&packet.section_heading);
            prompt.push_str("\nContext Snippet: ");
            prompt.push_str(&packet.context_snippet);
            prompt.push_str("\nUser Selection: \"");
            prompt.push_str(&packet.user_selection);
            prompt.push('"');
        }
    }

    prompt
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
