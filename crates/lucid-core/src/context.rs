//! Context gathering.
//!
//! The host hands over raw page text (title, nearest heading, enclosing
//! block, body); this module applies the configured context window to it.
//! Word counting is whitespace-based and snippets come out
//! whitespace-normalized.

use lucid_protocols::{ContextPacket, ContextWindow, PageText};

/// Cap applied to whole-page snippets to bound request size.
pub const WHOLE_PAGE_WORD_CAP: usize = 1000;

/// Assemble the context packet for a request.
pub fn gather_context(page: &PageText, selection: &str, window: ContextWindow) -> ContextPacket {
    let context_snippet = match window {
        ContextWindow::SelectionOnly => selection.to_string(),
        ContextWindow::WholePage => page
            .body_text
            .as_deref()
            .map(|body| first_words(body, WHOLE_PAGE_WORD_CAP))
            .unwrap_or_else(|| selection.to_string()),
        ContextWindow::Words(n) => page
            .block_text
            .as_deref()
            .map(|block| first_words(block, n as usize))
            .unwrap_or_else(|| selection.to_string()),
    };

    ContextPacket {
        page_title: page.title.clone(),
        section_heading: page
            .heading
            .as_deref()
            .map(|heading| heading.trim().to_string())
            .unwrap_or_default(),
        context_snippet,
        user_selection: selection.to_string(),
    }
}

/// The first `n` whitespace-separated words, joined by single spaces.
fn first_words(text: &str, n: usize) -> String {
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
