//! Per-request page context.

use serde::{Deserialize, Serialize};

/// Context assembled around a selection, handed to the prompt builder.
///
/// Built fresh for every request and discarded afterwards. Missing pieces
/// are empty strings, matching the labeled prompt fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextPacket {
    pub page_title: String,
    pub section_heading: String,
    pub context_snippet: String,
    pub user_selection: String,
}

/// Raw page text the host hands over alongside a selection.
///
/// The host is responsible for DOM traversal; this carries only the text it
/// extracted: the page title, the nearest heading above the selection, the
/// enclosing block's text, and the full body text for whole-page requests.
#[derive(Debug, Clone, Default)]
pub struct PageText {
    pub title: String,
    pub heading: Option<String>,
    pub block_text: Option<String>,
    pub body_text: Option<String>,
}
