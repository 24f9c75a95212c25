//! User settings record.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::language::Language;
use crate::model::ModelId;

/// Default word count for the context window around a selection.
pub const DEFAULT_CONTEXT_WORDS: u32 = 40;

/// How much surrounding page text accompanies a selection.
///
/// Stored as a bare value for compatibility with the host's settings blob:
/// a positive integer is a word count, `""` means the whole page, and `0`
/// means the selection only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextWindow {
    /// The first `n` words of the enclosing block.
    Words(u32),
    /// The whole page body, capped downstream.
    WholePage,
    /// No surrounding context at all.
    SelectionOnly,
}

impl Default for ContextWindow {
    fn default() -> Self {
        ContextWindow::Words(DEFAULT_CONTEXT_WORDS)
    }
}

impl fmt::Display for ContextWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextWindow::Words(n) => write!(f, "{n} words"),
            ContextWindow::WholePage => f.write_str("whole page"),
            ContextWindow::SelectionOnly => f.write_str("selection only"),
        }
    }
}

impl Serialize for ContextWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ContextWindow::Words(n) => serializer.serialize_u32(*n),
            ContextWindow::SelectionOnly => serializer.serialize_u32(0),
            ContextWindow::WholePage => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for ContextWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(u32),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(0) => Ok(ContextWindow::SelectionOnly),
            Repr::Num(n) => Ok(ContextWindow::Words(n)),
            Repr::Text(s) if s.is_empty() => Ok(ContextWindow::WholePage),
            Repr::Text(s) => Err(D::Error::custom(format!(
                "invalid context window size: {s:?}"
            ))),
        }
    }
}

/// The persisted user preferences, one flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// User-supplied Gemini API key. Empty means "use the shared default".
    pub api_key: String,
    /// Selected model.
    pub model: ModelId,
    /// Target output language.
    pub language: Language,
    /// Free-text instructions appended to every prompt.
    pub extra_instructions: String,
    /// Context window applied when gathering page context.
    pub context_window: ContextWindow,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_key: String::new(),
            model: ModelId::default(),
            language: Language::default(),
            extra_instructions: String::new(),
            context_window: ContextWindow::default(),
        }
    }
}

/// A partial settings update, merged into the cached record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub api_key: Option<String>,
    pub model: Option<ModelId>,
    pub language: Option<Language>,
    pub extra_instructions: Option<String>,
    pub context_window: Option<ContextWindow>,
}

impl SettingsPatch {
    /// Merge the set fields into `settings`, leaving the rest untouched.
    pub fn apply(self, settings: &mut Settings) {
        if let Some(api_key) = self.api_key {
            settings.api_key = api_key;
        }
        if let Some(model) = self.model {
            settings.model = model;
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(extra) = self.extra_instructions {
            settings.extra_instructions = extra;
        }
        if let Some(window) = self.context_window {
            settings.context_window = window;
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_extra_instructions(mut self, extra: impl Into<String>) -> Self {
        self.extra_instructions = Some(extra.into());
        self
    }

    pub fn with_context_window(mut self, window: ContextWindow) -> Self {
        self.context_window = Some(window);
        self
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
