//! Supported Gemini models.
//!
//! The model set is fixed: these are the free-tier models the product
//! exposes in its settings UI. Arbitrary identifiers are rejected.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models available on the Gemini free tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModelId {
    Gemini15Flash,
    #[default]
    Gemini20Flash,
    Gemini25Flash,
    Gemini25Pro,
}

/// Grouping used when listing models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCategory {
    Flash,
    Pro,
}

impl ModelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::Flash => "Flash Models",
            ModelCategory::Pro => "Pro Models",
        }
    }
}

impl ModelId {
    /// All supported models, in the order the settings UI lists them.
    pub const ALL: [ModelId; 4] = [
        ModelId::Gemini15Flash,
        ModelId::Gemini20Flash,
        ModelId::Gemini25Flash,
        ModelId::Gemini25Pro,
    ];

    /// Wire identifier, as used in the request URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gemini15Flash => "gemini-1.5-flash",
            ModelId::Gemini20Flash => "gemini-2.0-flash",
            ModelId::Gemini25Flash => "gemini-2.5-flash",
            ModelId::Gemini25Pro => "gemini-2.5-pro",
        }
    }

    /// Parse a wire identifier. Unknown identifiers are rejected.
    pub fn parse(s: &str) -> Option<ModelId> {
        ModelId::ALL.iter().copied().find(|m| m.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::Gemini15Flash => "Gemini 1.5 Flash",
            ModelId::Gemini20Flash => "Gemini 2.0 Flash",
            ModelId::Gemini25Flash => "Gemini 2.5 Flash",
            ModelId::Gemini25Pro => "Gemini 2.5 Pro",
        }
    }

    /// Short description shown next to the model in a picker.
    pub fn description(&self) -> &'static str {
        match self {
            ModelId::Gemini15Flash => "Fast, basic quality for simple explanations",
            ModelId::Gemini20Flash => "Best speed-to-quality ratio, recommended",
            ModelId::Gemini25Flash => "Good speed-to-quality ratio, but slower than 2.0 Flash",
            ModelId::Gemini25Pro => "Highest quality, best for complex topics, but slowest",
        }
    }

    pub fn category(&self) -> ModelCategory {
        match self {
            ModelId::Gemini25Pro => ModelCategory::Pro,
            _ => ModelCategory::Flash,
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::parse(s).ok_or_else(|| format!("unknown model: {s}"))
    }
}

impl Serialize for ModelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ModelId::parse(&s).ok_or_else(|| D::Error::custom(format!("unknown model: {s}")))
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
