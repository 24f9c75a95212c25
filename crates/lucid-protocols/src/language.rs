//! Supported output languages.
//!
//! The registry mirrors the settings UI: 82 languages well supported by the
//! Gemini models, each with a display name that leads with the English name
//! for searchability. The English name doubles as the wire value and as the
//! language named in the prompt.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

struct LanguageInfo {
    name: &'static str,
    display: &'static str,
}

/// A supported output language, validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language(&'static str);

/// Languages rendered right-to-left.
const RTL_LANGUAGES: [&str; 4] = ["Arabic", "Hebrew", "Persian", "Urdu"];

static LANGUAGES: [LanguageInfo; 82] = [
    LanguageInfo { name: "Afrikaans", display: "Afrikaans (Afrikaans)" },
    LanguageInfo { name: "Amharic", display: "Amharic (አማርኛ)" },
    LanguageInfo { name: "Arabic", display: "Arabic (العربية)" },
    LanguageInfo { name: "Armenian", display: "Armenian (Հայերեն)" },
    LanguageInfo { name: "Assamese", display: "Assamese (অসমীয়া)" },
    LanguageInfo { name: "Azerbaijani", display: "Azerbaijani (Azərbaycan)" },
    LanguageInfo { name: "Basque", display: "Basque (Euskara)" },
    LanguageInfo { name: "Bengali", display: "Bengali (বাংলা)" },
    LanguageInfo { name: "Bulgarian", display: "Bulgarian (Български)" },
    LanguageInfo { name: "Burmese", display: "Burmese (မြန်မာ)" },
    LanguageInfo { name: "Catalan", display: "Catalan (Català)" },
    LanguageInfo { name: "Chinese (Simplified)", display: "Chinese Simplified (简体中文)" },
    LanguageInfo { name: "Chinese (Traditional)", display: "Chinese Traditional (繁體中文)" },
    LanguageInfo { name: "Croatian", display: "Croatian (Hrvatski)" },
    LanguageInfo { name: "Czech", display: "Czech (Čeština)" },
    LanguageInfo { name: "Danish", display: "Danish (Dansk)" },
    LanguageInfo { name: "Dutch", display: "Dutch (Nederlands)" },
    LanguageInfo { name: "English", display: "English (English)" },
    LanguageInfo { name: "Estonian", display: "Estonian (Eesti)" },
    LanguageInfo { name: "Filipino", display: "Filipino (Filipino)" },
    LanguageInfo { name: "Finnish", display: "Finnish (Suomi)" },
    LanguageInfo { name: "French", display: "French (Français)" },
    LanguageInfo { name: "Galician", display: "Galician (Galego)" },
    LanguageInfo { name: "Georgian", display: "Georgian (ქართული)" },
    LanguageInfo { name: "German", display: "German (Deutsch)" },
    LanguageInfo { name: "Greek", display: "Greek (Ελληνικά)" },
    LanguageInfo { name: "Gujarati", display: "Gujarati (ગુજરાતી)" },
    LanguageInfo { name: "Hausa", display: "Hausa (Hausa)" },
    LanguageInfo { name: "Hebrew", display: "Hebrew (עברית)" },
    LanguageInfo { name: "Hindi", display: "Hindi (हिन्दी)" },
    LanguageInfo { name: "Hmong", display: "Hmong (Hmong)" },
    LanguageInfo { name: "Hungarian", display: "Hungarian (Magyar)" },
    LanguageInfo { name: "Icelandic", display: "Icelandic (Íslenska)" },
    LanguageInfo { name: "Igbo", display: "Igbo (Igbo)" },
    LanguageInfo { name: "Indonesian", display: "Indonesian (Bahasa Indonesia)" },
    LanguageInfo { name: "Irish", display: "Irish (Gaeilge)" },
    LanguageInfo { name: "Italian", display: "Italian (Italiano)" },
    LanguageInfo { name: "Japanese", display: "Japanese (日本語)" },
    LanguageInfo { name: "Kannada", display: "Kannada (ಕನ್ನಡ)" },
    LanguageInfo { name: "Kazakh", display: "Kazakh (Қазақ)" },
    LanguageInfo { name: "Khmer", display: "Khmer (ខ្មែរ)" },
    LanguageInfo { name: "Korean", display: "Korean (한국어)" },
    LanguageInfo { name: "Kyrgyz", display: "Kyrgyz (Кыргызча)" },
    LanguageInfo { name: "Lao", display: "Lao (ລາວ)" },
    LanguageInfo { name: "Latvian", display: "Latvian (Latviešu)" },
    LanguageInfo { name: "Lithuanian", display: "Lithuanian (Lietuvių)" },
    LanguageInfo { name: "Malay", display: "Malay (Bahasa Melayu)" },
    LanguageInfo { name: "Malayalam", display: "Malayalam (മലയാളം)" },
    LanguageInfo { name: "Maltese", display: "Maltese (Malti)" },
    LanguageInfo { name: "Marathi", display: "Marathi (मराठी)" },
    LanguageInfo { name: "Mongolian", display: "Mongolian (Монгол)" },
    LanguageInfo { name: "Nepali", display: "Nepali (नेपाली)" },
    LanguageInfo { name: "Norwegian", display: "Norwegian (Norsk)" },
    LanguageInfo { name: "Odia", display: "Odia (ଓଡ଼ିଆ)" },
    LanguageInfo { name: "Persian", display: "Persian (فارسی)" },
    LanguageInfo { name: "Polish", display: "Polish (Polski)" },
    LanguageInfo { name: "Portuguese", display: "Portuguese (Português)" },
    LanguageInfo { name: "Punjabi", display: "Punjabi (ਪੰਜਾਬੀ)" },
    LanguageInfo { name: "Romanian", display: "Romanian (Română)" },
    LanguageInfo { name: "Russian", display: "Russian (Русский)" },
    LanguageInfo { name: "Sanskrit", display: "Sanskrit (संस्कृतम्)" },
    LanguageInfo { name: "Sinhala", display: "Sinhala (සිංහල)" },
    LanguageInfo { name: "Slovak", display: "Slovak (Slovenčina)" },
    LanguageInfo { name: "Slovenian", display: "Slovenian (Slovenščina)" },
    LanguageInfo { name: "Spanish", display: "Spanish (Español)" },
    LanguageInfo { name: "Swahili", display: "Swahili (Kiswahili)" },
    LanguageInfo { name: "Swedish", display: "Swedish (Svenska)" },
    LanguageInfo { name: "Tajik", display: "Tajik (Тоҷикӣ)" },
    LanguageInfo { name: "Tamil", display: "Tamil (தமிழ்)" },
    LanguageInfo { name: "Telugu", display: "Telugu (తెలుగు)" },
    LanguageInfo { name: "Thai", display: "Thai (ไทย)" },
    LanguageInfo { name: "Tibetan", display: "Tibetan (བོད་སྐད་)" },
    LanguageInfo { name: "Turkish", display: "Turkish (Türkçe)" },
    LanguageInfo { name: "Turkmen", display: "Turkmen (Türkmen)" },
    LanguageInfo { name: "Ukrainian", display: "Ukrainian (Українська)" },
    LanguageInfo { name: "Urdu", display: "Urdu (اردو)" },
    LanguageInfo { name: "Uzbek", display: "Uzbek (O'zbek)" },
    LanguageInfo { name: "Vietnamese", display: "Vietnamese (Tiếng Việt)" },
    LanguageInfo { name: "Welsh", display: "Welsh (Cymraeg)" },
    LanguageInfo { name: "Xhosa", display: "Xhosa (isiXhosa)" },
    LanguageInfo { name: "Yoruba", display: "Yoruba (Yorùbá)" },
    LanguageInfo { name: "Zulu", display: "Zulu (isiZulu)" },
];

impl Language {
    pub const ENGLISH: Language = Language("English");

    /// Parse an English language name. Unknown names are rejected.
    pub fn parse(s: &str) -> Option<Language> {
        LANGUAGES.iter().find(|l| l.name == s).map(|l| Language(l.name))
    }

    /// The English name, used in prompts and as the wire value.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Display name leading with the English name, native spelling after.
    /// Falls back to the plain name for entries without a registered display.
    pub fn display_name(&self) -> &'static str {
        LANGUAGES
            .iter()
            .find(|l| l.name == self.0)
            .map(|l| l.display)
            .unwrap_or(self.0)
    }

    /// Whether the language renders right-to-left.
    pub fn is_rtl(&self) -> bool {
        RTL_LANGUAGES.contains(&self.0)
    }

    /// All supported languages, alphabetical by English name.
    pub fn all() -> impl Iterator<Item = Language> {
        LANGUAGES.iter().map(|l| Language(l.name))
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::ENGLISH
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s).ok_or_else(|| format!("unknown language: {s}"))
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Language::parse(&s).ok_or_else(|| D::Error::custom(format!("unknown language: {s}")))
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
