//! Display language carried alongside a session.

use serde::{Deserialize, Serialize};

/// Language used for meaning text, labels and fallback templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Simplified Chinese.
    #[default]
    Zh,
    /// English.
    En,
    /// Japanese.
    Ja,
}

impl Language {
    /// Parse a language tag such as `zh`, `en-US` or `ja_JP`.
    pub fn parse(s: &str) -> Option<Self> {
        let tag = s.trim().to_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or("");
        match primary {
            "zh" | "cn" | "chinese" => Some(Self::Zh),
            "en" | "english" => Some(Self::En),
            "ja" | "jp" | "japanese" => Some(Self::Ja),
            _ => None,
        }
    }

    /// Short tag as stored on the session.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Separator used when joining keyword lists.
    pub fn list_separator(self) -> &'static str {
        match self {
            Self::En => ", ",
            Self::Zh | Self::Ja => "、",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variants() {
        assert_eq!(Language::parse("zh"), Some(Language::Zh));
        assert_eq!(Language::parse("EN-us"), Some(Language::En));
        assert_eq!(Language::parse("ja_JP"), Some(Language::Ja));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn default_is_chinese() {
        assert_eq!(Language::default(), Language::Zh);
    }

    #[test]
    fn serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Language::Ja).unwrap(), "\"ja\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
