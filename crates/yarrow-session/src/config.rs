//! Engine configuration.

use yarrow_core::Language;

/// Configuration for a [`SessionEngine`](crate::SessionEngine).
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Language for sessions created without one.
    pub default_language: Language,
}

impl EngineConfig {
    /// Set the default language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(EngineConfig::default().default_language, Language::Zh);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default().with_language(Language::Ja);
        assert_eq!(cfg.default_language, Language::Ja);
    }
}
