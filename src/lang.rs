use serde::{Deserialize, Serialize};

/// Display language for project descriptions. Japanese is the site's primary
/// language; English is the fallback every record must carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    En,
    #[default]
    Ja,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ja,
            Language::Ja => Language::En,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ja => "JA",
        }
    }
}

/// A piece of text with an English base and an optional Japanese variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    #[serde(default)]
    pub ja: Option<String>,
}

impl Localized {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ja => self.ja.as_deref().unwrap_or(&self.en),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Language::En.toggled(), Language::Ja);
        assert_eq!(Language::Ja.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_default_is_japanese() {
        assert_eq!(Language::default(), Language::Ja);
    }

    #[test]
    fn test_localized_fallback() {
        let both = Localized {
            en: "hello".to_string(),
            ja: Some("こんにちは".to_string()),
        };
        assert_eq!(both.get(Language::En), "hello");
        assert_eq!(both.get(Language::Ja), "こんにちは");

        let english_only = Localized {
            en: "hello".to_string(),
            ja: None,
        };
        assert_eq!(english_only.get(Language::Ja), "hello");
    }
}
