// Language model types

use serde::{Deserialize, Serialize};

/// Language configured for an environment
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub codename: String,
    pub is_active: bool,
    pub is_default: bool,
}

impl Language {
    /// Heuristic used by the locale resolver: the API surfaces no single
    /// authoritative default-language concept, so English-looking entries are
    /// preferred.
    pub fn looks_english(&self) -> bool {
        self.codename == "en-US"
            || self.codename == "en"
            || self.name.to_lowercase().contains("english")
    }
}

/// Response of the language listing endpoint
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageListing {
    pub languages: Vec<Language>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_deserialization() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "English (United States)",
            "codename": "en-US",
            "is_active": true,
            "is_default": true
        }"#;

        let language: Language = serde_json::from_str(json).unwrap();
        assert_eq!(language.codename, "en-US");
        assert!(language.is_default);
        assert!(language.looks_english());
    }

    #[test]
    fn test_looks_english_by_name() {
        let language = Language {
            codename: "uk-english".to_string(),
            name: "British English".to_string(),
            ..Default::default()
        };
        assert!(language.looks_english());

        let french = Language {
            codename: "fr-FR".to_string(),
            name: "French".to_string(),
            ..Default::default()
        };
        assert!(!french.looks_english());
    }
}
