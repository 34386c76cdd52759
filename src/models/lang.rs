//! Interface languages and the remote language catalog.

use serde::Deserialize;

/// A selectable interface language.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Language {
    /// BCP-47 primary subtag, e.g. `en` or `zh`.
    pub key: String,
    /// Native display title, e.g. `English` or `中文`.
    pub title: String,
}

impl Language {
    /// The built-in default, selected until the catalog resolves.
    pub fn english() -> Self {
        Self {
            key: "en".to_string(),
            title: "English".to_string(),
        }
    }
}

/// Ordered collection of languages, fetched once per page lifetime.
///
/// Keys are unique: duplicates in the source data are dropped, first
/// occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    pub fn new(languages: Vec<Language>) -> Self {
        let mut unique: Vec<Language> = Vec::with_capacity(languages.len());
        for lang in languages {
            if !unique.iter().any(|l| l.key == lang.key) {
                unique.push(lang);
            }
        }
        Self { languages: unique }
    }

    /// Single-entry catalog used when the remote fetch fails.
    pub fn fallback() -> Self {
        Self {
            languages: vec![Language::english()],
        }
    }

    /// Look a language up by its key.
    pub fn find(&self, key: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.key == key)
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
