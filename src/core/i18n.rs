//! Translation engine facade.
//!
//! Loads per-language string tables from the bundled i18n assets and answers
//! synchronous lookups. Activation normalizes BCP-47 tags to their primary
//! subtag, so the key that becomes active can legitimately differ from the
//! key that was requested (`en-US` activates `en`).

use std::collections::HashMap;

use leptos::prelude::*;

use crate::config::translation_url;
use crate::core::error::{FetchError, I18nError};
use crate::core::localization::Translator;
use crate::utils::fetch_json;

/// Reactive translation engine. Cheap to copy; all state lives in signals.
#[derive(Clone, Copy)]
pub struct I18nEngine {
    table: RwSignal<HashMap<String, String>>,
    current: RwSignal<String>,
}

impl I18nEngine {
    /// Creates an engine with no table loaded; [`instant`](Self::instant)
    /// falls back to the lookup key until one is activated.
    pub fn new() -> Self {
        Self {
            table: RwSignal::new(HashMap::new()),
            current: RwSignal::new(String::new()),
        }
    }

    async fn activate(&self, key: &str) -> Result<(), I18nError> {
        let normalized = normalize(key);
        let table: HashMap<String, String> = fetch_json(&translation_url(&normalized))
            .await
            .map_err(|e| match e {
                FetchError::Http(404) => I18nError::UnknownLanguage(normalized.clone()),
                other => I18nError::Load(other),
            })?;

        self.table.set(table);
        self.current.set(normalized);
        Ok(())
    }
}

impl Default for I18nEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for I18nEngine {
    async fn use_lang(&self, key: &str) -> Result<(), I18nError> {
        self.activate(key).await
    }

    fn current_lang(&self) -> String {
        self.current.get()
    }

    /// Reactive: views calling this re-render when a new table is activated.
    fn instant(&self, key: &str) -> String {
        self.table
            .with(|t| t.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }
}

/// Reduce a BCP-47 tag to its lowercase primary subtag.
fn normalize(key: &str) -> String {
    key.split(['-', '_'])
        .next()
        .unwrap_or(key)
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_primary_subtag() {
        assert_eq!(normalize("en"), "en");
        assert_eq!(normalize("en-US"), "en");
        assert_eq!(normalize("zh_TW"), "zh");
        assert_eq!(normalize("DE"), "de");
    }

    #[test]
    fn test_instant_falls_back_to_key() {
        let engine = I18nEngine::new();
        assert_eq!(engine.instant("menu.keys"), "menu.keys");
    }
}
