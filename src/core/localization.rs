//! Localization coordination.
//!
//! Sequences the language side of startup: fetch the catalog once, apply an
//! initial language, and reload the dependent reference documentation every
//! time a language application succeeds. Device-specific documentation is
//! only requested while a device is connected at that moment.

use std::cell::RefCell;

use serde::Deserialize;

use crate::config::{DEFAULT_LANG, LANG_CATALOG_URL};
use crate::core::error::{FetchError, I18nError};
use crate::core::lifecycle::Lifecycle;
use crate::core::session::DeviceQuery;
use crate::models::{Language, LanguageCatalog};
use crate::utils::fetch_json;

/// Asynchronous activation interface of the translation engine.
pub trait Translator {
    /// Activates `key`. The engine may normalize the tag internally; read
    /// [`current_lang`](Self::current_lang) after completion for the key
    /// that actually became active.
    async fn use_lang(&self, key: &str) -> Result<(), I18nError>;

    /// Key of the active language.
    fn current_lang(&self) -> String;

    /// Synchronous string lookup; falls back to `key` itself when no table
    /// is loaded.
    fn instant(&self, key: &str) -> String;
}

/// One-shot source of the remote language catalog.
pub trait CatalogSource {
    async fn fetch_catalog(&self) -> Result<LanguageCatalog, FetchError>;
}

/// Documentation loads triggered after a language becomes active.
pub trait DocSink {
    /// Load the general parameter documentation.
    fn load_param_doc(&self);
    /// Load the documentation specific to the connected device.
    fn load_device_doc(&self, filename: &str);
}

/// Catalog source backed by the bundled catalog asset.
pub struct RemoteCatalog;

#[derive(Deserialize)]
struct CatalogWire {
    languages: Vec<Language>,
}

impl CatalogSource for RemoteCatalog {
    async fn fetch_catalog(&self) -> Result<LanguageCatalog, FetchError> {
        let wire: CatalogWire = fetch_json(LANG_CATALOG_URL).await?;
        Ok(LanguageCatalog::new(wire.languages))
    }
}

/// Coordinates catalog fetch, language application, and documentation
/// reloads.
///
/// Concurrent [`set_language`](Self::set_language) calls are not serialized:
/// each completes independently and the completion that lands last owns the
/// current-language state. Continuations observe the shared [`Lifecycle`]
/// after every suspension point, so completions arriving after teardown are
/// ignored.
pub struct LocalizationCoordinator<T, D, S>
where
    T: Translator,
    D: DeviceQuery,
    S: DocSink,
{
    translator: T,
    device: D,
    docs: S,
    lifecycle: Lifecycle,
    catalog: RefCell<LanguageCatalog>,
    on_catalog: Box<dyn Fn(LanguageCatalog)>,
    on_language: Box<dyn Fn(Language)>,
}

impl<T, D, S> LocalizationCoordinator<T, D, S>
where
    T: Translator,
    D: DeviceQuery,
    S: DocSink,
{
    /// `on_catalog` receives the stored catalog once it resolves;
    /// `on_language` receives every language that becomes current.
    pub fn new(
        translator: T,
        device: D,
        docs: S,
        lifecycle: Lifecycle,
        on_catalog: impl Fn(LanguageCatalog) + 'static,
        on_language: impl Fn(Language) + 'static,
    ) -> Self {
        Self {
            translator,
            device,
            docs,
            lifecycle,
            catalog: RefCell::new(LanguageCatalog::default()),
            on_catalog: Box::new(on_catalog),
            on_language: Box::new(on_language),
        }
    }

    /// Fetches the language catalog (one shot, no retry), stores it, then
    /// applies `preferred` (the browser locale) or the built-in default.
    ///
    /// A failed or empty fetch falls back to a single-entry default catalog
    /// instead of freezing the language UI on an empty list.
    pub async fn initialize(&self, source: &impl CatalogSource, preferred: Option<String>) {
        let catalog = match source.fetch_catalog().await {
            Ok(catalog) if !catalog.is_empty() => catalog,
            Ok(_) => LanguageCatalog::fallback(),
            Err(_e) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("language catalog unavailable: {}", _e).into(),
                );
                LanguageCatalog::fallback()
            }
        };

        if self.lifecycle.is_cancelled() {
            return;
        }

        *self.catalog.borrow_mut() = catalog.clone();
        (self.on_catalog)(catalog);

        let key = preferred.unwrap_or_else(|| DEFAULT_LANG.to_string());
        self.set_language(&key).await;
    }

    /// Applies `key`.
    ///
    /// On successful activation the stored catalog is searched by the
    /// engine's *active* key (which may differ from `key`). Only a catalog
    /// match updates the current language and triggers documentation loads;
    /// a miss is a deliberate no-op.
    pub async fn set_language(&self, key: &str) {
        if self.translator.use_lang(key).await.is_err() {
            return;
        }
        if self.lifecycle.is_cancelled() {
            return;
        }

        let active = self.translator.current_lang();
        let Some(language) = self.catalog.borrow().find(&active).cloned() else {
            return;
        };

        (self.on_language)(language);

        self.docs.load_param_doc();
        if self.device.is_connected() {
            self.docs.load_device_doc(&self.device.filename());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Capability;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MockTranslator {
        active: Rc<RefCell<String>>,
        fail: Rc<Cell<bool>>,
        /// Yields before each activation completes, popped per call.
        delays: Rc<RefCell<VecDeque<usize>>>,
        /// Engine-side normalization: forces the active key after success.
        normalize_to: Rc<RefCell<Option<String>>>,
    }

    impl Translator for MockTranslator {
        async fn use_lang(&self, key: &str) -> Result<(), I18nError> {
            let delay = self.delays.borrow_mut().pop_front().unwrap_or(0);
            for _ in 0..delay {
                tokio::task::yield_now().await;
            }
            if self.fail.get() {
                return Err(I18nError::UnknownLanguage(key.to_string()));
            }
            let active = self
                .normalize_to
                .borrow()
                .clone()
                .unwrap_or_else(|| key.to_string());
            *self.active.borrow_mut() = active;
            Ok(())
        }

        fn current_lang(&self) -> String {
            self.active.borrow().clone()
        }

        fn instant(&self, key: &str) -> String {
            key.to_string()
        }
    }

    #[derive(Clone, Default)]
    struct MockDocs {
        param_loads: Rc<Cell<usize>>,
        device_loads: Rc<RefCell<Vec<String>>>,
    }

    impl DocSink for MockDocs {
        fn load_param_doc(&self) {
            self.param_loads.set(self.param_loads.get() + 1);
        }
        fn load_device_doc(&self, filename: &str) {
            self.device_loads.borrow_mut().push(filename.to_string());
        }
    }

    #[derive(Clone, Default)]
    struct MockDevice {
        connected: Rc<Cell<bool>>,
    }

    impl DeviceQuery for MockDevice {
        fn is_support(&self, _capability: Capability) -> bool {
            false
        }
        fn is_connected(&self) -> bool {
            self.connected.get()
        }
        fn is_changed(&self) -> bool {
            false
        }
        fn filename(&self) -> String {
            "1209-0001".to_string()
        }
        fn save(&self) {}
    }

    struct MockSource {
        result: RefCell<Option<Result<LanguageCatalog, FetchError>>>,
        delay: usize,
    }

    impl MockSource {
        fn ok(catalog: LanguageCatalog) -> Self {
            Self {
                result: RefCell::new(Some(Ok(catalog))),
                delay: 0,
            }
        }
        fn err() -> Self {
            Self {
                result: RefCell::new(Some(Err(FetchError::Timeout))),
                delay: 0,
            }
        }
    }

    impl CatalogSource for MockSource {
        async fn fetch_catalog(&self) -> Result<LanguageCatalog, FetchError> {
            for _ in 0..self.delay {
                tokio::task::yield_now().await;
            }
            self.result.borrow_mut().take().expect("catalog fetched twice")
        }
    }

    fn test_catalog() -> LanguageCatalog {
        LanguageCatalog::new(vec![
            Language {
                key: "en".to_string(),
                title: "English".to_string(),
            },
            Language {
                key: "zh".to_string(),
                title: "中文".to_string(),
            },
        ])
    }

    struct Harness {
        translator: MockTranslator,
        device: MockDevice,
        docs: MockDocs,
        lifecycle: Lifecycle,
        current: Rc<RefCell<Option<Language>>>,
        catalogs: Rc<RefCell<Vec<LanguageCatalog>>>,
        coordinator: LocalizationCoordinator<MockTranslator, MockDevice, MockDocs>,
    }

    fn harness() -> Harness {
        let translator = MockTranslator::default();
        let device = MockDevice::default();
        let docs = MockDocs::default();
        let lifecycle = Lifecycle::new();
        let current: Rc<RefCell<Option<Language>>> = Rc::default();
        let catalogs: Rc<RefCell<Vec<LanguageCatalog>>> = Rc::default();

        let current_sink = Rc::clone(&current);
        let catalog_sink = Rc::clone(&catalogs);
        let coordinator = LocalizationCoordinator::new(
            translator.clone(),
            device.clone(),
            docs.clone(),
            lifecycle.clone(),
            move |catalog| catalog_sink.borrow_mut().push(catalog),
            move |language| *current_sink.borrow_mut() = Some(language),
        );

        Harness {
            translator,
            device,
            docs,
            lifecycle,
            current,
            catalogs,
            coordinator,
        }
    }

    async fn initialized(h: &Harness) {
        h.coordinator
            .initialize(&MockSource::ok(test_catalog()), None)
            .await;
    }

    #[tokio::test]
    async fn test_initialize_applies_default_language() {
        let h = harness();
        initialized(&h).await;

        assert_eq!(h.catalogs.borrow().len(), 1);
        assert_eq!(
            h.current.borrow().as_ref().map(|l| l.key.clone()),
            Some("en".to_string())
        );
        assert_eq!(h.docs.param_loads.get(), 1);
    }

    #[tokio::test]
    async fn test_initialize_prefers_browser_locale() {
        let h = harness();
        h.coordinator
            .initialize(&MockSource::ok(test_catalog()), Some("zh".to_string()))
            .await;

        assert_eq!(
            h.current.borrow().as_ref().map(|l| l.title.clone()),
            Some("中文".to_string())
        );
    }

    #[tokio::test]
    async fn test_set_language_match_updates_and_loads_docs_once() {
        let h = harness();
        initialized(&h).await;

        h.coordinator.set_language("zh").await;

        assert_eq!(
            h.current.borrow().as_ref().map(|l| l.key.clone()),
            Some("zh".to_string())
        );
        // One load from initialize, exactly one from the switch.
        assert_eq!(h.docs.param_loads.get(), 2);
        assert!(h.docs.device_loads.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_set_language_no_catalog_match_is_a_no_op() {
        let h = harness();
        initialized(&h).await;
        h.docs.param_loads.set(0);

        // Activation succeeds, but "xx" is not in the catalog.
        h.coordinator.set_language("xx").await;

        assert_eq!(
            h.current.borrow().as_ref().map(|l| l.key.clone()),
            Some("en".to_string())
        );
        assert_eq!(h.docs.param_loads.get(), 0);
    }

    #[tokio::test]
    async fn test_catalog_lookup_uses_active_key_not_requested() {
        let h = harness();
        initialized(&h).await;

        // The engine normalizes "zh-TW" down to "zh".
        *h.translator.normalize_to.borrow_mut() = Some("zh".to_string());
        h.coordinator.set_language("zh-TW").await;

        assert_eq!(
            h.current.borrow().as_ref().map(|l| l.key.clone()),
            Some("zh".to_string())
        );
    }

    #[tokio::test]
    async fn test_activation_failure_loads_nothing() {
        let h = harness();
        initialized(&h).await;
        h.docs.param_loads.set(0);

        h.translator.fail.set(true);
        h.coordinator.set_language("zh").await;

        assert_eq!(
            h.current.borrow().as_ref().map(|l| l.key.clone()),
            Some("en".to_string())
        );
        assert_eq!(h.docs.param_loads.get(), 0);
    }

    #[tokio::test]
    async fn test_connected_device_also_loads_device_doc() {
        let h = harness();
        h.device.connected.set(true);
        initialized(&h).await;

        assert_eq!(h.docs.param_loads.get(), 1);
        assert_eq!(*h.docs.device_loads.borrow(), vec!["1209-0001".to_string()]);
    }

    #[tokio::test]
    async fn test_catalog_fetch_failure_falls_back_to_default_catalog() {
        let h = harness();
        h.coordinator.initialize(&MockSource::err(), None).await;

        // The fallback catalog still resolves the default language, so the
        // language UI keeps working and documentation still loads.
        assert_eq!(h.catalogs.borrow().len(), 1);
        assert_eq!(h.catalogs.borrow()[0], LanguageCatalog::fallback());
        assert_eq!(
            h.current.borrow().as_ref().map(|l| l.key.clone()),
            Some("en".to_string())
        );
        assert_eq!(h.docs.param_loads.get(), 1);
    }

    #[tokio::test]
    async fn test_last_completion_wins_language_race() {
        let h = harness();
        initialized(&h).await;

        // First call suspends longer than the second: "en" completes first,
        // then the "zh" completion lands and owns the final state.
        h.translator.delays.borrow_mut().extend([4, 0]);
        tokio::join!(
            h.coordinator.set_language("zh"),
            h.coordinator.set_language("en"),
        );

        assert_eq!(
            h.current.borrow().as_ref().map(|l| l.key.clone()),
            Some("zh".to_string())
        );
        // Both completions loaded documentation independently.
        assert_eq!(h.docs.param_loads.get(), 3);
    }

    #[tokio::test]
    async fn test_teardown_during_activation_discards_completion() {
        let h = harness();
        initialized(&h).await;
        h.docs.param_loads.set(0);

        h.translator.delays.borrow_mut().push_back(3);
        tokio::join!(h.coordinator.set_language("zh"), async {
            h.lifecycle.teardown();
        });

        assert_eq!(
            h.current.borrow().as_ref().map(|l| l.key.clone()),
            Some("en".to_string())
        );
        assert_eq!(h.docs.param_loads.get(), 0);
    }

    #[tokio::test]
    async fn test_teardown_during_catalog_fetch_discards_completion() {
        let h = harness();
        let source = MockSource {
            result: RefCell::new(Some(Ok(test_catalog()))),
            delay: 3,
        };

        tokio::join!(h.coordinator.initialize(&source, None), async {
            h.lifecycle.teardown();
        });

        assert!(h.catalogs.borrow().is_empty());
        assert!(h.current.borrow().is_none());
        assert_eq!(h.docs.param_loads.get(), 0);
    }
}
