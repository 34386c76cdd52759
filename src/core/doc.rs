//! Reference documentation loader.
//!
//! Documentation is language-dependent, so the localization coordinator
//! re-triggers these loads whenever a language application succeeds. Loads
//! are fire-and-forget fetches; a completion arriving after teardown is
//! dropped on the floor.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{device_doc_url, param_doc_url};
use crate::core::error::FetchError;
use crate::core::i18n::I18nEngine;
use crate::core::lifecycle::Lifecycle;
use crate::core::localization::{DocSink, Translator};
use crate::models::DocSet;
use crate::utils::fetch_json;

/// Holds the loaded documentation sets. All state lives in signals; the
/// lifecycle handle bounds in-flight fetches.
#[derive(Clone)]
pub struct DocService {
    param_doc: RwSignal<Option<DocSet>>,
    device_doc: RwSignal<Option<DocSet>>,
    i18n: I18nEngine,
    lifecycle: Lifecycle,
}

impl DocService {
    pub fn new(i18n: I18nEngine, lifecycle: Lifecycle) -> Self {
        Self {
            param_doc: RwSignal::new(None),
            device_doc: RwSignal::new(None),
            i18n,
            lifecycle,
        }
    }

    /// General parameter documentation for the active language.
    pub fn param_doc(&self) -> RwSignal<Option<DocSet>> {
        self.param_doc
    }

    /// Documentation specific to the connected device.
    pub fn device_doc(&self) -> RwSignal<Option<DocSet>> {
        self.device_doc
    }

    fn fetch_into(&self, url: String, target: RwSignal<Option<DocSet>>) {
        let lifecycle = self.lifecycle.clone();
        spawn_local(async move {
            let result: Result<DocSet, FetchError> = fetch_json(&url).await;
            if lifecycle.is_cancelled() {
                return;
            }
            match result {
                Ok(doc) => target.set(Some(doc)),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("documentation unavailable ({}): {}", url, e).into(),
                    );
                }
            }
        });
    }
}

impl DocSink for DocService {
    fn load_param_doc(&self) {
        let lang = self.i18n.current_lang();
        self.fetch_into(param_doc_url(&lang), self.param_doc);
    }

    fn load_device_doc(&self, filename: &str) {
        let lang = self.i18n.current_lang();
        self.fetch_into(device_doc_url(&lang, filename), self.device_doc);
    }
}
