//! Root application module.
//!
//! Contains the [`AppContext`] definition (the externally observable view
//! state) and the [`App`] component, which wires the startup orchestration:
//! layout monitoring, the device session, and localization. The shared
//! cancellation signal is created first and threaded into every
//! subscription, and completed exactly once on teardown.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::components::router::HashNavigator;
use crate::config::{SMALL_SCREEN, UNSUPPORTED_NOTICE_KEY, WEBHID_SUPPORT_URL, configured_menus};
use crate::core::{
    DeviceService, DeviceSessionWatcher, DocService, I18nEngine, Lifecycle,
    LocalizationCoordinator, RemoteCatalog, Translator, hid,
};
use crate::models::{DeviceSnapshot, Language, MenuEntry};
use crate::utils::dom;

/// The coordinator type wired to the browser collaborators.
pub type AppLocalization = LocalizationCoordinator<I18nEngine, DeviceService, DocService>;

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The view-state fields (`compact`, `menus`, `lang`, `langs`) are each
/// written by exactly one component of the startup orchestration; everything
/// else only reads them.
#[derive(Clone)]
pub struct AppContext {
    /// Compact layout flag, written by the layout monitor.
    pub compact: RwSignal<bool>,
    /// Menu resolved from the connected device, written by the session
    /// watcher.
    pub menus: RwSignal<Vec<MenuEntry>>,
    /// Currently selected language, written by the localization coordinator.
    pub lang: RwSignal<Language>,
    /// Language catalog entries, written by the localization coordinator.
    pub langs: RwSignal<Vec<Language>>,
    /// Language key requested by the picker; consumed by the localization
    /// coordinator wiring.
    pub lang_request: RwSignal<Option<String>>,
    /// Device collaborator facade.
    pub device: DeviceService,
    /// Documentation collaborator facade.
    pub docs: DocService,
    /// Translation engine facade.
    pub i18n: I18nEngine,
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    // Created before anything subscribes; every subscription below is
    // bounded by it.
    let lifecycle = Lifecycle::new();

    let i18n = I18nEngine::new();
    let device = DeviceService::new();
    let docs = DocService::new(i18n, lifecycle.clone());

    let compact = RwSignal::new(false);
    let menus = RwSignal::new(Vec::new());
    let lang = RwSignal::new(Language::english());
    let langs = RwSignal::new(Vec::new());
    let lang_request = RwSignal::new(None::<String>);

    let localization: Rc<AppLocalization> = Rc::new(LocalizationCoordinator::new(
        i18n,
        device,
        docs.clone(),
        lifecycle.clone(),
        move |catalog| langs.set(catalog.languages().to_vec()),
        move |language| lang.set(language),
    ));

    provide_context(AppContext {
        compact,
        menus,
        lang,
        langs,
        lang_request,
        device,
        docs,
        i18n,
    });

    // Responsive layout monitor: each emission fully replaces the flag.
    let small_screen = use_media_query(SMALL_SCREEN);
    let apply_compact = lifecycle.guard(move |matched| compact.set(matched));
    Effect::new(move |_| apply_compact(small_screen.get()));

    // Device session. The presence check happens exactly once: without the
    // device API a localized notice is shown and no device interaction is
    // attempted for the rest of the session.
    if hid::is_available() {
        let watcher = DeviceSessionWatcher::new(configured_menus(), HashNavigator, move |entries| {
            menus.set(entries)
        });
        let on_update =
            lifecycle.guard(move |snapshot: DeviceSnapshot| watcher.on_update(&snapshot));
        let stream = device.snapshot();
        Effect::new(move |_| on_update(stream.get()));

        if let Err(e) = hid::watch_connections(device, &lifecycle) {
            web_sys::console::warn_1(&format!("device monitoring unavailable: {}", e).into());
        }

        // Reconnect a previously granted device without showing the chooser.
        spawn_local(async move {
            let _ = hid::open_granted_device(device).await;
        });
    } else {
        let notice = format!(
            "{}: {}",
            i18n.instant(UNSUPPORTED_NOTICE_KEY),
            WEBHID_SUPPORT_URL
        );
        dom::alert(&notice);
    }

    // Localization: fetch the catalog once, then apply the browser locale.
    // Documentation reloads are chained off every successful application.
    // Language picks from the shell arrive through `lang_request`; the
    // coordinator itself stays out of the view tree.
    {
        let localization = Rc::clone(&localization);
        Effect::new(move |_| {
            if let Some(key) = lang_request.get() {
                let localization = Rc::clone(&localization);
                spawn_local(async move {
                    localization.set_language(&key).await;
                });
            }
        });
    }
    spawn_local(async move {
        localization
            .initialize(&RemoteCatalog, dom::browser_language())
            .await;
    });

    on_cleanup(move || lifecycle.teardown());

    view! { <AppRouter /> }
}
