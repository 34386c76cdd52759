//! Main application shell.
//!
//! Header with language selection and the guarded save action, sidebar with
//! the resolved feature menu, and the routed page content. Collapses to the
//! compact layout under the viewport breakpoint.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::pages::{
    KeyboardPage, LightPage, OverviewPage, PasswordPage, SimpleKeyPage, TextPage,
};
use crate::config::APP_NAME;
use crate::core::{DeviceQuery, SaveGate, Translator, hid};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Application shell: header, sidebar menu, and the active page.
#[component]
pub fn Shell(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let device = ctx.device;
    let i18n = ctx.i18n;
    let menus = ctx.menus;
    let compact = ctx.compact;
    let langs = ctx.langs;
    let lang = ctx.lang;
    let lang_request = ctx.lang_request;

    let gate = SaveGate::new(device);
    let can_save = Signal::derive(move || gate.can_save());
    let connected = Signal::derive(move || device.is_connected());

    let on_language = move |ev: leptos::ev::Event| {
        let key = event_target_value(&ev);
        if !key.is_empty() {
            lang_request.set(Some(key));
        }
    };

    let on_connect = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            if let Err(e) = hid::request_device(device).await {
                web_sys::console::warn_1(&format!("device request failed: {}", e).into());
            }
        });
    };

    view! {
        <div class=css::shell class=(css::compact, move || compact.get())>
            <header class=css::topbar>
                <span class=css::title>{APP_NAME}</span>

                <div class=css::controls>
                    <Show when=move || !connected.get()>
                        <button class=css::connectButton on:click=on_connect>
                            <Icon icon=ic::CONNECT />
                            <span>{move || i18n.instant("action.connect")}</span>
                        </button>
                    </Show>

                    <span class=css::langIcon>
                        <Icon icon=ic::LANGUAGE />
                    </span>
                    <select class=css::langSelect on:change=on_language>
                        {move || {
                            let current = lang.get();
                            langs
                                .get()
                                .into_iter()
                                .map(|l| {
                                    let selected = l.key == current.key;
                                    view! {
                                        <option value=l.key.clone() selected=selected>
                                            {l.title.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>

                    <button
                        class=css::saveButton
                        on:click=move |_| gate.save()
                        disabled=move || !can_save.get()
                    >
                        <Icon icon=ic::SAVE />
                        <span>{move || i18n.instant("action.save")}</span>
                    </button>
                </div>
            </header>

            <div class=css::body>
                <nav class=css::sidebar>
                    {move || {
                        menus
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let active = move || route.get() == entry.route;
                                view! {
                                    <a
                                        class=css::menuItem
                                        class=(css::menuItemActive, active)
                                        href=entry.route.to_hash()
                                    >
                                        <span class=css::menuIcon>
                                            <Icon icon=ic::menu_icon(entry.icon) />
                                        </span>
                                        <span class=css::menuLabel>
                                            {move || i18n.instant(entry.name)}
                                        </span>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>

                <main class=css::content>
                    {move || match route.get() {
                        AppRoute::Overview => view! { <OverviewPage /> }.into_any(),
                        AppRoute::Keyboard => view! { <KeyboardPage /> }.into_any(),
                        AppRoute::SimpleKey => view! { <SimpleKeyPage /> }.into_any(),
                        AppRoute::Password => view! { <PasswordPage /> }.into_any(),
                        AppRoute::Text => view! { <TextPage /> }.into_any(),
                        AppRoute::Light => view! { <LightPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
