//! Feature pages.
//!
//! Thin screens, one per route. Each renders its slice of the parameter
//! documentation for the active language; edits staged through the inputs
//! raise the device's dirty flag, which arms the save action in the shell.
//! The wire protocol behind actual parameter writes lives with the device
//! transport, not here.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::{DeviceQuery, Translator};
use crate::models::DocSet;

stylance::import_crate_style!(css, "src/components/pages.module.css");

/// Documentation sections for one feature, with a staging input per section.
#[component]
fn FeaturePage(title_key: &'static str, prefix: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let device = ctx.device;
    let i18n = ctx.i18n;
    let param_doc = ctx.docs.param_doc();

    view! {
        <div class=css::page>
            <h2 class=css::pageTitle>{move || i18n.instant(title_key)}</h2>
            {move || {
                let sections = param_doc
                    .get()
                    .map(|doc| doc.sections_for(prefix))
                    .unwrap_or_default();
                if sections.is_empty() {
                    view! {
                        <p class=css::empty>{move || i18n.instant("doc.pending")}</p>
                    }
                        .into_any()
                } else {
                    sections
                        .into_iter()
                        .map(|section| {
                            view! {
                                <section class=css::section>
                                    <h3 class=css::sectionTitle>{section.title.clone()}</h3>
                                    <p class=css::sectionBody>{section.body.clone()}</p>
                                    <input
                                        class=css::paramInput
                                        on:input=move |_| device.mark_changed()
                                    />
                                </section>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

/// Landing screen shown until a device completes its open handshake.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let device = ctx.device;
    let i18n = ctx.i18n;
    let device_doc = ctx.docs.device_doc();

    view! {
        <div class=css::page>
            <h2 class=css::pageTitle>{move || i18n.instant("overview.title")}</h2>
            <Show
                when=move || device.is_connected()
                fallback=move || {
                    view! {
                        <p class=css::empty>{move || i18n.instant("overview.disconnected")}</p>
                    }
                }
            >
                <p class=css::deviceLine>
                    {move || i18n.instant("overview.connected")} " " {move || device.filename()}
                </p>
            </Show>
            {move || device_doc.get().map(device_doc_view)}
        </div>
    }
}

fn device_doc_view(doc: DocSet) -> impl IntoView {
    doc.sections
        .into_iter()
        .map(|section| {
            view! {
                <section class=css::section>
                    <h3 class=css::sectionTitle>{section.title.clone()}</h3>
                    <p class=css::sectionBody>{section.body.clone()}</p>
                </section>
            }
        })
        .collect_view()
}

#[component]
pub fn KeyboardPage() -> impl IntoView {
    view! { <FeaturePage title_key="menu.keys" prefix="key." /> }
}

#[component]
pub fn SimpleKeyPage() -> impl IntoView {
    view! { <FeaturePage title_key="menu.keys" prefix="simplekey." /> }
}

#[component]
pub fn PasswordPage() -> impl IntoView {
    view! { <FeaturePage title_key="menu.passwords" prefix="pwd." /> }
}

#[component]
pub fn TextPage() -> impl IntoView {
    view! { <FeaturePage title_key="menu.macros" prefix="text." /> }
}

#[component]
pub fn LightPage() -> impl IntoView {
    view! { <FeaturePage title_key="menu.lighting" prefix="light." /> }
}
