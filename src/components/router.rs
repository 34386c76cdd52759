//! Application router component.
//!
//! Hash-based routing on native `hashchange` events. Browser back/forward
//! and programmatic navigation through [`HashNavigator`] land in the same
//! code path, so the shell always renders the screen the URL names.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::shell::Shell;
use crate::core::NavigationSink;
use crate::models::AppRoute;

/// Navigation sink backed by the URL hash.
///
/// Pushing a route fires `hashchange`, which [`AppRouter`] picks up like any
/// user-driven navigation.
pub struct HashNavigator;

impl NavigationSink for HashNavigator {
    fn navigate(&self, route: AppRoute) {
        route.push();
    }
}

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! { <Shell route=route_memo /> }
}
