//! Hash-based routing between feature screens.

use crate::utils::dom;

/// Application routes for hash-based navigation.
///
/// One route per feature screen, plus [`Overview`](AppRoute::Overview) shown
/// until a device completes its open handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Landing screen: #/ or empty hash.
    Overview,
    /// Full keyboard editor: #/key
    Keyboard,
    /// Simplified key editor: #/simplekey
    SimpleKey,
    /// Password manager: #/pwd
    Password,
    /// Text macros: #/text
    Text,
    /// Lighting control: #/light
    Light,
}

impl AppRoute {
    /// Parse a URL hash into a route. Unknown paths fall back to the overview.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        match path.trim_end_matches('/') {
            "key" => Self::Keyboard,
            "simplekey" => Self::SimpleKey,
            "pwd" => Self::Password,
            "text" => Self::Text,
            "light" => Self::Light,
            _ => Self::Overview,
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Overview => "#/",
            Self::Keyboard => "#/key",
            Self::SimpleKey => "#/simplekey",
            Self::Password => "#/pwd",
            Self::Text => "#/text",
            Self::Light => "#/light",
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route.
    ///
    /// Setting the hash fires `hashchange`, so the router picks the change up
    /// the same way it picks up browser back/forward.
    pub fn push(self) {
        dom::set_hash(self.to_hash());
    }
}
