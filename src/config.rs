//! Application configuration.
//!
//! Centralizes the constants used throughout the application, including the
//! static menu table the session watcher filters per device.

use crate::models::{AppRoute, Capability, MenuEntry, MenuIcon};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the shell header.
pub const APP_NAME: &str = "webkey";

// =============================================================================
// Layout Configuration
// =============================================================================

/// Viewport query bounding the compact layout.
pub const SMALL_SCREEN: &str = "(max-width: 700px)";

// =============================================================================
// Localization Configuration
// =============================================================================

/// Remote language catalog location.
pub const LANG_CATALOG_URL: &str = "assets/i18n/lang.json";

/// Language applied before the catalog resolves, and when the browser
/// reports no preference.
pub const DEFAULT_LANG: &str = "en";

/// Translation table for a language key.
pub fn translation_url(key: &str) -> String {
    format!("assets/i18n/{}.json", key)
}

/// General parameter documentation for a language.
pub fn param_doc_url(lang: &str) -> String {
    format!("assets/doc/{}/params.json", lang)
}

/// Device-specific documentation for a language.
pub fn device_doc_url(lang: &str, filename: &str) -> String {
    format!("assets/doc/{}/{}.json", lang, filename)
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Device Configuration
// =============================================================================

/// USB vendor id the device chooser filters on (pid.codes).
pub const VENDOR_ID: u16 = 0x1209;

/// Vendor-defined HID usage page advertising the feature collections.
pub const VENDOR_USAGE_PAGE: u32 = 0xFF60;

/// Report id of the persist-settings feature report.
pub const SAVE_REPORT_ID: u8 = 0x05;

/// Command byte asking the device to commit staged changes to flash.
pub const SAVE_COMMAND: u8 = 0x01;

/// Compatibility-lookup resource named by the unsupported-browser notice.
pub const WEBHID_SUPPORT_URL: &str = "https://caniuse.com/?search=webhid";

/// Translation key of the unsupported-browser notice.
pub const UNSUPPORTED_NOTICE_KEY: &str = "notice.webhid-unsupported";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Menu Configuration
// =============================================================================

/// The ordered table of every possible menu entry.
///
/// Fixed configuration data, injected into the session watcher so tests can
/// substitute their own table. Which entries actually show for a device is
/// decided by `core::resolver`; both key editors share one icon and display
/// name because a device only ever advertises one of the two.
pub fn configured_menus() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            route: AppRoute::Keyboard,
            icon: MenuIcon::Keyboard,
            name: "menu.keys",
            capability: Capability::Key,
        },
        MenuEntry {
            route: AppRoute::SimpleKey,
            icon: MenuIcon::Keyboard,
            name: "menu.keys",
            capability: Capability::SimpleKey,
        },
        MenuEntry {
            route: AppRoute::Password,
            icon: MenuIcon::Lock,
            name: "menu.passwords",
            capability: Capability::Password,
        },
        MenuEntry {
            route: AppRoute::Text,
            icon: MenuIcon::Text,
            name: "menu.macros",
            capability: Capability::Text,
        },
        MenuEntry {
            route: AppRoute::Light,
            icon: MenuIcon::Light,
            name: "menu.lighting",
            capability: Capability::Light,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_capability_maps_to_at_most_one_entry() {
        // Ties in menu resolution are impossible only while this holds.
        let table = configured_menus();
        for cap in Capability::ALL {
            let count = table.iter().filter(|e| e.capability == cap).count();
            assert!(count <= 1, "{:?} appears {} times", cap, count);
        }
    }

    #[test]
    fn test_routes_are_distinct() {
        let table = configured_menus();
        for (i, entry) in table.iter().enumerate() {
            assert!(
                !table[i + 1..].iter().any(|e| e.route == entry.route),
                "duplicate route {:?}",
                entry.route
            );
        }
    }
}
