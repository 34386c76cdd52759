//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::MenuIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuKeyboard as Keyboard, LuLanguages as Language, LuLightbulb as Light, LuLock as Lock,
        LuPlug as Connect, LuSave as Save, LuType as Text,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChatLeftText as Text, BsKeyboard as Keyboard, BsLightbulb as Light, BsLockFill as Lock,
        BsPlug as Connect, BsSave as Save, BsTranslate as Language,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(KEYBOARD, Keyboard);
themed_icon!(LOCK, Lock);
themed_icon!(TEXT, Text);
themed_icon!(LIGHT, Light);
themed_icon!(SAVE, Save);
themed_icon!(LANGUAGE, Language);
themed_icon!(CONNECT, Connect);

/// Themed icon for a menu entry's semantic identifier.
pub fn menu_icon(icon: MenuIcon) -> Icon {
    match icon {
        MenuIcon::Keyboard => KEYBOARD,
        MenuIcon::Lock => LOCK,
        MenuIcon::Text => TEXT,
        MenuIcon::Light => LIGHT,
    }
}
