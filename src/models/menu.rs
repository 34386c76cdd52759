//! Static menu configuration records.

use crate::models::{AppRoute, Capability};

/// Semantic icon identifier for a menu entry.
///
/// Mapped to a themed icon in `components::icons`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Keyboard,
    Lock,
    Text,
    Light,
}

/// Immutable menu entry record.
///
/// The ordered list of all possible entries is fixed configuration data
/// (see `config::configured_menus`); which entries actually show is decided
/// per device by `core::resolver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Screen the entry navigates to.
    pub route: AppRoute,
    /// Icon identifier.
    pub icon: MenuIcon,
    /// Translation key for the display name.
    pub name: &'static str,
    /// Capability a device must advertise for the entry to appear.
    pub capability: Capability,
}
