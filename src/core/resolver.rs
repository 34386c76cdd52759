//! Capability-to-menu resolution.

use crate::models::{AppRoute, Capability, CapabilitySet, MenuEntry};

/// Outcome of resolving a device's capability set against the static menu
/// table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedMenu {
    /// Supported entries, in table order.
    pub entries: Vec<MenuEntry>,
    /// Screen to land on, if the device has any key capability.
    pub initial_route: Option<AppRoute>,
}

/// Filters `table` down to the entries the device supports and picks the
/// screen to land on.
///
/// Filtering is stable: entries keep the relative order of `table`. The full
/// keyboard page wins over the simplified key page when both capabilities
/// are present. With neither capability no route is selected and the caller
/// keeps its current one.
pub fn resolve(capabilities: CapabilitySet, table: &[MenuEntry]) -> ResolvedMenu {
    let entries = table
        .iter()
        .copied()
        .filter(|entry| capabilities.contains(entry.capability))
        .collect();

    let initial_route = if capabilities.contains(Capability::Key) {
        Some(AppRoute::Keyboard)
    } else if capabilities.contains(Capability::SimpleKey) {
        Some(AppRoute::SimpleKey)
    } else {
        None
    };

    ResolvedMenu {
        entries,
        initial_route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::configured_menus;

    fn caps(list: &[Capability]) -> CapabilitySet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_menu_is_order_preserving_subsequence() {
        let table = configured_menus();
        let resolved = resolve(caps(&[Capability::Light, Capability::Password]), &table);

        // Every resolved entry is supported...
        for entry in &resolved.entries {
            assert!(matches!(
                entry.capability,
                Capability::Password | Capability::Light
            ));
        }
        // ...and relative order matches the static table.
        let positions: Vec<usize> = resolved
            .entries
            .iter()
            .map(|e| table.iter().position(|t| t == e).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_key_and_password_target_keyboard_page() {
        let table = configured_menus();
        let resolved = resolve(caps(&[Capability::Key, Capability::Password]), &table);

        let routes: Vec<AppRoute> = resolved.entries.iter().map(|e| e.route).collect();
        assert_eq!(routes, vec![AppRoute::Keyboard, AppRoute::Password]);
        assert_eq!(resolved.initial_route, Some(AppRoute::Keyboard));
    }

    #[test]
    fn test_simplekey_only_targets_simplified_page() {
        let resolved = resolve(caps(&[Capability::SimpleKey]), &configured_menus());
        assert_eq!(resolved.initial_route, Some(AppRoute::SimpleKey));
        assert_eq!(resolved.entries.len(), 1);
        assert_eq!(resolved.entries[0].route, AppRoute::SimpleKey);
    }

    #[test]
    fn test_full_keyboard_wins_over_simplekey() {
        // Priority rule, not filtering: both entries stay in the menu.
        let resolved = resolve(
            caps(&[Capability::Key, Capability::SimpleKey]),
            &configured_menus(),
        );
        assert_eq!(resolved.initial_route, Some(AppRoute::Keyboard));
        assert_eq!(resolved.entries.len(), 2);
    }

    #[test]
    fn test_empty_capability_set_selects_nothing() {
        let resolved = resolve(CapabilitySet::EMPTY, &configured_menus());
        assert!(resolved.entries.is_empty());
        assert_eq!(resolved.initial_route, None);
    }

    #[test]
    fn test_no_key_capability_selects_no_route() {
        let resolved = resolve(
            caps(&[Capability::Password, Capability::Light]),
            &configured_menus(),
        );
        assert_eq!(resolved.initial_route, None);
        assert_eq!(resolved.entries.len(), 2);
    }
}
