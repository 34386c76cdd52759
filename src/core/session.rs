//! Device session watching and the guarded save operation.

use crate::core::resolver::resolve;
use crate::models::{AppRoute, Capability, DeviceSnapshot, MenuEntry};

/// Navigation commands issued by the session watcher.
///
/// Implemented by the hash router; test doubles record the target instead.
pub trait NavigationSink {
    fn navigate(&self, route: AppRoute);
}

/// Live queries against the device collaborator.
///
/// Every read reflects the device state at call time; nothing is cached.
pub trait DeviceQuery {
    fn is_support(&self, capability: Capability) -> bool;
    fn is_connected(&self) -> bool;
    fn is_changed(&self) -> bool;
    fn filename(&self) -> String;
    fn save(&self);
}

/// Forwards "opened" transitions from the device stream into menu resolution
/// and navigation.
///
/// One instance lives for the page. The subscription feeding
/// [`on_update`](Self::on_update) is bounded by the shared
/// [`Lifecycle`](crate::core::Lifecycle) and must only be wired when the
/// platform exposes the device API.
pub struct DeviceSessionWatcher<N: NavigationSink> {
    table: Vec<MenuEntry>,
    nav: N,
    on_menu: Box<dyn Fn(Vec<MenuEntry>)>,
}

impl<N: NavigationSink> DeviceSessionWatcher<N> {
    /// `table` is the injected static menu configuration; `on_menu` receives
    /// the freshly resolved menu on every opened transition.
    pub fn new(table: Vec<MenuEntry>, nav: N, on_menu: impl Fn(Vec<MenuEntry>) + 'static) -> Self {
        Self {
            table,
            nav,
            on_menu: Box::new(on_menu),
        }
    }

    /// Handles one emission from the device stream.
    ///
    /// Menu assignment and navigation happen synchronously within this call.
    /// Updates that have not completed the open handshake are ignored; the
    /// menu is recomputed from scratch on each opened transition rather than
    /// patched.
    pub fn on_update(&self, device: &DeviceSnapshot) {
        if !device.is_opened() {
            return;
        }

        let resolved = resolve(device.capabilities, &self.table);
        (self.on_menu)(resolved.entries);
        if let Some(route) = resolved.initial_route {
            self.nav.navigate(route);
        }
    }
}

/// Guarded save operation.
///
/// Enabled only while a connected device has unsaved changes.
/// [`save`](SaveGate::save) does not re-check [`can_save`](SaveGate::can_save);
/// the UI gates the action.
#[derive(Clone, Copy)]
pub struct SaveGate<D: DeviceQuery> {
    device: D,
}

impl<D: DeviceQuery> SaveGate<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn can_save(&self) -> bool {
        self.device.is_connected() && self.device.is_changed()
    }

    pub fn save(&self) {
        self.device.save();
    }
}
