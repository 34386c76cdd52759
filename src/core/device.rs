//! Device collaborator facade.
//!
//! Owns the live stream of device transitions surfaced to the rest of the
//! app as a signal, plus the dirty flag feature screens raise when they
//! stage edits. The WebHID transport underneath lives in [`crate::core::hid`].

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::hid;
use crate::core::session::DeviceQuery;
use crate::models::{Capability, ConnectionState, DeviceSnapshot};

/// Facade over the device transport. Cheap to copy; all state lives in
/// signals. Each field has a single writer: the transport publishes
/// snapshots, feature screens raise the dirty flag.
#[derive(Clone, Copy)]
pub struct DeviceService {
    snapshot: RwSignal<DeviceSnapshot>,
    changed: RwSignal<bool>,
}

impl DeviceService {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(DeviceSnapshot::default()),
            changed: RwSignal::new(false),
        }
    }

    /// The live stream of device transitions.
    pub fn snapshot(&self) -> RwSignal<DeviceSnapshot> {
        self.snapshot
    }

    /// Replaces the current snapshot. Called by the transport glue on every
    /// transition; detaching also clears the dirty flag since the staged
    /// edits no longer have a destination.
    pub fn publish(&self, snapshot: DeviceSnapshot) {
        if matches!(snapshot.state, ConnectionState::Detached) {
            self.changed.set(false);
        }
        self.snapshot.set(snapshot);
    }

    /// Raised by feature screens when an edit is staged.
    pub fn mark_changed(&self) {
        self.changed.set(true);
    }
}

impl Default for DeviceService {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceQuery for DeviceService {
    fn is_support(&self, capability: Capability) -> bool {
        self.snapshot.with(|d| d.capabilities.contains(capability))
    }

    fn is_connected(&self) -> bool {
        self.snapshot.with(|d| d.is_connected())
    }

    fn is_changed(&self) -> bool {
        self.changed.get()
    }

    fn filename(&self) -> String {
        self.snapshot.with(|d| d.filename.clone())
    }

    /// Fire-and-forget write through the transport; the dirty flag clears
    /// only once the device acknowledges.
    fn save(&self) {
        let service = *self;
        spawn_local(async move {
            if hid::save_settings().await.is_ok() {
                service.changed.set(false);
            }
        });
    }
}
