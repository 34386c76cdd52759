//! Point-in-time views of the connected peripheral.

use crate::models::CapabilitySet;

/// Connection lifecycle of the peripheral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No device present.
    #[default]
    Detached,
    /// Physically connected; the open handshake has not completed.
    Connected,
    /// Handshake complete, reports flowing.
    Opened,
}

/// Snapshot of the peripheral, emitted on every state transition.
///
/// Feature screens and navigation are derived from the `Opened` transition
/// only; a merely `Connected` device exposes nothing yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceSnapshot {
    pub state: ConnectionState,
    /// Capabilities probed from the device's vendor collections.
    pub capabilities: CapabilitySet,
    /// Stem used to locate the device-specific documentation file.
    pub filename: String,
}

impl DeviceSnapshot {
    /// Physically present, whether or not the handshake has completed.
    pub fn is_connected(&self) -> bool {
        !matches!(self.state, ConnectionState::Detached)
    }

    pub fn is_opened(&self) -> bool {
        matches!(self.state, ConnectionState::Opened)
    }
}
