//! Device capability flags advertised by the peripheral.

/// A named feature a connected peripheral advertises.
///
/// Capabilities are discovered from the device's vendor-defined HID
/// collections during the open handshake and drive which feature screens
/// are reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Capability {
    /// Full programmable keyboard matrix.
    Key,
    /// Reduced key block without layers.
    SimpleKey,
    /// Password manager slots.
    Password,
    /// Stored text macros.
    Text,
    /// Lighting control.
    Light,
}

impl Capability {
    /// Every capability, in menu order.
    pub const ALL: [Capability; 5] = [
        Capability::Key,
        Capability::SimpleKey,
        Capability::Password,
        Capability::Text,
        Capability::Light,
    ];

    /// Maps a usage value from the vendor collection to a capability.
    pub fn from_usage(usage: u8) -> Option<Capability> {
        match usage {
            0x01 => Some(Capability::Key),
            0x02 => Some(Capability::SimpleKey),
            0x03 => Some(Capability::Password),
            0x04 => Some(Capability::Text),
            0x05 => Some(Capability::Light),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of capabilities, packed into a bitmask.
///
/// Cheap to copy and compare; iteration yields capabilities in the fixed
/// [`Capability::ALL`] order regardless of insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// The empty set.
    pub const EMPTY: CapabilitySet = CapabilitySet(0);

    pub fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Returns the set with `capability` added.
    pub fn with(self, capability: Capability) -> CapabilitySet {
        CapabilitySet(self.0 | capability.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CapabilitySet::EMPTY, CapabilitySet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = CapabilitySet::EMPTY;
        assert!(set.is_empty());
        for cap in Capability::ALL {
            assert!(!set.contains(cap));
        }
    }

    #[test]
    fn test_with_and_contains() {
        let set = CapabilitySet::EMPTY
            .with(Capability::Key)
            .with(Capability::Light);
        assert!(!set.is_empty());
        assert!(set.contains(Capability::Key));
        assert!(set.contains(Capability::Light));
        assert!(!set.contains(Capability::Password));
    }

    #[test]
    fn test_iter_order_is_fixed() {
        // Insertion order must not leak into iteration order.
        let set: CapabilitySet = [Capability::Light, Capability::Key, Capability::Password]
            .into_iter()
            .collect();
        let caps: Vec<Capability> = set.iter().collect();
        assert_eq!(
            caps,
            vec![Capability::Key, Capability::Password, Capability::Light]
        );
    }

    #[test]
    fn test_from_usage() {
        assert_eq!(Capability::from_usage(0x01), Some(Capability::Key));
        assert_eq!(Capability::from_usage(0x05), Some(Capability::Light));
        assert_eq!(Capability::from_usage(0x00), None);
        assert_eq!(Capability::from_usage(0x7f), None);
    }
}
