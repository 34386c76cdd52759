//! Reference documentation payloads.

use serde::Deserialize;

/// One documented parameter group.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DocSection {
    /// Stable identifier; feature pages filter on its prefix (`key.`, `pwd.`, …).
    pub id: String,
    pub title: String,
    pub body: String,
}

/// A set of documentation sections fetched for the active language.
///
/// Used for both the general parameter documentation and the
/// device-specific documentation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DocSet {
    #[serde(default)]
    pub sections: Vec<DocSection>,
}

impl DocSet {
    /// Sections whose id starts with `prefix`, in document order.
    pub fn sections_for(&self, prefix: &str) -> Vec<DocSection> {
        self.sections
            .iter()
            .filter(|s| s.id.starts_with(prefix))
            .cloned()
            .collect()
    }
}
