//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Capability`], [`CapabilitySet`] - Feature flags a device advertises
//! - [`ConnectionState`], [`DeviceSnapshot`] - Live device state transitions
//! - [`Language`], [`LanguageCatalog`] - Interface languages
//! - [`MenuEntry`], [`MenuIcon`] - Static menu configuration
//! - [`DocSet`], [`DocSection`] - Reference documentation payloads
//! - [`AppRoute`] - Hash-based navigation between feature screens

mod capability;
mod device;
mod doc;
mod lang;
mod menu;
mod route;

pub use capability::{Capability, CapabilitySet};
pub use device::{ConnectionState, DeviceSnapshot};
pub use doc::{DocSection, DocSet};
pub use lang::{Language, LanguageCatalog};
pub use menu::{MenuEntry, MenuIcon};
pub use route::AppRoute;
