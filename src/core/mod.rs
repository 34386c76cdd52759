//! Startup orchestration core and collaborator facades.
//!
//! This module provides:
//! - [`resolve`] capability-to-menu resolution
//! - [`DeviceSessionWatcher`] and [`SaveGate`] device session handling
//! - [`LocalizationCoordinator`] language and documentation sequencing
//! - [`Lifecycle`] the shared cancellation signal
//! - [`DeviceService`], [`I18nEngine`], [`DocService`] collaborator facades
//! - [`hid`] WebHID transport glue

pub mod device;
pub mod doc;
pub mod error;
pub mod hid;
pub mod i18n;
pub mod lifecycle;
pub mod localization;
pub mod resolver;
pub mod session;

pub use device::DeviceService;
pub use doc::DocService;
pub use i18n::I18nEngine;
pub use lifecycle::Lifecycle;
pub use localization::{CatalogSource, DocSink, LocalizationCoordinator, RemoteCatalog, Translator};
pub use resolver::{ResolvedMenu, resolve};
pub use session::{DeviceQuery, DeviceSessionWatcher, NavigationSink, SaveGate};
