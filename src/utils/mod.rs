//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json`] - JSON fetching with timeout
//! - [`dom`] - Window, locale, and navigation helpers

pub mod dom;
mod fetch;

pub use fetch::fetch_json;
