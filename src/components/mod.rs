//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`shell`] - Application shell: header, sidebar menu, page content
//! - [`pages`] - One thin screen per feature route
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod pages;
pub mod router;
pub mod shell;

pub use router::AppRouter;
