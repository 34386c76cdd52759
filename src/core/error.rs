//! Custom error types for the application.
//!
//! One enum per domain:
//!
//! - [`HidError`] - WebHID access and device transport errors
//! - [`FetchError`] - Network errors for catalog, translation, and doc requests
//! - [`I18nError`] - Translation activation errors

use std::fmt;

/// WebHID access and device transport errors.
#[derive(Debug, Clone)]
pub enum HidError {
    /// Browser window not available
    NoWindow,
    /// The browser does not expose `navigator.hid`
    Unsupported,
    /// The chooser or a transport call could not be issued
    RequestFailed(String),
    /// No device was selected or none is open
    NoDevice,
    /// The open handshake was rejected
    OpenFailed(String),
    /// A feature report write was rejected
    WriteFailed(String),
}

impl fmt::Display for HidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::Unsupported => write!(f, "WebHID is not available in this browser"),
            Self::RequestFailed(msg) => write!(f, "Device request failed: {}", msg),
            Self::NoDevice => write!(f, "No device available"),
            Self::OpenFailed(msg) => write!(f, "Device open handshake failed: {}", msg),
            Self::WriteFailed(msg) => write!(f, "Device write failed: {}", msg),
        }
    }
}

impl std::error::Error for HidError {}

/// Network errors for catalog, translation, and documentation requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to build the HTTP request
    Request,
    /// Network failure (offline, CORS, DNS)
    Network(String),
    /// Non-2xx response status
    Http(u16),
    /// Failed to read the response body
    Body,
    /// Response body was not the expected JSON shape
    Json(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::Request => write!(f, "Failed to create request"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Http(status) => write!(f, "HTTP error: {}", status),
            Self::Body => write!(f, "Failed to read response body"),
            Self::Json(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Translation activation errors.
#[derive(Debug, Clone)]
pub enum I18nError {
    /// No translation table exists for the requested key
    UnknownLanguage(String),
    /// The table exists but could not be loaded
    Load(FetchError),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLanguage(key) => write!(f, "Unknown language: {}", key),
            Self::Load(e) => write!(f, "Failed to load translations: {}", e),
        }
    }
}

impl std::error::Error for I18nError {}
