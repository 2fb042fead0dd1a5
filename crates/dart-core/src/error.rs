//! Error types for the DART website core.

use thiserror::Error;

/// Errors produced while loading site data or resolving user input.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Theme table has no entry for {0}")]
    MissingTheme(&'static str),

    #[error("Theme {theme} is missing required variable {variable}")]
    MissingVariable {
        theme: &'static str,
        variable: &'static str,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
