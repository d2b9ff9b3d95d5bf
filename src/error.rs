//! Error types for the header state server

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading translations or mutating header state
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Unsupported locale: {code} (supported: {supported})")]
    UnsupportedLocale { code: String, supported: String },

    #[error("Failed to read translations file: {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translations file: {path}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translations file defines no locales: {path}")]
    EmptyCatalog { path: PathBuf },

    #[error("Failed to lock {what}: {message}")]
    StateLock { what: &'static str, message: String },
}

impl HeaderError {
    pub(crate) fn lock<E: std::fmt::Display>(what: &'static str, error: E) -> Self {
        Self::StateLock {
            what,
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HeaderError>;
