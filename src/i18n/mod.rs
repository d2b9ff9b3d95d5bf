//! Localization module
//!
//! Translation lookup for header labels. The catalog is a stand-in for the
//! dashboard's translation engine and only serves the keys the header uses.

pub mod catalog;

pub use catalog::{Catalog, Translator, APP_TITLE_KEY, FALLBACK_LOCALE};
