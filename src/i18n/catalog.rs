//! Translation catalog used for header labels

use std::{collections::BTreeMap, path::Path};
use tracing::{debug, info};

use crate::error::{HeaderError, Result};

/// Key of the application title label
pub const APP_TITLE_KEY: &str = "appTitle";

/// Locale used when a key is missing from the active locale
pub const FALLBACK_LOCALE: &str = "en";

/// Lookup interface for localized labels
pub trait Translator: Send + Sync {
    /// Translate `key` for `locale`
    fn translate(&self, locale: &str, key: &str) -> String;

    /// Locale codes this translator can serve, sorted
    fn locales(&self) -> Vec<String>;
}

type Table = BTreeMap<String, String>;

/// In-memory translation tables keyed by locale code
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: BTreeMap<String, Table>,
}

impl Catalog {
    /// Tables shipped with the binary
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.insert("en", APP_TITLE_KEY, "Operations Dashboard");
        catalog.insert("fr", APP_TITLE_KEY, "Tableau de bord des opérations");
        catalog.insert("de", APP_TITLE_KEY, "Betriebs-Dashboard");
        catalog
    }

    /// Load tables from a JSON file shaped `{ "<locale>": { "<key>": "<text>" } }`
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading translations from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|source| HeaderError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        let tables: BTreeMap<String, Table> =
            serde_json::from_str(&raw).map_err(|source| HeaderError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;

        if tables.is_empty() {
            return Err(HeaderError::EmptyCatalog {
                path: path.to_path_buf(),
            });
        }

        info!("Loaded {} locales from {}", tables.len(), path.display());
        Ok(Self { tables })
    }

    /// Add or replace one entry
    pub fn insert(&mut self, locale: &str, key: &str, text: &str) {
        self.tables
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&String> {
        self.tables.get(locale).and_then(|table| table.get(key))
    }
}

impl Translator for Catalog {
    fn translate(&self, locale: &str, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(FALLBACK_LOCALE, key))
            .cloned()
            .unwrap_or_else(|| {
                debug!("Missing translation for {}:{}", locale, key);
                key.to_string()
            })
    }

    fn locales(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}
