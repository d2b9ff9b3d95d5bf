//! Active locale shared by every localized label

use tokio::sync::watch;
use tracing::{debug, info};

use crate::error::{HeaderError, Result};

/// Selected locale plus the fixed list it may be chosen from.
///
/// `select` is the only way to change the value; renderers that care about
/// changes hold a receiver from `subscribe`.
#[derive(Debug)]
pub struct LocaleState {
    supported: Vec<String>,
    active_tx: watch::Sender<String>,
}

impl LocaleState {
    /// Create the state with `initial` as the active locale
    pub fn new(supported: Vec<String>, initial: &str) -> Result<Self> {
        let state = Self {
            active_tx: watch::channel(initial.to_string()).0,
            supported,
        };
        state.ensure_supported(initial)?;
        Ok(state)
    }

    /// Currently active locale code
    pub fn active(&self) -> String {
        self.active_tx.borrow().clone()
    }

    /// Supported locale codes in selector order
    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    /// Switch the active locale. Returns whether the value changed.
    pub fn select(&self, code: &str) -> Result<bool> {
        self.ensure_supported(code)?;

        let changed = self.active_tx.send_if_modified(|active| {
            if active == code {
                return false;
            }
            *active = code.to_string();
            true
        });

        if changed {
            info!("Active locale switched to {}", code);
        } else {
            debug!("Locale {} already active", code);
        }
        Ok(changed)
    }

    /// Receive a notification on every locale switch
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.active_tx.subscribe()
    }

    fn ensure_supported(&self, code: &str) -> Result<()> {
        if self.supported.iter().any(|l| l == code) {
            Ok(())
        } else {
            Err(HeaderError::UnsupportedLocale {
                code: code.to_string(),
                supported: self.supported.join(", "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> Vec<String> {
        vec!["de".to_string(), "en".to_string(), "fr".to_string()]
    }

    #[test]
    fn test_initial_locale_must_be_supported() {
        assert!(LocaleState::new(locales(), "en").is_ok());
        assert!(matches!(
            LocaleState::new(locales(), "pt"),
            Err(HeaderError::UnsupportedLocale { .. })
        ));
    }

    #[test]
    fn test_select_unknown_keeps_active() {
        let state = LocaleState::new(locales(), "en").unwrap();
        let err = state.select("pt").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported locale: pt (supported: de, en, fr)");
        assert_eq!(state.active(), "en");
    }

    #[tokio::test]
    async fn test_subscribers_see_switch() {
        let state = LocaleState::new(locales(), "en").unwrap();
        let mut rx = state.subscribe();

        assert!(state.select("fr").unwrap());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "fr");
        assert_eq!(state.active(), "fr");
    }

    #[tokio::test]
    async fn test_reselecting_does_not_notify() {
        let state = LocaleState::new(locales(), "en").unwrap();
        let rx = state.subscribe();

        assert!(!state.select("en").unwrap());
        assert!(!rx.has_changed().unwrap());
    }
}
