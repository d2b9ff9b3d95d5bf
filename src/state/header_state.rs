//! Main header state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use tokio::sync::watch;
use tracing::{debug, info};

use super::{LocaleState, TickerState, UserSession};
use crate::{
    clock::{CountdownDisplay, CountdownWindow},
    error::{HeaderError, Result},
    i18n::{Translator, APP_TITLE_KEY},
    tasks::{spawn_ticker, TickerHandle},
    view::{HeaderView, LocaleSelector},
};

/// Startup settings for the header
#[derive(Debug, Clone)]
pub struct HeaderSettings {
    pub window: CountdownWindow,
    pub tick_period: Duration,
    pub initial_locale: String,
    pub page_title: String,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            window: CountdownWindow::default(),
            tick_period: Duration::from_secs(1),
            initial_locale: "en".to_string(),
            page_title: String::new(),
        }
    }
}

/// Snapshot of the countdown at one instant
#[derive(Debug, Clone)]
pub struct CountdownSnapshot {
    pub ticker: TickerState,
    pub remaining_seconds: i64,
    pub overrun: bool,
    pub display: CountdownDisplay,
}

/// Header state: the ticking counter, the active locale and the props
pub struct HeaderState {
    pub window: CountdownWindow,
    pub tick_period: Duration,
    /// Server metadata
    pub start_time: Instant,
    translator: Arc<dyn Translator>,
    locale: LocaleState,
    /// Elapsed-second counter; the ticker is the only writer
    ticker_tx: Arc<watch::Sender<TickerState>>,
    ticker: Mutex<Option<TickerHandle>>,
    page_title: Mutex<String>,
    session: Mutex<Option<UserSession>>,
}

impl std::fmt::Debug for HeaderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderState")
            .field("window", &self.window)
            .field("tick_period", &self.tick_period)
            .field("locale", &self.locale)
            .field("ticker", &self.ticker)
            .finish_non_exhaustive()
    }
}

impl HeaderState {
    /// Create an unmounted header. Fails if the initial locale is unknown.
    pub fn new(settings: HeaderSettings, translator: Arc<dyn Translator>) -> Result<Self> {
        let locale = LocaleState::new(translator.locales(), &settings.initial_locale)?;
        let (ticker_tx, _) = watch::channel(TickerState::new());

        Ok(Self {
            window: settings.window,
            tick_period: settings.tick_period,
            start_time: Instant::now(),
            translator,
            locale,
            ticker_tx: Arc::new(ticker_tx),
            ticker: Mutex::new(None),
            page_title: Mutex::new(settings.page_title),
            session: Mutex::new(None),
        })
    }

    /// Activate the header: reset the counter and start a fresh ticker.
    /// A ticker from a previous mount is cancelled first.
    pub fn mount(&self) -> Result<u64> {
        let mut ticker = self.ticker.lock().map_err(|e| HeaderError::lock("ticker", e))?;

        if let Some(previous) = ticker.take() {
            debug!("Cancelling ticker for generation {}", previous.generation());
            drop(previous);
        }

        let mut generation = 0;
        self.ticker_tx.send_modify(|state| generation = state.remount());

        *ticker = Some(spawn_ticker(
            Arc::clone(&self.ticker_tx),
            generation,
            self.tick_period,
            self.window,
        ));

        info!("Header mounted (generation {}, window {}s)", generation, self.window.seconds());
        Ok(generation)
    }

    /// Deactivate the header and wait for its ticker to exit.
    /// The counter keeps its last value.
    pub async fn unmount(&self) -> Result<()> {
        let handle = self.ticker.lock().map_err(|e| HeaderError::lock("ticker", e))?.take();

        match handle {
            Some(handle) => {
                let generation = handle.generation();
                handle.stop().await;
                info!("Header unmounted (generation {})", generation);
            }
            None => debug!("Unmount requested but header is not mounted"),
        }
        Ok(())
    }

    pub fn is_mounted(&self) -> Result<bool> {
        self.ticker
            .lock()
            .map(|ticker| ticker.is_some())
            .map_err(|e| HeaderError::lock("ticker", e))
    }

    /// Current counter state
    pub fn ticker_state(&self) -> TickerState {
        self.ticker_tx.borrow().clone()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.ticker_tx.borrow().elapsed_seconds
    }

    /// Countdown text for the current elapsed time
    pub fn countdown(&self) -> CountdownDisplay {
        self.window.display(self.elapsed_seconds())
    }

    pub fn countdown_snapshot(&self) -> CountdownSnapshot {
        let ticker = self.ticker_state();
        let elapsed = ticker.elapsed_seconds;
        CountdownSnapshot {
            remaining_seconds: self.window.remaining(elapsed),
            overrun: self.window.is_overrun(elapsed),
            display: self.window.display(elapsed),
            ticker,
        }
    }

    /// Switch the locale for every localized label
    pub fn set_locale(&self, code: &str) -> Result<bool> {
        self.locale.select(code)
    }

    pub fn active_locale(&self) -> String {
        self.locale.active()
    }

    pub fn supported_locales(&self) -> Vec<String> {
        self.locale.supported().to_vec()
    }

    pub fn subscribe_locale(&self) -> watch::Receiver<String> {
        self.locale.subscribe()
    }

    /// Translated application title in the active locale
    pub fn app_title(&self) -> String {
        self.translator.translate(&self.locale.active(), APP_TITLE_KEY)
    }

    pub fn set_page_title(&self, title: String) -> Result<()> {
        let mut page_title = self
            .page_title
            .lock()
            .map_err(|e| HeaderError::lock("page title", e))?;
        debug!("Page title set to {:?}", title);
        *page_title = title;
        Ok(())
    }

    pub fn page_title(&self) -> Result<String> {
        self.page_title
            .lock()
            .map(|title| title.clone())
            .map_err(|e| HeaderError::lock("page title", e))
    }

    /// Replace or clear the user session
    pub fn set_session(&self, user: Option<UserSession>) -> Result<()> {
        let mut session = self.session.lock().map_err(|e| HeaderError::lock("session", e))?;
        match &user {
            Some(user) => info!("Session set (avatar shown: {})", user.has_avatar()),
            None => info!("Session cleared"),
        }
        *session = user;
        Ok(())
    }

    pub fn session(&self) -> Result<Option<UserSession>> {
        self.session
            .lock()
            .map(|session| session.clone())
            .map_err(|e| HeaderError::lock("session", e))
    }

    /// Build the full render model
    pub fn render(&self) -> Result<HeaderView> {
        let session = self.session()?;
        let page_title = self.page_title()?;
        let selector = LocaleSelector {
            active: self.active_locale(),
            options: self.supported_locales(),
        };

        Ok(HeaderView::new(
            self.countdown(),
            &self.app_title(),
            &page_title,
            session.as_ref(),
            selector,
        ))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::OverrunPolicy, i18n::Catalog};

    fn header(settings: HeaderSettings) -> HeaderState {
        HeaderState::new(settings, Arc::new(Catalog::builtin())).unwrap()
    }

    #[test]
    fn test_unknown_initial_locale_rejected() {
        let settings = HeaderSettings {
            initial_locale: "pt".to_string(),
            ..HeaderSettings::default()
        };
        assert!(HeaderState::new(settings, Arc::new(Catalog::builtin())).is_err());
    }

    #[test]
    fn test_render_before_mount() {
        let state = header(HeaderSettings {
            page_title: "Fleet overview".to_string(),
            ..HeaderSettings::default()
        });
        let view = state.render().unwrap();

        assert_eq!(view.countdown, "60:00");
        assert_eq!(view.app_title, "OPERATIONS DASHBOARD");
        assert_eq!(view.page_title, "FLEET OVERVIEW");
        assert_eq!(view.locale_selector.active, "en");
        assert_eq!(view.locale_selector.options, vec!["de", "en", "fr"]);
        assert!(view.avatar.is_none());
        assert!(!state.is_mounted().unwrap());
    }

    #[test]
    fn test_locale_switch_relabels_title() {
        let state = header(HeaderSettings::default());
        assert!(state.set_locale("de").unwrap());
        assert_eq!(state.render().unwrap().app_title, "BETRIEBS-DASHBOARD");

        assert!(state.set_locale("xx").is_err());
        assert_eq!(state.active_locale(), "de");
    }

    #[test]
    fn test_session_controls_avatar() {
        let state = header(HeaderSettings::default());
        state
            .set_session(Some(UserSession {
                email: Some("ada@example.com".to_string()),
                name: None,
            }))
            .unwrap();
        assert!(state.render().unwrap().avatar.is_some());

        state.set_session(None).unwrap();
        assert!(state.render().unwrap().avatar.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_counts_down() {
        let state = header(HeaderSettings::default());
        state.mount().unwrap();
        assert!(state.is_mounted().unwrap());

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(state.elapsed_seconds(), 3);
        assert_eq!(state.countdown().to_string(), "59:57");
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_resets_counter() {
        let state = header(HeaderSettings::default());
        assert_eq!(state.mount().unwrap(), 1);
        tokio::time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(state.elapsed_seconds(), 5);

        assert_eq!(state.mount().unwrap(), 2);
        assert_eq!(state.elapsed_seconds(), 0);

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert_eq!(state.elapsed_seconds(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_freezes_counter() {
        let state = header(HeaderSettings::default());
        state.mount().unwrap();
        tokio::time::sleep(Duration::from_millis(4_500)).await;

        state.unmount().await.unwrap();
        assert!(!state.is_mounted().unwrap());
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(state.elapsed_seconds(), 4);

        // unmounting twice is harmless
        state.unmount().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_past_window() {
        let state = header(HeaderSettings {
            window: CountdownWindow::new(2, OverrunPolicy::Literal),
            ..HeaderSettings::default()
        });
        state.mount().unwrap();
        tokio::time::sleep(Duration::from_millis(3_500)).await;

        let snapshot = state.countdown_snapshot();
        assert_eq!(snapshot.ticker.elapsed_seconds, 3);
        assert_eq!(snapshot.remaining_seconds, -1);
        assert!(snapshot.overrun);
        assert_eq!(snapshot.display.to_string(), "00:-1");
    }
}
