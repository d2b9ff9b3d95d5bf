//! Configuration and CLI argument handling

use std::{path::PathBuf, sync::Arc, time::Duration};
use clap::Parser;

use crate::{
    clock::{CountdownWindow, OverrunPolicy, DEFAULT_WINDOW_SECONDS},
    error::Result,
    i18n::{Catalog, Translator},
    state::HeaderSettings,
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "header-clock")]
#[command(about = "Dashboard header state server with a countdown clock and locale switching")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Countdown window in seconds
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SECONDS)]
    pub window: u64,

    /// Milliseconds between ticks
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Display behaviour once the window has elapsed
    #[arg(long, value_enum, default_value_t = OverrunPolicy::Literal)]
    pub overrun: OverrunPolicy,

    /// Locale active at startup
    #[arg(short, long, default_value = "en")]
    pub locale: String,

    /// JSON translations file replacing the built-in tables
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Initial page title
    #[arg(long, default_value = "Overview")]
    pub page_title: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn header_settings(&self) -> HeaderSettings {
        HeaderSettings {
            window: CountdownWindow::new(self.window, self.overrun),
            tick_period: Duration::from_millis(self.tick_ms),
            initial_locale: self.locale.clone(),
            page_title: self.page_title.clone(),
        }
    }

    /// Built-in tables unless a translations file was given
    pub fn translator(&self) -> Result<Arc<dyn Translator>> {
        let catalog = match &self.translations {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::builtin(),
        };
        Ok(Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["header-clock"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");

        let settings = config.header_settings();
        assert_eq!(settings.window, CountdownWindow::default());
        assert_eq!(settings.tick_period, Duration::from_secs(1));
        assert_eq!(settings.initial_locale, "en");
        assert_eq!(config.translator().unwrap().locales(), vec!["de", "en", "fr"]);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "header-clock",
            "--window",
            "90",
            "--overrun",
            "clamp",
            "--tick-ms",
            "250",
            "-l",
            "fr",
            "-v",
        ])
        .unwrap();

        let settings = config.header_settings();
        assert_eq!(settings.window, CountdownWindow::new(90, OverrunPolicy::Clamp));
        assert_eq!(settings.tick_period, Duration::from_millis(250));
        assert_eq!(settings.initial_locale, "fr");
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(Config::try_parse_from(["header-clock", "--tick-ms", "0"]).is_err());
    }
}
