//! Header Clock - state server for a dashboard's fixed header
//!
//! This library keeps the header's countdown clock ticking, formats it for
//! display, and holds the localized labels, locale selection and user
//! session props the header renders from.

pub mod config;
pub mod error;
pub mod clock;
pub mod i18n;
pub mod state;
pub mod view;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::HeaderError;
pub use clock::{CountdownDisplay, CountdownWindow, OverrunPolicy};
pub use state::HeaderState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
