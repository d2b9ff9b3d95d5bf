//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod locale_watcher;
pub mod ticker;

// Re-export main functions
pub use locale_watcher::locale_watcher_task;
pub use ticker::{spawn_ticker, TickerHandle};
