//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod header_state;
pub mod locale_state;
pub mod session;
pub mod ticker_state;

// Re-export main types
pub use header_state::{CountdownSnapshot, HeaderSettings, HeaderState};
pub use locale_state::LocaleState;
pub use session::UserSession;
pub use ticker_state::TickerState;
