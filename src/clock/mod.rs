//! Countdown clock module
//!
//! Pure conversion from elapsed seconds to the header's countdown text.

pub mod countdown;

pub use countdown::{CountdownDisplay, CountdownWindow, OverrunPolicy, DEFAULT_WINDOW_SECONDS};
