//! Countdown formatting
//!
//! Converts elapsed seconds into the `mm:ss` text shown in the header.
//! Division truncates toward zero and the remainder keeps the sign of the
//! dividend, so once the window has elapsed the literal output turns into
//! strings such as `00:-1` or `-1:-1`. [`OverrunPolicy::Clamp`] pins the
//! display at `00:00` instead.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default countdown window: one hour
pub const DEFAULT_WINDOW_SECONDS: u64 = 60 * 60;

/// What the display does once elapsed time passes the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverrunPolicy {
    /// Keep the raw arithmetic, negative parts included
    #[default]
    Literal,
    /// Stop at zero
    Clamp,
}

/// Total countdown duration, fixed for the lifetime of a mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownWindow {
    seconds: u64,
    policy: OverrunPolicy,
}

impl CountdownWindow {
    pub fn new(seconds: u64, policy: OverrunPolicy) -> Self {
        Self { seconds, policy }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn policy(&self) -> OverrunPolicy {
        self.policy
    }

    /// Signed seconds left after `elapsed`, before any policy is applied
    pub fn remaining(&self, elapsed: u64) -> i64 {
        to_signed(self.seconds).saturating_sub(to_signed(elapsed))
    }

    /// Whether `elapsed` has run past the end of the window
    pub fn is_overrun(&self, elapsed: u64) -> bool {
        elapsed > self.seconds
    }

    /// Format the countdown for `elapsed` seconds since mount
    pub fn display(&self, elapsed: u64) -> CountdownDisplay {
        let remaining = match self.policy {
            OverrunPolicy::Literal => self.remaining(elapsed),
            OverrunPolicy::Clamp => self.remaining(elapsed).max(0),
        };
        CountdownDisplay::from_remaining(remaining)
    }
}

impl Default for CountdownWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SECONDS, OverrunPolicy::Literal)
    }
}

fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Two display strings making up the `mm:ss` clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownDisplay {
    pub minutes: String,
    pub seconds: String,
}

impl CountdownDisplay {
    /// Split signed remaining seconds into padded minutes and seconds
    pub fn from_remaining(remaining: i64) -> Self {
        Self {
            minutes: pad2(remaining / 60),
            seconds: pad2(remaining % 60),
        }
    }
}

impl std::fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.minutes, self.seconds)
    }
}

/// Left-pad the decimal text with `0` up to two characters.
/// Pads the text, not the number, so `-1` stays `-1`.
fn pad2(value: i64) -> String {
    format!("{:0>2}", value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(elapsed: u64) -> String {
        CountdownWindow::default().display(elapsed).to_string()
    }

    #[test]
    fn test_full_window_at_mount() {
        assert_eq!(literal(0), "60:00");
    }

    #[test]
    fn test_first_tick() {
        assert_eq!(literal(1), "59:59");
    }

    #[test]
    fn test_last_seconds_of_window() {
        assert_eq!(literal(3599), "00:01");
        assert_eq!(literal(3600), "00:00");
    }

    #[test]
    fn test_mid_window_padding() {
        assert_eq!(literal(3600 - 5 * 60 - 7), "05:07");
        assert_eq!(literal(3600 - 600), "10:00");
    }

    #[test]
    fn test_whole_window_matches_canonical_mm_ss() {
        for elapsed in 0..=3600u64 {
            let remaining = 3600 - elapsed;
            let expected = format!("{:02}:{:02}", remaining / 60, remaining % 60);
            assert_eq!(literal(elapsed), expected, "elapsed = {}", elapsed);
        }
    }

    #[test]
    fn test_literal_overrun_keeps_raw_arithmetic() {
        // minutes truncate toward zero, seconds keep the dividend's sign
        assert_eq!(literal(3601), "00:-1");
        assert_eq!(literal(3659), "00:-59");
        assert_eq!(literal(3660), "-1:00");
        assert_eq!(literal(3661), "-1:-1");
        assert_eq!(literal(3600 + 600), "-10:00");
    }

    #[test]
    fn test_clamp_overrun_stops_at_zero() {
        let window = CountdownWindow::new(DEFAULT_WINDOW_SECONDS, OverrunPolicy::Clamp);
        assert_eq!(window.display(3600).to_string(), "00:00");
        assert_eq!(window.display(3601).to_string(), "00:00");
        assert_eq!(window.display(u64::MAX).to_string(), "00:00");
        assert_eq!(window.display(0).to_string(), "60:00");
    }

    #[test]
    fn test_overrun_flag() {
        let window = CountdownWindow::default();
        assert!(!window.is_overrun(3600));
        assert!(window.is_overrun(3601));
        assert_eq!(window.remaining(3601), -1);
    }

    #[test]
    fn test_custom_window() {
        let window = CountdownWindow::new(90, OverrunPolicy::Literal);
        assert_eq!(window.display(0).to_string(), "01:30");
        assert_eq!(window.display(31).to_string(), "00:59");
    }

    #[test]
    fn test_display_is_pure() {
        let window = CountdownWindow::default();
        assert_eq!(window.display(1234), window.display(1234));
    }

    #[test]
    fn test_pad_only_short_values() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(60), "60");
        assert_eq!(pad2(-5), "-5");
        assert_eq!(pad2(123), "123");
    }
}
