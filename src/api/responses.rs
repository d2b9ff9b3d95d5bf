//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::CountdownSnapshot;

/// Body of POST /locale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleRequest {
    pub locale: String,
}

/// Body of PUT /page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageTitleRequest {
    pub title: String,
}

/// Countdown response with the raw numbers behind the display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub display: String,
    pub minutes: String,
    pub seconds: String,
    pub elapsed_seconds: u64,
    pub remaining_seconds: i64,
    pub window_seconds: u64,
    pub overrun: bool,
    pub generation: u64,
    pub mounted_at: DateTime<Utc>,
}

impl CountdownResponse {
    pub fn from_snapshot(snapshot: CountdownSnapshot, window_seconds: u64) -> Self {
        Self {
            display: snapshot.display.to_string(),
            minutes: snapshot.display.minutes,
            seconds: snapshot.display.seconds,
            elapsed_seconds: snapshot.ticker.elapsed_seconds,
            remaining_seconds: snapshot.remaining_seconds,
            window_seconds,
            overrun: snapshot.overrun,
            generation: snapshot.ticker.generation,
            mounted_at: snapshot.ticker.mounted_at,
        }
    }
}

/// Active and supported locales
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleResponse {
    pub active: String,
    pub supported: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl LocaleResponse {
    pub fn new(active: String, supported: Vec<String>) -> Self {
        Self {
            active,
            supported,
            timestamp: Utc::now(),
        }
    }
}

/// Result of a locale switch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleChangeResponse {
    #[serde(flatten)]
    pub locale: LocaleResponse,
    /// False when the requested locale was already active
    pub changed: bool,
}

/// Response to state-changing requests without a richer body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiResponse {
    pub fn ok(message: String) -> Self {
        Self {
            status: "ok".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Error body for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            status: "error".to_string(),
            error,
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
    pub mounted: bool,
}

impl HealthResponse {
    pub fn ok(uptime: String, mounted: bool) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
            mounted,
        }
    }
}
