//! Ticker state structure and management

use chrono::{DateTime, Utc};

/// Elapsed-second counter for one mount of the header
#[derive(Debug, Clone)]
pub struct TickerState {
    /// Incremented on every mount; a ticker only writes to its own generation
    pub generation: u64,
    pub elapsed_seconds: u64,
    pub mounted_at: DateTime<Utc>,
}

impl TickerState {
    /// Create a fresh counter for the first mount
    pub fn new() -> Self {
        Self {
            generation: 0,
            elapsed_seconds: 0,
            mounted_at: Utc::now(),
        }
    }

    /// Start over for a new mount
    pub fn remount(&mut self) -> u64 {
        self.generation += 1;
        self.elapsed_seconds = 0;
        self.mounted_at = Utc::now();
        self.generation
    }

    /// Count one tick if it belongs to the current generation.
    /// Returns false for a stale ticker.
    pub fn tick(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }
}

impl Default for TickerState {
    fn default() -> Self {
        Self::new()
    }
}
