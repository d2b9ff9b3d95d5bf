//! Locale watcher background task

use std::sync::Arc;
use tracing::{info, warn};

use crate::state::HeaderState;

/// Background task that re-renders the header whenever the locale switches
pub async fn locale_watcher_task(state: Arc<HeaderState>) {
    info!("Starting locale watcher task");

    let mut locale_rx = state.subscribe_locale();

    while locale_rx.changed().await.is_ok() {
        let locale = locale_rx.borrow_and_update().clone();

        match state.render() {
            Ok(view) => info!(
                "Header relabelled for {}: {} / {}",
                locale, view.app_title, view.page_title
            ),
            Err(e) => warn!("Failed to re-render header for {}: {}", locale, e),
        }
    }

    info!("Locale channel closed, stopping locale watcher");
}
