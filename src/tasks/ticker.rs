//! Countdown ticker background task

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{oneshot, watch},
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    clock::{CountdownWindow, OverrunPolicy},
    state::TickerState,
};

/// Owner of a running ticker task.
///
/// Stopping or dropping the handle cancels the task, so the ticker never
/// outlives the mount that started it.
#[derive(Debug)]
pub struct TickerHandle {
    generation: u64,
    cancel_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Mount generation this ticker writes to
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancel the task and wait until it has exited
    pub async fn stop(mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    warn!("Ticker task for generation {} failed: {}", self.generation, e);
                }
            }
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Spawn a ticker that adds one second to `generation`'s counter every
/// `period`. The first tick lands one full period after the call.
/// Ticks missed while the runtime was stalled are not replayed.
pub fn spawn_ticker(
    ticker_tx: Arc<watch::Sender<TickerState>>,
    generation: u64,
    period: Duration,
    window: CountdownWindow,
) -> TickerHandle {
    let (cancel_tx, cancel_rx) = oneshot::channel();
    let task = tokio::spawn(ticker_task(
        ticker_tx,
        generation,
        period,
        window,
        cancel_rx,
    ));

    TickerHandle {
        generation,
        cancel_tx: Some(cancel_tx),
        task: Some(task),
    }
}

async fn ticker_task(
    ticker_tx: Arc<watch::Sender<TickerState>>,
    generation: u64,
    period: Duration,
    window: CountdownWindow,
    mut cancel_rx: oneshot::Receiver<()>,
) {
    info!("Starting ticker for generation {} ({:?} period)", generation, period);

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = &mut cancel_rx => {
                info!("Ticker for generation {} cancelled", generation);
                break;
            }

            _ = interval.tick() => {
                let mut elapsed = 0;
                let counted = ticker_tx.send_if_modified(|state| {
                    let counted = state.tick(generation);
                    elapsed = state.elapsed_seconds;
                    counted
                });

                if !counted {
                    debug!("Ticker for generation {} superseded, exiting", generation);
                    break;
                }

                if elapsed == window.seconds().saturating_add(1) {
                    warn!("{}", overrun_message(&window));
                }
            }
        }
    }
}

fn overrun_message(window: &CountdownWindow) -> String {
    let display = match window.policy() {
        OverrunPolicy::Literal => "display is now past zero",
        OverrunPolicy::Clamp => "display held at 00:00",
    };
    format!("Countdown window of {}s has elapsed, {}", window.seconds(), display)
}
