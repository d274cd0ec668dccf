//! Periodic timer that drives `Tick` intents into the stopwatch store.

use std::num::NonZeroU64;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ui::stopwatch::{StopwatchIntent, StopwatchStore};

/// Handle to the running ticker task.
///
/// The first tick fires one full period after [`Ticker::spawn`]. Every
/// firing dispatches exactly one `Tick`, whether or not the stopwatch is
/// running. Late firings are delayed, not bursted, so a stalled runtime
/// never catches up with several ticks at once.
///
/// The task is aborted when the handle is dropped.
pub struct Ticker {
    handle: JoinHandle<()>,
    period: Duration,
}

impl Ticker {
    /// Spawn the ticker on the current tokio runtime, firing every
    /// `period_ms` milliseconds.
    pub fn spawn(store: StopwatchStore, period_ms: NonZeroU64) -> Self {
        let period = Duration::from_millis(period_ms.get());
        let start = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                store.dispatch(StopwatchIntent::Tick);
            }
        });
        tracing::debug!(period_ms = period_ms.get(), "ticker armed");
        Self { handle, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
