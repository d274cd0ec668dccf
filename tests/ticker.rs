mod common;

use common::record_states;
use std::num::NonZeroU64;
use std::time::Duration;
use stopwatch_mvi::ticker::Ticker;
use stopwatch_mvi::ui::stopwatch::{StopwatchIntent, StopwatchStore};
use tokio::time::sleep;

const PERIOD_MS: u64 = 1000;

fn period(ms: u64) -> NonZeroU64 {
    NonZeroU64::new(ms).unwrap()
}

#[tokio::test(start_paused = true)]
async fn no_tick_before_first_period() {
    let store = StopwatchStore::default();
    let (_sub, seen) = record_states(&store);
    let _ticker = Ticker::spawn(store.clone(), period(PERIOD_MS));

    sleep(Duration::from_millis(999)).await;

    assert!(seen.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn one_tick_per_period_while_running() {
    let store = StopwatchStore::default();
    store.dispatch(StopwatchIntent::Start);
    let _ticker = Ticker::spawn(store.clone(), period(PERIOD_MS));

    sleep(Duration::from_millis(10_500)).await;

    assert_eq!(store.state().time, 10);
}

#[tokio::test(start_paused = true)]
async fn ticks_are_dispatched_while_stopped() {
    let store = StopwatchStore::default();
    let (_sub, seen) = record_states(&store);
    let _ticker = Ticker::spawn(store.clone(), period(PERIOD_MS));

    sleep(Duration::from_millis(3_500)).await;

    assert_eq!(seen.lock().len(), 3);
    assert_eq!(store.state().time, 0);
}

#[tokio::test(start_paused = true)]
async fn custom_period() {
    let store = StopwatchStore::default();
    store.dispatch(StopwatchIntent::Start);
    let ticker = Ticker::spawn(store.clone(), period(250));
    assert_eq!(ticker.period(), Duration::from_millis(250));

    sleep(Duration::from_millis(1_100)).await;

    assert_eq!(store.state().time, 4);
}

#[tokio::test(start_paused = true)]
async fn dropping_ticker_stops_ticks() {
    let store = StopwatchStore::default();
    store.dispatch(StopwatchIntent::Start);
    let ticker = Ticker::spawn(store.clone(), period(PERIOD_MS));

    sleep(Duration::from_millis(2_500)).await;
    drop(ticker);
    sleep(Duration::from_millis(5_000)).await;

    assert_eq!(store.state().time, 2);
}

#[tokio::test(start_paused = true)]
async fn stop_freezes_time_between_ticks() {
    let store = StopwatchStore::default();
    store.dispatch(StopwatchIntent::Start);
    let _ticker = Ticker::spawn(store.clone(), period(PERIOD_MS));

    sleep(Duration::from_millis(65_500)).await;
    store.dispatch(StopwatchIntent::Stop);
    sleep(Duration::from_millis(10_000)).await;

    assert_eq!(store.state().time, 65);
    assert!(!store.state().running);
}
