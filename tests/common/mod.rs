//! Shared test utilities.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use stopwatch_mvi::ui::mvi::Subscription;
use stopwatch_mvi::ui::stopwatch::{StopwatchIntent, StopwatchState, StopwatchStore};
use tempfile::TempDir;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Subscribe a handler that records every state it observes.
pub fn record_states(store: &StopwatchStore) -> (Subscription, Arc<Mutex<Vec<StopwatchState>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let reader = store.clone();
    let subscription = store.subscribe(move || sink.lock().push(reader.state()));
    (subscription, seen)
}

/// Dispatch `intent` `times` times.
pub fn dispatch_n(store: &StopwatchStore, intent: StopwatchIntent, times: usize) {
    for _ in 0..times {
        store.dispatch(intent.clone());
    }
}
