//! State for the stopwatch.

use crate::ui::mvi::UiState;
use serde::Serialize;

/// Stopwatch model.
///
/// `time` only changes while `running` is true, and then only upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StopwatchState {
    /// Whether elapsed time is currently advancing.
    pub running: bool,
    /// Elapsed whole seconds.
    pub time: u64,
}

impl UiState for StopwatchState {}

impl StopwatchState {
    pub fn status_label(&self) -> &'static str {
        if self.running {
            "running"
        } else {
            "stopped"
        }
    }
}
