//! View derivation for the stopwatch: `M:SS` readout and toggle control.

use std::fmt;

use super::intent::StopwatchIntent;
use super::state::StopwatchState;

/// Elapsed time split for display.
///
/// Formats as `M:SS`: minutes unpadded, seconds zero-padded to two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readout {
    pub minutes: u64,
    pub seconds: u64,
}

impl Readout {
    pub fn from_state(state: &StopwatchState) -> Self {
        Self::from_seconds(state.time)
    }

    pub fn from_seconds(time: u64) -> Self {
        let minutes = time / 60;
        Self {
            minutes,
            seconds: time - minutes * 60,
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Label of the toggle control for `state`.
pub fn toggle_label(state: &StopwatchState) -> &'static str {
    if state.running {
        "Stop"
    } else {
        "Start"
    }
}

/// Intent the toggle control dispatches when activated.
pub fn toggle_intent(state: &StopwatchState) -> StopwatchIntent {
    if state.running {
        StopwatchIntent::Stop
    } else {
        StopwatchIntent::Start
    }
}
