//! Reducer for the stopwatch.

use crate::ui::mvi::Reducer;

use super::intent::StopwatchIntent;
use super::state::StopwatchState;

/// Reducer for stopwatch state transitions.
///
/// Pure function. The ticker and the view only dispatch; whether a tick
/// has any effect is decided here.
pub struct StopwatchReducer;

impl Reducer for StopwatchReducer {
    type State = StopwatchState;
    type Intent = StopwatchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StopwatchIntent::Start => StopwatchState {
                running: true,
                ..state
            },
            StopwatchIntent::Stop => StopwatchState {
                running: false,
                ..state
            },
            StopwatchIntent::Tick if state.running => StopwatchState {
                time: state.time.saturating_add(1),
                ..state
            },
            StopwatchIntent::Tick => state,
            StopwatchIntent::Unknown(_) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(time: u64) -> StopwatchState {
        StopwatchState {
            running: true,
            time,
        }
    }

    fn stopped(time: u64) -> StopwatchState {
        StopwatchState {
            running: false,
            time,
        }
    }

    #[test]
    fn start_sets_running_and_keeps_time() {
        let new = StopwatchReducer::reduce(stopped(42), StopwatchIntent::Start);
        assert_eq!(new, running(42));
    }

    #[test]
    fn start_while_running_is_noop() {
        let new = StopwatchReducer::reduce(running(7), StopwatchIntent::Start);
        assert_eq!(new, running(7));
    }

    #[test]
    fn stop_clears_running_and_keeps_time() {
        let new = StopwatchReducer::reduce(running(42), StopwatchIntent::Stop);
        assert_eq!(new, stopped(42));
    }

    #[test]
    fn tick_while_running_increments() {
        let new = StopwatchReducer::reduce(running(9), StopwatchIntent::Tick);
        assert_eq!(new, running(10));
    }

    #[test]
    fn tick_while_stopped_is_noop() {
        let new = StopwatchReducer::reduce(stopped(9), StopwatchIntent::Tick);
        assert_eq!(new, stopped(9));
    }

    #[test]
    fn tick_saturates_at_max() {
        let new = StopwatchReducer::reduce(running(u64::MAX), StopwatchIntent::Tick);
        assert_eq!(new, running(u64::MAX));
    }

    #[test]
    fn unknown_intent_returns_same_state() {
        for state in [stopped(0), running(125)] {
            let new = StopwatchReducer::reduce(state, StopwatchIntent::from_tag("RESET"));
            assert_eq!(new, state);
        }
    }
}
