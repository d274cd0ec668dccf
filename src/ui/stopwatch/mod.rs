//! Stopwatch feature module.
//!
//! Elapsed-seconds counter that advances on every tick while running.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Model (`running`, `time`)
//! - `intent.rs` - Start / Stop / Tick, plus unrecognized tags
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `readout.rs` - View derivation (`M:SS`, toggle label and intent)

mod intent;
mod readout;
mod reducer;
mod state;

pub use intent::StopwatchIntent;
pub use readout::{toggle_intent, toggle_label, Readout};
pub use reducer::StopwatchReducer;
pub use state::StopwatchState;

use crate::ui::mvi::Store;

/// Store specialised to the stopwatch reducer.
pub type StopwatchStore = Store<StopwatchReducer>;
