use crate::ui::stopwatch::{toggle_intent, Readout, StopwatchState, StopwatchStore};

/// Terminal UI state around the stopwatch store.
///
/// The stopwatch model lives in the store; `App` only adds what the
/// terminal frontend needs on top of it.
pub struct App {
    store: StopwatchStore,
    should_quit: bool,
}

impl App {
    pub fn new(store: StopwatchStore) -> Self {
        Self {
            store,
            should_quit: false,
        }
    }

    pub fn state(&self) -> StopwatchState {
        self.store.state()
    }

    pub fn readout(&self) -> Readout {
        Readout::from_state(&self.state())
    }

    /// Activate the toggle control: Stop when running, Start otherwise.
    pub fn toggle(&mut self) {
        let intent = toggle_intent(&self.state());
        self.store.dispatch(intent);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
