use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;

/// How often the input thread wakes up to check the shutdown flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// The store dispatched an intent; the frame must be redrawn.
    StateChanged,
}

pub type AppEventSender = mpsc::UnboundedSender<AppEvent>;

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: AppEventSender,
}

impl EventHandler {
    /// Start the terminal input thread.
    ///
    /// Fails if the thread cannot be spawned, since raw mode leaves no other
    /// way to read the quit key.
    pub fn new(shutdown: ShutdownHandle) -> io::Result<Self> {
        Self::with_input(move |tx| {
            thread::Builder::new()
                .name("terminal-input".to_string())
                .spawn(move || input_loop(tx, shutdown))
                .map(drop)
        })
    }

    fn with_input<F>(start_input: F) -> io::Result<Self>
    where
        F: FnOnce(AppEventSender) -> io::Result<()>,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        start_input(tx.clone())?;
        Ok(Self { rx, tx })
    }

    /// Next event, or `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}

fn input_loop(tx: AppEventSender, shutdown: ShutdownHandle) {
    while !shutdown.is_shutting_down() {
        let ready = match event::poll(POLL_INTERVAL) {
            Ok(ready) => ready,
            Err(err) => {
                tracing::error!("terminal poll failed: {err}");
                break;
            }
        };
        if !ready {
            continue;
        }

        let app_event = match event::read() {
            Ok(Event::Key(key)) => AppEvent::Key(key),
            Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
            Ok(_) => continue,
            Err(err) => {
                tracing::error!("terminal read failed: {err}");
                break;
            }
        };
        if tx.send(app_event).is_err() {
            break;
        }
    }
    tracing::debug!("terminal input thread stopped");
}
