//! Line-oriented driver for non-interactive use.
//!
//! Intent tags are read from stdin, one per line, and the readout is
//! printed to stdout whenever the model changes.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::{Config, OutputFormat};
use crate::shutdown::ShutdownHandle;
use crate::ticker::Ticker;
use crate::ui::stopwatch::{Readout, StopwatchIntent, StopwatchState, StopwatchStore};

#[derive(Serialize)]
struct JsonLine {
    #[serde(flatten)]
    state: StopwatchState,
    display: String,
}

/// Render one output line for `state`.
pub fn format_line(state: &StopwatchState, format: OutputFormat) -> serde_json::Result<String> {
    let display = Readout::from_state(state).to_string();
    match format {
        OutputFormat::Text => Ok(format!("{} {}", display, state.status_label())),
        OutputFormat::Json => serde_json::to_string(&JsonLine {
            state: *state,
            display,
        }),
    }
}

/// Run until stdin is exhausted or a shutdown signal arrives.
pub async fn run(store: StopwatchStore, config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let period_ms = config.ticker.tick_period().map_err(io::Error::other)?;
    let format = config.ui.headless_format;
    let last_printed = Arc::new(Mutex::new(None::<StopwatchState>));

    print_if_changed(&last_printed, store.state(), format);
    let reader = store.clone();
    let printed = Arc::clone(&last_printed);
    let subscription = store.subscribe(move || {
        print_if_changed(&printed, reader.state(), format);
    });

    if config.ui.autostart {
        store.dispatch(StopwatchIntent::Start);
    }
    let ticker = Ticker::spawn(store.clone(), period_ms);
    tracing::info!(period_ms = period_ms.get(), "headless driver started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let result = loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    let tag = line.trim();
                    if tag.is_empty() {
                        continue;
                    }
                    let intent = StopwatchIntent::from_tag(tag);
                    if !intent.is_known() {
                        tracing::warn!(tag, "ignoring unknown intent");
                    }
                    store.dispatch(intent);
                }
                Ok(None) => break Ok(()),
                Err(err) => break Err(err),
            },
            _ = shutdown.wait() => break Ok(()),
        }
    };

    drop(ticker);
    subscription.unsubscribe();
    tracing::info!("headless driver stopped");
    result
}

fn print_if_changed(
    last_printed: &Mutex<Option<StopwatchState>>,
    state: StopwatchState,
    format: OutputFormat,
) {
    let mut last = last_printed.lock();
    if *last == Some(state) {
        return;
    }
    *last = Some(state);

    write_readout(&mut io::stdout().lock(), format_line(&state, format));
}

/// Write one readout line. Failures are logged and nothing is written.
fn write_readout<W: Write>(out: &mut W, line: serde_json::Result<String>) {
    let line = match line {
        Ok(line) => line,
        Err(err) => {
            tracing::warn!("failed to serialize readout: {err}");
            return;
        }
    };
    if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
        tracing::warn!("failed to write readout: {err}");
    }
}
