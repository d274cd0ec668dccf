use std::io;

use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ticker::Ticker;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::stopwatch::{StopwatchIntent, StopwatchStore};
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive terminal UI until the user quits or a shutdown
/// signal arrives.
pub async fn run(store: StopwatchStore, config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let period_ms = config.ticker.tick_period().map_err(io::Error::other)?;
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(shutdown.clone())?;

    let redraw = events.sender();
    let subscription = store.subscribe(move || {
        let _ = redraw.send(AppEvent::StateChanged);
    });

    let mut app = App::new(store.clone());
    if config.ui.autostart {
        store.dispatch(StopwatchIntent::Start);
    }
    let ticker = Ticker::spawn(store, period_ms);
    tracing::info!(period_ms = period_ms.get(), "terminal UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Resize(..)) | Some(AppEvent::StateChanged) => {}
                None => break,
            },
            _ = shutdown.wait() => break,
        }
    }

    shutdown.signal();
    drop(ticker);
    subscription.unsubscribe();
    drop(guard);
    tracing::info!("terminal UI stopped");
    Ok(())
}
