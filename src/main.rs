use anyhow::Context;
use clap::Parser;
use stopwatch_mvi::cli::Cli;
use stopwatch_mvi::logging::{default_log_path, init_tracing, LogTarget};
use stopwatch_mvi::shutdown::{listen_for_signals, ShutdownHandle};
use stopwatch_mvi::ui::stopwatch::StopwatchStore;
use stopwatch_mvi::ui::{headless, runtime};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    };
    // Exit here rather than dropping the runtime: a blocked stdin read
    // would otherwise keep the process alive after a signal.
    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config().context("failed to load configuration")?;
    let config = cli.apply_overrides(config);
    config.validate().context("invalid configuration")?;

    let target = match (&config.logging.file, cli.headless) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::File(default_log_path()),
    };
    init_tracing(&config.logging.level, &target).context("failed to initialise logging")?;

    let store = StopwatchStore::default();
    let shutdown = ShutdownHandle::new();
    listen_for_signals(shutdown.clone());

    if cli.headless {
        headless::run(store, &config, shutdown)
            .await
            .context("headless driver failed")
    } else {
        runtime::run(store, &config, shutdown)
            .await
            .context("terminal UI failed")
    }
}
