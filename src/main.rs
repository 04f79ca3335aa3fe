use netpulse::adapters::ReqwestHttpClient;
use netpulse::app::{run_app, App, AppChannels};
use netpulse::cli::{parse_args, run_cli_command, CliCommand};
use netpulse::config::MonitorConfig;
use netpulse::error::MonitorError;
use netpulse::events::{ChannelLogSink, EventReporter};
use netpulse::logging::init_tracing;
use netpulse::monitor::{PollingLoop, RedrawNotifier};
use netpulse::probe::ConnectivityProbe;
use netpulse::state::StateStore;
use netpulse::terminal::{setup_panic_hook, TerminalManager};

use color_eyre::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How long quit waits for the polling task before giving up on it.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let CliCommand::Run(overrides) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = MonitorConfig::from_env()?.with_overrides(&overrides);
    config.validate()?;

    init_tracing()?;
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: MonitorConfig) -> Result<()> {
    tracing::info!(
        target: "netpulse::monitor",
        url = %config.url,
        interval_ms = config.interval.as_millis() as u64,
        timeout_ms = config.timeout.as_millis() as u64,
        "Starting netpulse {}",
        netpulse::cli::VERSION
    );

    let store = StateStore::shared();
    let (sink, log_rx) = ChannelLogSink::channel();
    let reporter = EventReporter::new(Arc::new(sink));
    let (notifier, redraw_rx) = RedrawNotifier::channel();

    let client = ReqwestHttpClient::with_timeout(config.timeout)
        .map_err(|e| MonitorError::HttpClient(e.to_string()))?;
    let probe = ConnectivityProbe::new(Arc::new(client), config.url.clone(), config.timeout);

    // Fails before anything is spawned: there is no headless mode.
    let mut manager = TerminalManager::new()?;

    let cancel = CancellationToken::new();
    let polling = PollingLoop::new(
        Arc::new(probe),
        Arc::clone(&store),
        reporter.clone(),
        notifier,
        &config,
    )
    .spawn(cancel.clone());

    let mut app = App::new(store, reporter, config.log_capacity);
    let result = run_app(
        manager.terminal(),
        &mut app,
        AppChannels { log_rx, redraw_rx },
    )
    .await;

    cancel.cancel();
    if tokio::time::timeout(SHUTDOWN_GRACE, polling).await.is_err() {
        tracing::warn!(target: "netpulse::monitor", "Polling loop did not stop in time");
    }

    manager.restore();
    tracing::info!(target: "netpulse::monitor", "Exiting");
    result
}
