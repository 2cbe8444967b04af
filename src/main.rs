mod config;
mod display;
mod errors;
mod job;
mod ledger;
mod models;
mod scheduler;
mod sources;

use config::Config;
use display::TerminalDisplay;
use job::PollingJob;
use ledger::Ledger;
use scheduler::Scheduler;
use sources::criptoya::CriptoYa;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::new();

    tracing::info!(
        "Ratewatch starting: {} quotes from {} every {}s into {}",
        config.provider,
        config.endpoint,
        config.poll_interval.as_secs(),
        config.ledger_path.display()
    );

    let source = CriptoYa::new(&config)?;
    let ledger = Ledger::new(config.ledger_path.clone());

    let mut display = TerminalDisplay::stdout();
    display.render();

    let mut job = PollingJob::new(Box::new(source), ledger, display);

    // Ctrl+C plays the part of closing the window
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    Scheduler::new(config.poll_interval)
        .run(&mut job, shutdown)
        .await
}
