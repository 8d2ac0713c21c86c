use std::error::Error;
use std::sync::Arc;

use qa_client::{QaClientConfig, QaHttpClient, telemetry};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui_controller::{DEFAULT_TABS, TabSet, UiController};

mod repl;
mod terminal_view;

use terminal_view::TerminalView;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // `.env` is optional; real environment variables take precedence.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(telemetry::env_filter("info"))
        .with(telemetry::layer())
        .init();

    if let Err(e) = dotenv {
        debug!(error = %e, "no .env loaded");
    }

    let cfg = QaClientConfig::from_env()?;
    info!(endpoint = %cfg.endpoint, "starting document QA console");

    let client = QaHttpClient::new(&cfg)?;
    let controller = Arc::new(UiController::new(
        client,
        TerminalView::new(),
        TabSet::new(DEFAULT_TABS)?,
        cfg.poll_interval,
    ));

    let poller = controller.spawn_polling();
    repl::run(&controller).await?;
    poller.abort();

    Ok(())
}
