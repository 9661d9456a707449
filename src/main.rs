use anyhow::Context as _;
use msghook::adapters::HttpWebhookSender;
use msghook::bridge::command::KnownCommand;
use msghook::bridge::interaction_bridge::InteractionBridge;
use msghook::bridge::signature::parse_public_key;
use msghook::params::Params;
use msghook::server::{AppState, build_router};
use std::sync::Arc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Default: msghook=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msghook=info".into()),
        )
        .init();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");

    let public_key =
        parse_public_key(&params.discord_public_key).context("Parsing DISCORD_PUBLIC_KEY")?;
    let webhook_sender = Arc::new(HttpWebhookSender::new(
        params.webhook_endpoint()?,
        params.insecure_mode,
    )?);

    let state = AppState::new(
        params.discord_application_id.as_str(),
        public_key,
        InteractionBridge::new(webhook_sender),
    );

    debug!(
        commands = %serde_json::to_string(&KnownCommand::registrations())?,
        "Command registration bodies"
    );

    let listener = tokio::net::TcpListener::bind(&params.listen_addr)
        .await
        .with_context(|| format!("Binding {}", params.listen_addr))?;
    info!(addr = %params.listen_addr, "Listening for interactions");

    axum::serve(listener, build_router(state))
        .await
        .context("Running HTTP server")
}
