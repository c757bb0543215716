use std::sync::Arc;

use card_bot::cards::CardAssets;
use card_bot::config::BotConfig;
use card_bot::dispatcher::TurnDispatcher;
use card_bot::http::bot_routes;
use card_bot::transport::HttpActivitySender;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = BotConfig::from_env()?;

    eprintln!("🃏 card-bot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Endpoint: http://{}/api/messages", config.bind);
    eprintln!("   Cards:    {}", config.cards_dir.display());
    eprintln!("   Say \"Adaptive\" or \"Hero\" to get a card.\n");

    let sender = Arc::new(HttpActivitySender::new(reqwest::Client::new()));
    let assets = CardAssets::new(&config.cards_dir);
    if !assets.adaptive_card_path().is_file() {
        tracing::warn!(
            path = %assets.adaptive_card_path().display(),
            "adaptive card asset not found; \"Adaptive\" turns will fail until it exists"
        );
    }

    let dispatcher = Arc::new(TurnDispatcher::new(sender, assets));
    let app = bot_routes(dispatcher);

    tracing::info!(bind = %config.bind, "card-bot listening");
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
