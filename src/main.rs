//! # Canteen Poll Bot Main Entry Point
//!
//! Initializes logging, loads configuration, prepares the poll state store,
//! and runs the Telegram bot next to the health check server.

use anyhow::Result;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use teloxide::requests::RequesterExt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use canteen_poll_bot::bot::handlers::BotHandler;
use canteen_poll_bot::bot::presenter::TelegramPresenter;
use canteen_poll_bot::config::Config;
use canteen_poll_bot::poll::{ChatStateManager, ChatStore, PollController};
use canteen_poll_bot::services::health::HealthService;
use canteen_poll_bot::utils::logging::log_system_event;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canteen_poll_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Canteen Poll Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Data dir: {}, HTTP Port: {}",
        config.data_dir.display(), config.http_port);

    // Initialize poll state storage
    let store = ChatStore::new(&config.data_dir);
    store.init().await?;
    let states = Arc::new(ChatStateManager::new(store));
    log_system_event("Poll state store ready", Some(config.data_dir.display().to_string().as_str()));

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token).throttle(Limits::default());
    let controller = Arc::new(PollController::new(
        states.clone(),
        TelegramPresenter::new(bot.clone()),
    ));
    let handler = BotHandler::new(controller);
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(states);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .error_handler(LoggingErrorHandler::with_custom_text("Error while handling an update"))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    log_system_event("Application stopped", None);
    Ok(())
}
