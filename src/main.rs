//! GroupKeeper Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::{Me, Update}};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn, debug};

use GroupKeeper::{
    config::Settings,
    utils::logging,
    handlers::Router,
    models::{Denylist, InboundEvent},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration; a missing token stops us here
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging);

    info!("Starting {}...", GroupKeeper::info());

    let bot = Bot::new(&settings.bot.token);
    let denylist = Denylist::new(&settings.filter.denylist);
    info!(entries = denylist.words().len(), "Content filter loaded");

    let router = Arc::new(Router::new(bot.clone(), denylist));

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![router])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");

    dispatcher.dispatch().await;

    info!("GroupKeeper bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message().endpoint(handle_message)
}

/// Decode a message and hand it to the router
async fn handle_message(msg: Message, me: Me, router: Arc<Router<Bot>>) -> HandlerResult {
    let Some(event) = InboundEvent::from_message(&msg, me.username()) else {
        debug!(chat_id = msg.chat.id.0, message_id = msg.id.0, "Ignoring message");
        return Ok(());
    };

    router.dispatch(&event).await;
    Ok(())
}
