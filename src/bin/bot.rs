use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use carebot::commands::{CommandContext, CommandHandler, CompanionSettings};
use carebot::core::{Config, ConversationId, SystemClock};
use carebot::features::get_bot_version;
use carebot::features::journal::JournalStore;
use carebot::features::reminders::ReminderScheduler;
use carebot::transport::DiscordDelivery;

struct Handler {
    command_handler: Arc<CommandHandler>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, _ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let conversation_id = ConversationId::from(msg.channel_id);
        if let Err(e) = self
            .command_handler
            .handle_message(conversation_id, &msg.content)
            .await
        {
            // Replies about the failure were already attempted by the handler
            error!("Error handling message in conversation {conversation_id}: {e}");
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Cadences do not survive a restart; each conversation re-issues /start
        let active = self.command_handler.context().scheduler.active_count();
        info!("⏰ {active} check-in cadences active");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting care companion bot v{}...", get_bot_version());
    info!("📓 Journal file: {}", config.journal_path);

    let http = Arc::new(Http::new(&config.discord_token));
    let delivery = Arc::new(DiscordDelivery::new(http));

    let scheduler = Arc::new(ReminderScheduler::new(
        delivery.clone(),
        config.checkin_interval,
    ));
    let journal = Arc::new(JournalStore::open(&config.journal_path));
    let context = CommandContext::new(
        scheduler.clone(),
        journal,
        delivery,
        Arc::new(SystemClock),
        CompanionSettings::from_config(&config),
    );

    let handler = Handler {
        command_handler: Arc::new(CommandHandler::new(context)),
    };

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    // Stop cadences and disconnect cleanly on Ctrl-C
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {e}");
            return;
        }
        info!("Shutting down...");
        scheduler.shutdown();
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Establishing WebSocket connection to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Missing MESSAGE_CONTENT intent in the developer portal");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
