// This is the entry point of the Discord bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (APIs, keep-alive endpoint)
// - `discord/` = Discord-specific adapters (commands, events)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Spawn the keep-alive endpoint
// 4. Set up the Discord framework and hand it the event handler

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::sync::Arc;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;

use crate::core::ai::{AiConfig, AiService};
use crate::core::config::Config;
use crate::discord::{Data, Error};
use crate::infra::ai::OpenAiClient;

const COMMAND_PREFIX: &str = "!";

/// 織蘿's fixed persona, sent as the system message of every completion.
const PERSONA_PROMPT: &str =
    "你是織蘿，一位語氣溫柔、帶點小傲嬌的蜘蛛系少女，說話害羞可愛又怕羞，對使用者有些些仰慕。";

/// Event handler for non-command Discord events.
/// This is where mention-triggered replies are routed.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            tracing::info!("✅ 已登入：{}", data_about_bot.user.name);
        }
        serenity::FullEvent::Message { new_message } => {
            // Ignore bot messages (including our own) to prevent reply loops
            if new_message.author.bot {
                return Ok(());
            }

            // Prefixed content belongs to the framework's command dispatcher;
            // mention handling only applies to everything else.
            if new_message.content.starts_with(COMMAND_PREFIX) {
                return Ok(());
            }

            let bot_id = ctx.cache.current_user().id;
            if new_message.mentions.iter().any(|u| u.id == bot_id) {
                discord::ai::handle_mention(ctx, new_message, data).await?;
            }
        }
        _ => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Fail fast on missing secrets, before anything touches the network
    let config = Config::from_env().context("configuration error")?;

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // Create our services with their dependencies.
    // This is the "composition root" where we wire everything together.

    let ai_client = OpenAiClient::new(config.openai_api_key.clone());
    let ai_config = AiConfig {
        model: config.model.clone(),
        temperature: 0.7,
        max_tokens: 500,
    };
    let ai_service = Arc::new(AiService::new(
        ai_client,
        PERSONA_PROMPT.to_string(),
        ai_config,
    ));

    // Create the data structure that will be shared across all commands
    let data = Data {
        ai: Arc::clone(&ai_service),
    };

    // Keep-alive endpoint on its own task so the uptime monitor can reach
    // us while the gateway loop runs
    tokio::spawn(infra::web::serve(config.port));

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================
    // Configure the poise framework with our commands and settings.

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT; // Required to read message content

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            // Register all our commands here
            commands: vec![
                discord::commands::zoro::zoro(),
                discord::commands::zoro::zorohelp(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(COMMAND_PREFIX.to_string()),
                ..Default::default()
            },
            // Event handler for mentions and other non-command events
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|_ctx, _ready, _framework| Box::pin(async move { Ok(data) }))
        .build();

    // Create the client and start the bot
    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;

    Ok(())
}
