// Discord commands for talking to 織蘿.
//
// **Notice the pattern:**
// 1. Extract primitive data from Discord types
// 2. Call core service
// 3. Format the response based on the result
//
// This layer is THIN - no business logic, just translation.

use std::sync::Arc;

use crate::core::ai::AiService;
use crate::core::chat;
use crate::infra::ai::OpenAiClient;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Shared application context, constructed once in `main` and injected
/// into every command and event handler.
pub struct Data {
    pub ai: Arc<AiService<OpenAiClient>>,
}

/// Ask 織蘿 something and get a reply.
#[poise::command(prefix_command)]
pub async fn zoro(
    ctx: Context<'_>,
    #[rest]
    #[description = "What you want to say to her"]
    prompt: Option<String>,
) -> Result<(), Error> {
    let Some(prompt) = chat::normalize_prompt(prompt.as_deref()) else {
        // Nothing to ask the model about.
        ctx.say(chat::EMPTY_PROMPT_REPLY).await?;
        return Ok(());
    };

    ctx.say(chat::COMMAND_THINKING).await?;

    match ctx.data().ai.generate(&prompt).await {
        Ok(reply) => {
            for chunk in chat::split_for_discord(&reply) {
                ctx.say(chunk).await?;
            }
        }
        Err(e) => {
            tracing::error!("Completion failed for !zoro: {e}");
            ctx.say(chat::command_failure_reply(&e.to_string())).await?;
        }
    }

    Ok(())
}

/// Show how to talk to 織蘿.
#[poise::command(prefix_command)]
pub async fn zorohelp(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(chat::HELP_TEXT).await?;
    Ok(())
}
