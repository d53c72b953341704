use crate::core::chat;
use crate::discord::{Data, Error};
use poise::serenity_prelude as serenity;

/// Replies to a message that mentions the bot outside of command syntax.
///
/// The mention markup is stripped and the remainder becomes the prompt.
/// A message that is nothing but the mention is ignored - no reply, no
/// completion call. Failures get a canned apology without the raw error
/// text; the diagnostic goes to the log instead.
pub async fn handle_mention(
    ctx: &serenity::Context,
    message: &serenity::Message,
    data: &Data,
) -> Result<(), Error> {
    let bot_id = ctx.cache.current_user().id;

    let Some(prompt) = chat::extract_mention_prompt(&message.content, bot_id.get()) else {
        return Ok(());
    };

    message
        .channel_id
        .say(&ctx.http, chat::MENTION_THINKING)
        .await?;

    match data.ai.generate(&prompt).await {
        Ok(reply) => {
            for chunk in chat::split_for_discord(&reply) {
                message.channel_id.say(&ctx.http, chunk).await?;
            }
        }
        Err(e) => {
            tracing::error!("Completion failed for mention: {e}");
            message
                .channel_id
                .say(&ctx.http, chat::MENTION_FAILURE_REPLY)
                .await?;
        }
    }

    Ok(())
}
