use super::*;
use crate::commands::music::utils::embedded_messages;
use serenity::builder::GetMessages;
use tracing::warn;

/// Delete the bot's recent messages in this channel
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn clean(ctx: Context<'_>) -> CommandResult {
    let bot_id = ctx.framework().bot_id;
    let channel_id = ctx.channel_id();

    let messages = channel_id
        .messages(ctx.http(), GetMessages::new().limit(100))
        .await?;

    let mut deleted = 0usize;
    for message in messages.iter().filter(|m| m.author.id == bot_id) {
        match ctx.http().delete_message(channel_id, message.id, None).await {
            Ok(()) => deleted += 1,
            Err(e) => {
                warn!(
                    %channel_id,
                    message_id = %message.id,
                    error = %e,
                    "failed to delete message"
                );
            }
        }
    }

    ctx.send(embedded_messages::cleaned(deleted)).await?;

    Ok(())
}
