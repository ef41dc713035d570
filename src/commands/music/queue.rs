use super::*;
use crate::commands::music::utils::embedded_messages;
use crate::player::{MusicError, QueueSnapshot};

/// View the current music queue
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn queue(ctx: Context<'_>) -> CommandResult {
    let guild_id = ctx.guild_id().ok_or(MusicError::NotInGuild)?;

    let snapshot = match ctx.data().registry.get(guild_id) {
        Some(subscription) => subscription.peek().await,
        None => QueueSnapshot::default(),
    };

    ctx.send(embedded_messages::queue(&snapshot)).await?;

    Ok(())
}
