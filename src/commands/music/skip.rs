use super::*;
use crate::commands::music::utils::embedded_messages;
use crate::player::MusicError;

/// Skip the currently playing track
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn skip(ctx: Context<'_>) -> CommandResult {
    let guild_id = ctx.guild_id().ok_or(MusicError::NotInGuild)?;

    let Some(subscription) = ctx.data().registry.get(guild_id) else {
        ctx.send(embedded_messages::nothing_playing()).await?;
        return Ok(());
    };

    let skipped = subscription.peek().await.current;
    subscription.skip().await;

    ctx.send(embedded_messages::skipped(skipped.as_ref())).await?;

    Ok(())
}
