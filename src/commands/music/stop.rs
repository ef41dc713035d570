use super::*;
use crate::commands::music::utils::embedded_messages;
use crate::player::MusicError;

/// Stop playback, clear the queue, and leave the voice channel
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn stop(ctx: Context<'_>) -> CommandResult {
    let guild_id = ctx.guild_id().ok_or(MusicError::NotInGuild)?;

    let Some(subscription) = ctx.data().registry.get(guild_id) else {
        ctx.send(embedded_messages::nothing_playing()).await?;
        return Ok(());
    };

    subscription.stop().await;
    // The subscription deregisters itself on teardown; removing here as well
    // is safe and covers a teardown that raced this command.
    ctx.data().registry.remove(guild_id);

    ctx.send(embedded_messages::stopped()).await?;

    Ok(())
}
