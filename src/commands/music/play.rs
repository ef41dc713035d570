use super::*;
use crate::commands::music::audio_sources::AudioSource;
use crate::commands::music::utils::{embedded_messages, music_manager::MusicManager};
use crate::player::MusicError;
use tracing::info;

/// Play a track from a URL or a search query
#[poise::command(slash_command, prefix_command, aliases("music"), category = "Music")]
pub async fn play(
    ctx: Context<'_>,
    #[description = "URL or search query"]
    #[rest]
    query: String,
) -> CommandResult {
    info!("received play command with query: {}", query);
    let guild_id = ctx.guild_id().ok_or(MusicError::NotInGuild)?;

    // The user must be in a voice channel before we can join one.
    let channel_id = match MusicManager::get_user_voice_channel(
        ctx.serenity_context(),
        guild_id,
        ctx.author().id,
    ) {
        Ok(channel_id) => channel_id,
        Err(err) => {
            ctx.send(embedded_messages::user_not_in_voice_channel(err))
                .await?;
            return Ok(());
        }
    };

    // Resolution and joining may both take a while.
    ctx.defer().await?;

    let track = match AudioSource::resolve(&query, ctx.author().id).await {
        Ok(track) => track,
        Err(err) => {
            ctx.send(embedded_messages::resolution_failed(&query, err))
                .await?;
            return Ok(());
        }
    };

    let subscription = match MusicManager::ensure_subscription(
        ctx.serenity_context(),
        &ctx.data().registry,
        guild_id,
        channel_id,
    )
    .await
    {
        Ok(subscription) => subscription,
        Err(err) => {
            ctx.send(embedded_messages::failed_to_join_voice_channel(err))
                .await?;
            return Ok(());
        }
    };

    subscription.enqueue(track.clone()).await;

    let snapshot = subscription.peek().await;
    ctx.send(embedded_messages::queued(&track, &snapshot)).await?;

    Ok(())
}
