use std::sync::Arc;

use serenity::client::Context;
use serenity::model::id::{ChannelId, GuildId, UserId};
use serenity::prelude::Mutex as SerenityMutex;
use songbird::{Call, Songbird};
use tracing::error;

use crate::HTTP_CLIENT;
use crate::player::{
    MusicError, MusicResult, PlaybackSubscription, SongbirdOutput, SubscriptionRegistry,
};

/// Voice-session helpers shared by the music commands.
pub struct MusicManager;

impl MusicManager {
    /// Get the Songbird voice client from the context
    pub async fn get_songbird(ctx: &Context) -> MusicResult<Arc<Songbird>> {
        songbird::get(ctx).await.ok_or(MusicError::NoVoiceManager)
    }

    /// Get the voice channel ID that the user is currently in
    pub fn get_user_voice_channel(
        ctx: &Context,
        guild_id: GuildId,
        user_id: UserId,
    ) -> MusicResult<ChannelId> {
        let guild = ctx.cache.guild(guild_id).ok_or(MusicError::NotInGuild)?;

        let voice_state = guild
            .voice_states
            .get(&user_id)
            .ok_or(MusicError::UserNotInVoiceChannel)?;

        voice_state
            .channel_id
            .ok_or(MusicError::UserNotInVoiceChannel)
    }

    /// Join `channel_id` and hand back the guild's subscription, creating it
    /// when this is the first request. A failed join makes exactly one
    /// attempt and registers nothing.
    pub async fn ensure_subscription(
        ctx: &Context,
        registry: &Arc<SubscriptionRegistry>,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> MusicResult<Arc<PlaybackSubscription>> {
        if let Some(subscription) = registry.get(guild_id) {
            return Ok(subscription);
        }

        let manager = Self::get_songbird(ctx).await?;
        let call: Arc<SerenityMutex<Call>> = match manager.join(guild_id, channel_id).await {
            Ok(call) => call,
            Err(err) => {
                error!(
                    %guild_id,
                    %channel_id,
                    error = %err,
                    "failed to join voice channel"
                );
                let _ = manager.remove(guild_id).await;
                return Err(MusicError::JoinError(err.to_string()));
            }
        };

        let output = SongbirdOutput::new(manager, call, guild_id, HTTP_CLIENT.clone());
        Ok(registry.get_or_create(guild_id, Arc::new(output)))
    }
}
