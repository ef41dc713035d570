use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use serenity::model::id::GuildId;
use tracing::debug;

use super::output::AudioOutput;
use super::subscription::PlaybackSubscription;

/// Guild → live subscription map. One voice session per guild; entries are
/// created lazily and removed in lockstep with subscription teardown.
pub struct SubscriptionRegistry {
    subscriptions: DashMap<GuildId, Arc<PlaybackSubscription>>,
    idle_timeout: Duration,
}

impl SubscriptionRegistry {
    pub fn new(idle_timeout: Duration) -> Arc<Self> {
        Arc::new(Self {
            subscriptions: DashMap::new(),
            idle_timeout,
        })
    }

    pub fn get(&self, guild_id: GuildId) -> Option<Arc<PlaybackSubscription>> {
        self.subscriptions
            .get(&guild_id)
            .map(|entry| entry.value().clone())
    }

    /// The guild's existing subscription, or a new one bound to `output`.
    pub fn get_or_create(
        self: &Arc<Self>,
        guild_id: GuildId,
        output: Arc<dyn AudioOutput>,
    ) -> Arc<PlaybackSubscription> {
        let entry = self.subscriptions.entry(guild_id).or_insert_with(|| {
            debug!(%guild_id, "creating playback subscription");
            PlaybackSubscription::new(guild_id, output, Arc::downgrade(self), self.idle_timeout)
        });
        entry.value().clone()
    }

    /// Drop the guild's entry. Safe to call twice; called both by the
    /// subscription itself on teardown and by explicit stop handling.
    pub fn remove(&self, guild_id: GuildId) {
        if self.subscriptions.remove(&guild_id).is_some() {
            debug!(%guild_id, "removed playback subscription");
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
