use std::sync::{Arc, Mutex as StdMutex, Weak};

use serenity::async_trait;
use serenity::model::id::GuildId;
use serenity::prelude::Mutex as SerenityMutex;
use songbird::input::{Compose, YoutubeDl};
use songbird::tracks::TrackHandle;
use songbird::{Call, Event, EventContext, Songbird, TrackEvent};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::error::MusicError;
use super::output::{AudioOutput, OutputStatus, StatusObserver};

/// Bridges one songbird track event to a status transition.
struct TrackStatusNotifier {
    status: OutputStatus,
    observer: Weak<dyn StatusObserver>,
}

#[async_trait]
impl songbird::EventHandler for TrackStatusNotifier {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        if let EventContext::Track(_) = ctx {
            if let Some(observer) = self.observer.upgrade() {
                observer.on_status(self.status).await;
            }
        }
        None
    }
}

/// The production output: one songbird `Call` plus the driver-side plumbing
/// that turns track events into status transitions.
pub struct SongbirdOutput {
    guild_id: GuildId,
    manager: Arc<Songbird>,
    call: Arc<SerenityMutex<Call>>,
    http: reqwest::Client,
    current: Mutex<Option<TrackHandle>>,
    observer: StdMutex<Option<Weak<dyn StatusObserver>>>,
}

impl SongbirdOutput {
    pub fn new(
        manager: Arc<Songbird>,
        call: Arc<SerenityMutex<Call>>,
        guild_id: GuildId,
        http: reqwest::Client,
    ) -> Self {
        Self {
            guild_id,
            manager,
            call,
            http,
            current: Mutex::new(None),
            observer: StdMutex::new(None),
        }
    }

    fn observer(&self) -> Option<Weak<dyn StatusObserver>> {
        self.observer.lock().ok().and_then(|slot| slot.clone())
    }
}

#[async_trait]
impl AudioOutput for SongbirdOutput {
    fn attach_observer(&self, observer: Arc<dyn StatusObserver>) {
        if let Ok(mut slot) = self.observer.lock() {
            *slot = Some(Arc::downgrade(&observer));
        }
    }

    async fn open_stream(&self, locator: &str) -> Result<(), MusicError> {
        let mut source = YoutubeDl::new(self.http.clone(), locator.to_string());
        // Pre-flight the source so a dead link surfaces here instead of as a
        // mid-playback error.
        source
            .aux_metadata()
            .await
            .map_err(|e| MusicError::StreamOpenError(e.to_string()))?;

        let handle = {
            let mut call = self.call.lock().await;
            call.play_input(source.into())
        };

        if let Some(observer) = self.observer() {
            for (event, status) in [
                (TrackEvent::Play, OutputStatus::Playing),
                (TrackEvent::End, OutputStatus::Idle),
                (TrackEvent::Error, OutputStatus::Errored),
            ] {
                let notifier = TrackStatusNotifier {
                    status,
                    observer: observer.clone(),
                };
                if let Err(e) = handle.add_event(Event::Track(event), notifier) {
                    warn!(
                        guild_id = %self.guild_id,
                        error = %e,
                        "failed to register track event handler"
                    );
                }
            }
        }

        *self.current.lock().await = Some(handle);
        Ok(())
    }

    async fn stop(&self) {
        if let Some(handle) = self.current.lock().await.take() {
            if let Err(e) = handle.stop() {
                debug!(
                    guild_id = %self.guild_id,
                    error = %e,
                    "stopping a track that already ended"
                );
            }
        }
    }

    async fn destroy(&self) {
        *self.current.lock().await = None;
        if let Err(e) = self.manager.remove(self.guild_id).await {
            debug!(
                guild_id = %self.guild_id,
                error = %e,
                "voice session already torn down"
            );
        }
    }
}
