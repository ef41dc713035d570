use std::sync::Arc;

use serenity::async_trait;

use super::error::MusicError;

/// Player lifecycle states as observed by a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    Idle,
    Buffering,
    Playing,
    Errored,
}

/// Receives lifecycle transitions from an output. Registered once per output
/// instance; reactions must tolerate repeated and spurious transitions.
#[async_trait]
pub trait StatusObserver: Send + Sync {
    async fn on_status(&self, status: OutputStatus);
}

/// A voice connection and audio player pair. One per subscription, owned
/// exclusively by it.
#[async_trait]
pub trait AudioOutput: Send + Sync + 'static {
    /// Register the observer fed by this output's lifecycle events.
    fn attach_observer(&self, observer: Arc<dyn StatusObserver>);

    /// Resolve `locator` into an audio stream and begin playback. `Ok` means
    /// the stream was accepted; Buffering/Playing transitions follow through
    /// the observer.
    async fn open_stream(&self, locator: &str) -> Result<(), MusicError>;

    /// Discard the currently playing resource, if any. The driver reports the
    /// resulting Idle transition through the observer.
    async fn stop(&self);

    /// Tear down the voice session. Idempotent.
    async fn destroy(&self);
}
