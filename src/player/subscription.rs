use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use std::time::Duration;

use serenity::async_trait;
use serenity::model::id::GuildId;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::output::{AudioOutput, OutputStatus, StatusObserver};
use super::registry::SubscriptionRegistry;
use super::track::{QueueSnapshot, Track};

/// Mutable half of a subscription. Everything lives under one lock so `peek`
/// snapshots are always consistent.
struct PlaybackState {
    queue: VecDeque<Track>,
    current: Option<Track>,
    /// Advance-in-progress guard. Set when an advance dequeues a track and
    /// held until the output confirms Playing, so spurious Idle transitions
    /// in between cannot dequeue a second track.
    ready_lock: bool,
    idle_task: Option<JoinHandle<()>>,
    /// Terminal flag. Once set, every operation and status event is ignored.
    stopped: bool,
}

/// Per-guild playback session: one queue, one output, one auto-leave timer.
///
/// All mutation happens through the public operations; the output feeds
/// lifecycle transitions back in via [`StatusObserver`], and the subscription
/// advances its queue from those.
pub struct PlaybackSubscription {
    guild_id: GuildId,
    output: Arc<dyn AudioOutput>,
    registry: Weak<SubscriptionRegistry>,
    idle_timeout: Duration,
    state: Mutex<PlaybackState>,
    weak_self: Weak<PlaybackSubscription>,
}

impl PlaybackSubscription {
    pub(super) fn new(
        guild_id: GuildId,
        output: Arc<dyn AudioOutput>,
        registry: Weak<SubscriptionRegistry>,
        idle_timeout: Duration,
    ) -> Arc<Self> {
        let subscription = Arc::new_cyclic(|weak_self| Self {
            guild_id,
            output,
            registry,
            idle_timeout,
            state: Mutex::new(PlaybackState {
                queue: VecDeque::new(),
                current: None,
                ready_lock: false,
                idle_task: None,
                stopped: false,
            }),
            weak_self: weak_self.clone(),
        });

        subscription
            .output
            .attach_observer(subscription.clone() as Arc<dyn StatusObserver>);

        // A freshly joined session with nothing queued still counts down.
        let armed = Arc::clone(&subscription);
        tokio::spawn(async move { armed.ensure_idle_countdown().await });

        subscription
    }

    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Append a track to the queue and kick the output if it is idle.
    pub async fn enqueue(&self, track: Track) {
        let should_advance = {
            let mut state = self.state.lock().await;
            if state.stopped {
                warn!(
                    guild_id = %self.guild_id,
                    locator = %track.locator,
                    "dropping enqueue on a stopped subscription"
                );
                return;
            }
            if let Some(task) = state.idle_task.take() {
                task.abort();
            }
            state.queue.push_back(track);
            state.current.is_none() && !state.ready_lock
        };

        if should_advance {
            self.advance().await;
        }
    }

    /// Stop the current resource; the Idle transition that follows advances
    /// the queue (or starts the leave countdown when it is empty). A no-op
    /// when nothing is playing and nothing is queued.
    pub async fn skip(&self) {
        let has_work = {
            let state = self.state.lock().await;
            !state.stopped && (state.current.is_some() || !state.queue.is_empty())
        };
        if has_work {
            self.output.stop().await;
        }
    }

    /// Tear the subscription down: clear the queue, stop the output, leave
    /// the voice channel, drop the registry entry. Irreversible, idempotent.
    pub async fn stop(&self) {
        let first = {
            let mut state = self.state.lock().await;
            let first = !state.stopped;
            state.stopped = true;
            state.queue.clear();
            state.current = None;
            state.ready_lock = false;
            if let Some(task) = state.idle_task.take() {
                task.abort();
            }
            first
        };

        self.output.stop().await;
        self.output.destroy().await;
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.guild_id);
        }

        if first {
            info!(guild_id = %self.guild_id, "playback subscription stopped");
        }
    }

    /// Consistent copy of the playback state, for display. Never mutates.
    pub async fn peek(&self) -> QueueSnapshot {
        let state = self.state.lock().await;
        QueueSnapshot {
            current: state.current.clone(),
            upcoming: state.queue.iter().cloned().collect(),
        }
    }

    /// Whether `stop` or the idle countdown already tore this subscription
    /// down.
    pub async fn is_stopped(&self) -> bool {
        self.state.lock().await.stopped
    }

    /// Drain step: move the queue head into the output. Serialized by
    /// `ready_lock`; every Idle/Errored transition and every enqueue-on-idle
    /// funnels through here.
    async fn advance(&self) {
        {
            let mut state = self.state.lock().await;
            if state.stopped || state.ready_lock {
                return;
            }
            state.ready_lock = true;
        }

        loop {
            let next = {
                let mut state = self.state.lock().await;
                if state.stopped {
                    state.ready_lock = false;
                    return;
                }
                match state.queue.pop_front() {
                    Some(track) => {
                        state.current = Some(track.clone());
                        track
                    }
                    None => {
                        state.current = None;
                        state.ready_lock = false;
                        self.arm_idle_countdown(&mut state);
                        return;
                    }
                }
            };

            match self.output.open_stream(&next.locator).await {
                Ok(()) => {
                    let raced_stop = {
                        let mut state = self.state.lock().await;
                        if state.stopped {
                            state.ready_lock = false;
                            true
                        } else {
                            debug!(
                                guild_id = %self.guild_id,
                                locator = %next.locator,
                                "stream opened"
                            );
                            false
                        }
                    };
                    if raced_stop {
                        self.output.stop().await;
                    }
                    // ready_lock stays held until the Playing transition.
                    return;
                }
                Err(err) => {
                    warn!(
                        guild_id = %self.guild_id,
                        locator = %next.locator,
                        error = %err,
                        "failed to open stream, trying next track"
                    );
                    let mut state = self.state.lock().await;
                    if state.current.as_ref() == Some(&next) {
                        state.current = None;
                    }
                    // ready_lock stays held while the loop drains further.
                }
            }
        }
    }

    /// Start the auto-leave countdown, unless one is already pending.
    fn arm_idle_countdown(&self, state: &mut PlaybackState) {
        if state.stopped || state.idle_task.is_some() {
            return;
        }
        let weak = self.weak_self.clone();
        let timeout = self.idle_timeout;
        state.idle_task = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            if let Some(subscription) = weak.upgrade() {
                subscription.on_idle_deadline().await;
            }
        }));
    }

    /// Arm the countdown if the subscription is idle right now.
    async fn ensure_idle_countdown(&self) {
        let mut state = self.state.lock().await;
        if state.current.is_none() && state.queue.is_empty() && !state.ready_lock {
            self.arm_idle_countdown(&mut state);
        }
    }

    /// Fired by the countdown task: leave the voice channel if still idle.
    async fn on_idle_deadline(&self) {
        let expired = {
            let mut state = self.state.lock().await;
            let idle = !state.stopped
                && state.current.is_none()
                && state.queue.is_empty()
                && !state.ready_lock;
            if idle {
                state.stopped = true;
                state.idle_task = None;
            }
            idle
        };

        if expired {
            info!(guild_id = %self.guild_id, "idle timeout elapsed, leaving voice channel");
            self.output.destroy().await;
            if let Some(registry) = self.registry.upgrade() {
                registry.remove(self.guild_id);
            }
        }
    }
}

#[async_trait]
impl StatusObserver for PlaybackSubscription {
    async fn on_status(&self, status: OutputStatus) {
        match status {
            OutputStatus::Idle => self.advance().await,
            OutputStatus::Errored => {
                warn!(guild_id = %self.guild_id, "output reported a playback error");
                self.advance().await;
            }
            OutputStatus::Playing => {
                let mut state = self.state.lock().await;
                if state.stopped {
                    return;
                }
                state.ready_lock = false;
                if let Some(task) = state.idle_task.take() {
                    task.abort();
                }
            }
            OutputStatus::Buffering => {
                debug!(guild_id = %self.guild_id, "output buffering");
            }
        }
    }
}
