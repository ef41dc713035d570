//! Per-guild playback: the subscription state machine, its registry, and the
//! output seam to the voice driver.

pub(crate) mod error;
pub(crate) mod output;
pub(crate) mod registry;
pub(crate) mod songbird_output;
pub(crate) mod subscription;
pub(crate) mod track;

pub use error::{MusicError, MusicResult};
pub use output::{AudioOutput, OutputStatus, StatusObserver};
pub use registry::SubscriptionRegistry;
pub use songbird_output::SongbirdOutput;
pub use subscription::PlaybackSubscription;
pub use track::{QueueSnapshot, Track};
