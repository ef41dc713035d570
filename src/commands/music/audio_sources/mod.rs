//! Resolution of user input into playable tracks. A recognized YouTube URL
//! passes through untouched; anything else becomes a single-result search.

pub mod youtube;

use serenity::model::id::UserId;
use url::Url;

use crate::player::{MusicError, Track};
use youtube::YoutubeApi;

/// A specialized `Result` type for resolution operations.
pub type AudioSourceResult<T> = Result<T, MusicError>;

/// A utility struct providing general helper functions related to audio sources.
pub struct AudioSource;

impl AudioSource {
    /// Basic check whether the input parses as a URL at all. Does not
    /// validate that the URL is reachable or supported.
    pub fn is_url(input: &str) -> bool {
        Url::parse(input).is_ok()
    }

    /// Turn raw user input into a playable track. Resolution is atomic and
    /// happens before anything is queued; it is never retried.
    pub async fn resolve(input: &str, requested_by: UserId) -> AudioSourceResult<Track> {
        if YoutubeApi::is_youtube_url(input) {
            return Ok(Track::new(input, requested_by));
        }
        if Self::is_url(input) {
            return Err(MusicError::AudioSourceError(format!(
                "Unable to resolve URL to a supported provider: {input}"
            )));
        }
        YoutubeApi::from_search(input, requested_by).await
    }
}
