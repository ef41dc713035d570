//! YouTube-specific resolution: URL recognition and `yt-dlp` search.

use serenity::model::id::UserId;
use tokio::process::Command;
use tracing::info;
use url::Url;

use crate::player::{MusicError, Track};

/// YouTube resolution logic, backed by the `yt-dlp` command-line tool.
pub struct YoutubeApi;

impl YoutubeApi {
    /// Checks if the input string is a YouTube URL (watch page or youtu.be).
    pub fn is_youtube_url(query: &str) -> bool {
        match Url::parse(query) {
            Ok(url) => {
                let watch_page = url.host_str().is_some_and(|host| {
                    matches!(
                        host,
                        "www.youtube.com" | "youtube.com" | "m.youtube.com" | "music.youtube.com"
                    )
                }) && url.path().starts_with("/watch");
                watch_page || url.host_str() == Some("youtu.be")
            }
            Err(_) => false,
        }
    }

    /// Resolve the first YouTube search result for a term into a track.
    pub async fn from_search(search_term: &str, requested_by: UserId) -> Result<Track, MusicError> {
        info!("searching youtube for: {}", search_term);
        let search_param = format!("ytsearch1:{}", search_term);

        let output = Command::new("yt-dlp")
            .args([
                "-j",            // Output as JSON
                "--no-playlist", // Don't process playlists
                &search_param,
            ])
            .output()
            .await
            .map_err(|e| MusicError::AudioSourceError(format!("failed to run yt-dlp: {e}")))?;

        if !output.status.success() {
            return Err(MusicError::NoSearchResults(search_term.to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout
            .lines()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| MusicError::NoSearchResults(search_term.to_string()))?;

        let metadata: serde_json::Value = serde_json::from_str(line).map_err(|e| {
            MusicError::AudioSourceError(format!("failed to parse video metadata: {e}"))
        })?;

        let url = metadata["webpage_url"]
            .as_str()
            .or_else(|| metadata["url"].as_str())
            .ok_or_else(|| MusicError::NoSearchResults(search_term.to_string()))?
            .to_string();

        match metadata["title"].as_str() {
            Some(title) => Ok(Track::with_title(url, title, requested_by)),
            None => Ok(Track::new(url, requested_by)),
        }
    }
}
