//! Tests for input resolution that do not require the `yt-dlp` binary.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serenity::model::id::UserId;

use jukebox::commands::music::audio_sources::{AudioSource, youtube::YoutubeApi};
use jukebox::player::MusicError;

#[rstest]
#[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", true)]
#[case("https://youtube.com/watch?v=dQw4w9WgXcQ", true)]
#[case("https://m.youtube.com/watch?v=dQw4w9WgXcQ", true)]
#[case("https://music.youtube.com/watch?v=dQw4w9WgXcQ", true)]
#[case("https://youtu.be/dQw4w9WgXcQ", true)]
#[case("https://www.youtube.com/playlist?list=PL123", false)]
#[case("https://example.com/watch?v=dQw4w9WgXcQ", false)]
#[case("not a url at all", false)]
fn recognizes_youtube_urls(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(YoutubeApi::is_youtube_url(input), expected);
}

#[test]
fn is_url_accepts_any_parseable_url() {
    assert!(AudioSource::is_url("https://example.com/song.mp3"));
    assert!(!AudioSource::is_url("lofi hip hop radio"));
}

#[tokio::test]
async fn youtube_urls_pass_through_untouched() {
    let track = AudioSource::resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ", UserId::new(1))
        .await
        .unwrap();

    assert_eq!(track.locator, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(track.title, None);
    assert_eq!(track.requested_by, UserId::new(1));
}

#[tokio::test]
async fn unsupported_urls_are_rejected_without_searching() {
    let err = AudioSource::resolve("https://example.com/song.mp3", UserId::new(1))
        .await
        .unwrap_err();

    assert_matches!(err, MusicError::AudioSourceError(_));
}
