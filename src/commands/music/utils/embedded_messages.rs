use poise::CreateReply;
use serenity::all::CreateEmbed;

use crate::player::{MusicError, QueueSnapshot, Track};

const SUCCESS_COLOR: u32 = 0x00ff00;
const ERROR_COLOR: u32 = 0xff0000;

/// How many upcoming tracks the queue embed lists.
const QUEUE_DISPLAY_LIMIT: usize = 10;

fn error_reply(description: String) -> CreateReply {
    CreateReply::default()
        .embed(
            CreateEmbed::new()
                .title("❌ Error")
                .description(description)
                .color(ERROR_COLOR),
        )
        .ephemeral(true)
}

fn track_link(track: &Track) -> String {
    format!("[{}]({})", track.display_name(), track.locator)
}

pub fn user_not_in_voice_channel(err: MusicError) -> CreateReply {
    error_reply(format!("You need to be in a voice channel: {}", err))
}

pub fn failed_to_join_voice_channel(err: MusicError) -> CreateReply {
    error_reply(format!("Failed to join voice channel: {}", err))
}

pub fn resolution_failed(query: &str, err: MusicError) -> CreateReply {
    match err {
        MusicError::NoSearchResults(_) => error_reply(format!("No results found for '{}'", query)),
        err => error_reply(format!("Failed to process '{}': {}", query, err)),
    }
}

pub fn nothing_playing() -> CreateReply {
    CreateReply::default()
        .content("⏸️ Nothing is playing")
        .ephemeral(true)
}

/// Reply for a successful play command: added-to-queue when the track is
/// still waiting in the snapshot, now-playing otherwise.
pub fn queued(track: &Track, snapshot: &QueueSnapshot) -> CreateReply {
    let embed = match snapshot.upcoming.iter().rposition(|queued| queued == track) {
        Some(index) => CreateEmbed::new()
            .title("🎵 Added to Queue")
            .description(track_link(track))
            .field("Position", format!("`#{}`", index + 1), true)
            .color(SUCCESS_COLOR),
        None => CreateEmbed::new()
            .title("🎵 Now Playing")
            .description(track_link(track))
            .color(SUCCESS_COLOR),
    };
    CreateReply::default().embed(embed)
}

pub fn skipped(track: Option<&Track>) -> CreateReply {
    let description = match track {
        Some(track) => format!("Skipped {}", track_link(track)),
        None => "Skipped to the next track".to_string(),
    };
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("⏭️ Skipped")
            .description(description)
            .color(SUCCESS_COLOR),
    )
}

pub fn stopped() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("⏹️ Stopped")
            .description("Stopped playback and left the voice channel")
            .color(SUCCESS_COLOR),
    )
}

pub fn cleaned(count: usize) -> CreateReply {
    CreateReply::default().content(format!("🧹 Deleted {} bot message(s)", count))
}

/// The queue embed: now playing plus up to [`QUEUE_DISPLAY_LIMIT`] upcoming
/// tracks. The snapshot itself is never truncated; only the display is.
pub fn queue(snapshot: &QueueSnapshot) -> CreateReply {
    let mut description = String::new();

    match &snapshot.current {
        Some(track) => {
            description.push_str(&format!("**🎶 Now Playing**\n{}\n", track_link(track)));
        }
        None => description.push_str("**🔇 Nothing playing**\n"),
    }

    if snapshot.upcoming.is_empty() {
        description.push_str("\n**📭 Queue is empty**");
    } else {
        description.push_str(&format!(
            "\n**📜 Queue - {} tracks**\n",
            snapshot.upcoming.len()
        ));
        for (index, track) in snapshot
            .upcoming
            .iter()
            .take(QUEUE_DISPLAY_LIMIT)
            .enumerate()
        {
            description.push_str(&format!("{}. {}\n", index + 1, track_link(track)));
        }
        if snapshot.upcoming.len() > QUEUE_DISPLAY_LIMIT {
            description.push_str(&format!(
                "…and {} more",
                snapshot.upcoming.len() - QUEUE_DISPLAY_LIMIT
            ));
        }
    }

    CreateReply::default().embed(
        CreateEmbed::new()
            .title("🎵 Music Queue")
            .description(description)
            .color(SUCCESS_COLOR),
    )
}
