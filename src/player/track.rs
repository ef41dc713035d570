use serenity::model::id::UserId;

/// A queued piece of media. Immutable once created; owned by exactly one
/// queue slot (or the `current` slot) at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Opaque media reference handed to the output.
    pub locator: String,
    /// Display title captured at resolution time, when the resolver had one.
    pub title: Option<String>,
    /// The user who requested the track.
    pub requested_by: UserId,
}

impl Track {
    pub fn new(locator: impl Into<String>, requested_by: UserId) -> Self {
        Self {
            locator: locator.into(),
            title: None,
            requested_by,
        }
    }

    pub fn with_title(
        locator: impl Into<String>,
        title: impl Into<String>,
        requested_by: UserId,
    ) -> Self {
        Self {
            locator: locator.into(),
            title: Some(title.into()),
            requested_by,
        }
    }

    /// Text shown in replies: the title when known, the locator otherwise.
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.locator)
    }
}

/// Consistent copy of a subscription's playback state, for display.
#[derive(Debug, Clone, Default)]
pub struct QueueSnapshot {
    pub current: Option<Track>,
    pub upcoming: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_title() {
        let plain = Track::new("https://youtu.be/x", UserId::new(1));
        assert_eq!(plain.display_name(), "https://youtu.be/x");

        let titled = Track::with_title("https://youtu.be/x", "Some Song", UserId::new(1));
        assert_eq!(titled.display_name(), "Some Song");
    }
}
