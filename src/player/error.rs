use thiserror::Error;

/// Errors that can occur during music operations
#[derive(Error, Debug)]
pub enum MusicError {
    #[error("Not in a guild")]
    NotInGuild,

    #[error("User is not in a voice channel")]
    UserNotInVoiceChannel,

    #[error("Failed to join voice channel: {0}")]
    JoinError(String),

    #[error("Failed to get voice manager")]
    NoVoiceManager,

    #[error("No results for: {0}")]
    NoSearchResults(String),

    #[error("Audio source error: {0}")]
    AudioSourceError(String),

    #[error("Failed to open stream: {0}")]
    StreamOpenError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for music operations
pub type MusicResult<T> = Result<T, MusicError>;
