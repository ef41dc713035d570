use std::env;
use std::time::Duration;

use crate::player::MusicError;

/// How long an idle voice session lingers before the bot leaves on its own.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(3 * 60);

const DEFAULT_PREFIX: &str = "y!";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub prefix: String,
    pub idle_timeout: Duration,
}

impl Config {
    /// Build the configuration from environment variables. `DISCORD_TOKEN` is
    /// required; `COMMAND_PREFIX` and `IDLE_TIMEOUT` (humantime syntax, e.g.
    /// "3m") fall back to defaults.
    pub fn from_env() -> Result<Self, MusicError> {
        let token = env::var("DISCORD_TOKEN")
            .map_err(|_| MusicError::ConfigError("DISCORD_TOKEN is not set".to_string()))?;

        let prefix = env::var("COMMAND_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());

        let idle_timeout = match env::var("IDLE_TIMEOUT") {
            Ok(raw) => humantime::parse_duration(&raw)
                .map_err(|e| MusicError::ConfigError(format!("invalid IDLE_TIMEOUT: {e}")))?,
            Err(_) => DEFAULT_IDLE_TIMEOUT,
        };

        Ok(Self {
            token,
            prefix,
            idle_timeout,
        })
    }
}
