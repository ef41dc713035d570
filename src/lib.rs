use std::sync::{Arc, LazyLock};

pub mod commands;
pub mod config;
pub mod player;

use config::Config;
use player::SubscriptionRegistry;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

/// Shared HTTP client, handed to songbird's lazy inputs.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// User data, stored and accessible in all command invocations.
pub struct Data {
    pub registry: Arc<SubscriptionRegistry>,
    pub config: Config,
}
