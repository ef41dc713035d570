//! Music playback commands and their supporting glue.

pub mod clean;
pub mod play;
pub mod queue;
pub mod skip;
pub mod stop;

pub mod audio_sources;
pub mod utils;

use crate::{CommandResult, Context};
