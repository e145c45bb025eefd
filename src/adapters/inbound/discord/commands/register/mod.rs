pub mod ask;

use crate::config::Config;
use serenity::all::{ApplicationId, Command, CreateCommand, Http};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Could not register application commands: {0}")]
pub struct RegisterError(#[from] serenity::Error);

/// The complete set of slash commands the bot exposes.
pub fn commands() -> Vec<CreateCommand> {
    vec![ask::register()]
}

/// Replaces every global command of the application with [`commands`].
///
/// Commands missing from the set are removed by Discord, so running this repeatedly is safe.
pub async fn overwrite_global_commands(config: &Config) -> Result<Vec<Command>, RegisterError> {
    let http = Http::new(config.token());
    http.set_application_id(ApplicationId::new(config.application_id()));

    let registered = Command::set_global_commands(&http, commands()).await?;

    Ok(registered)
}
