pub mod interaction;
pub mod options;
pub mod register;

use crate::adapters::inbound::discord::utils::parse::{self, ParseError};
use crate::domain::command::{BotCommand, ASK};
use serenity::all::ResolvedOption;

/// Maps a raw command name and its options onto the commands the bot understands.
pub fn decode(name: &str, options: Vec<ResolvedOption>) -> Result<BotCommand, ParseError> {
    match name {
        ASK => Ok(BotCommand::Ask(parse::options(options)?)),
        other => Ok(BotCommand::Unknown(other.to_string())),
    }
}
