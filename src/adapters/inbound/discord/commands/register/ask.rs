use crate::domain::command::ASK;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

pub fn register() -> CreateCommand {
    CreateCommand::new(ASK)
        .description("Ask a scheduling-related question")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "query", "Your question")
                .required(true),
        )
}
