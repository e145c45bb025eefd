pub mod ask;

use crate::domain::app::App;
use crate::domain::command::BotCommand;
use crate::ports::inbound::client::AskInteraction;
use crate::ports::outbound::answer_service::AnswerService;

impl<A> App<A>
where
    A: AnswerService + Send + Sync,
{
    pub async fn run_command<I: AskInteraction + Sync>(&self, interaction: &I, command: BotCommand) {
        match command {
            BotCommand::Ask(options) => self.ask_command(interaction, options).await,
            BotCommand::Unknown(name) => {
                log::warn!("Received unrecognised command {name:?}, ignoring it");
            }
        }
    }
}
