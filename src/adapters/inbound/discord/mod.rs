pub mod client;
pub mod commands;
mod utils;

use crate::adapters::inbound::discord::commands::interaction::DiscordCommand;
use crate::domain::app::App;
use crate::ports::outbound::answer_service::AnswerService;
use async_trait::async_trait;
use serenity::all::{Context, EventHandler, Interaction, Ready};

#[async_trait]
impl<A> EventHandler for App<A>
where
    A: AnswerService + Send + Sync,
{
    async fn ready(&self, _: Context, ready: Ready) {
        log::info!("{} is online!", ready.user.name);
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let command = match interaction {
            Interaction::Command(command) => command,
            other => {
                log::debug!("Ignoring {:?} interaction", other.kind());
                return;
            }
        };

        log::info!(
            "Received command: {:?} from {}",
            command.data.name,
            command.channel_id,
        );

        let bot_command = match commands::decode(&command.data.name, command.data.options()) {
            Ok(bot_command) => bot_command,
            Err(err) => {
                log::warn!("{err}");
                return;
            }
        };

        let interaction = DiscordCommand::new(ctx, command);
        self.run_command(&interaction, bot_command).await;
    }
}
