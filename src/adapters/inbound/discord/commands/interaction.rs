use crate::adapters::inbound::discord::utils::message::{fit_to_message, MESSAGE_LIMIT};
use crate::ports::inbound::client::{AskInteraction, MessageInteractionError};
use async_trait::async_trait;
use serenity::all::{CommandInteraction, Context, EditInteractionResponse};
use tokio::time::Instant;

pub struct DiscordCommand {
    ctx: Context,
    command: CommandInteraction,
}

impl DiscordCommand {
    pub fn new(ctx: Context, command: CommandInteraction) -> Self {
        Self { ctx, command }
    }
}

#[async_trait]
impl AskInteraction for DiscordCommand {
    async fn defer(&self) -> Result<(), MessageInteractionError> {
        self.command
            .defer(&self.ctx)
            .await
            .map_err(|why| MessageInteractionError::new(why.to_string()))
    }

    async fn reply(&self, message: String) -> Result<(), MessageInteractionError> {
        let start = Instant::now();
        let content = fit_to_message(&message, MESSAGE_LIMIT);
        if let Err(why) = self
            .command
            .edit_response(&self.ctx, EditInteractionResponse::new().content(content))
            .await
        {
            Err(MessageInteractionError::new(why.to_string()))
        } else {
            log::info!(
                "Discord RTT took {}ms to send the answer to {:?}",
                start.elapsed().as_millis(),
                self.command.channel_id.to_string()
            );
            Ok(())
        }
    }
}
