use crate::config::Config;
use crate::domain::app::App;
use crate::ports::inbound::client::{Client, ClientError};
use crate::ports::outbound::answer_service::AnswerService;
use async_trait::async_trait;
use serenity::all::GatewayIntents;
use serenity::Client as DiscordClient;

pub struct Discord(DiscordClient);

impl Discord {
    pub async fn new<A>(config: &Config, app: App<A>) -> Result<Self, ClientError>
    where
        A: AnswerService + Send + Sync + 'static,
    {
        // Slash commands arrive as interactions, which need no privileged intents
        let intents = GatewayIntents::GUILDS;

        let client = DiscordClient::builder(config.token(), intents)
            .event_handler(app)
            .await
            .map_err(|why| ClientError::new(format!("Error creating client - {why}")))?;

        Ok(Self(client))
    }
}

#[async_trait]
impl Client for Discord {
    async fn run(&mut self) -> Result<(), ClientError> {
        self.0
            .start()
            .await
            .map_err(|why| ClientError::new(format!("Error starting client - {why}")))
    }
}
