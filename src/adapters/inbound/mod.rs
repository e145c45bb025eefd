pub mod discord;

use crate::adapters::inbound::discord::client::Discord;
use crate::config::Config;
use crate::domain::app::App;
use crate::ports::inbound::client::{Client, ClientError};
use crate::ports::outbound::answer_service::AnswerService;

pub async fn create_client<A>(config: &Config, app: App<A>) -> Result<impl Client, ClientError>
where
    A: AnswerService + Send + Sync + 'static,
{
    Discord::new(config, app).await
}
