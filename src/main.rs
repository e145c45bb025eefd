use askbot::adapters::inbound::create_client;
use askbot::adapters::outbound::answer_service::init_answer_service;
use askbot::config::Config;
use askbot::domain::app::App;
use askbot::ports::inbound::client::Client;
use dotenv::dotenv;
use std::error::Error;
use std::process::ExitCode;

async fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    log::debug!("Loaded {config:?}");

    let answer_service = init_answer_service(&config)?;
    let app = App::new(answer_service);

    let mut client = create_client(&config, app).await?;
    client.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    askbot::init_logging();

    if let Err(why) = run().await {
        log::error!("{why}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
