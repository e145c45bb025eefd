use askbot::adapters::inbound::discord::commands::register::overwrite_global_commands;
use askbot::config::Config;
use dotenv::dotenv;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    askbot::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(why) => {
            log::error!("{why}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Started refreshing application (/) commands.");

    match overwrite_global_commands(&config).await {
        Ok(registered) => {
            let names: Vec<&str> = registered.iter().map(|command| command.name.as_str()).collect();
            log::info!("Successfully reloaded application (/) commands: {names:?}");
            ExitCode::SUCCESS
        }
        Err(why) => {
            log::error!("{why}");
            ExitCode::FAILURE
        }
    }
}
