pub const ASK: &str = "ask";

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, PartialEq, Eq)]
pub struct AskOptions {
    query: String,
}

impl AskOptions {
    #[must_use]
    pub fn new(query: String) -> Self {
        Self { query }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Every slash command the bot knows how to handle. Anything else arrives as `Unknown`.
#[derive(Debug, PartialEq, Eq)]
pub enum BotCommand {
    Ask(AskOptions),
    Unknown(String),
}
