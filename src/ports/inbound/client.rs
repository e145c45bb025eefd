use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("An error occurred while responding to an interaction: {0}")]
pub struct MessageInteractionError(String);

impl MessageInteractionError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[derive(Debug, Error)]
#[error("Discord client error: {0}")]
pub struct ClientError(String);

impl ClientError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// A single slash-command invocation that is answered with a deferred reply.
///
/// `defer` acknowledges the invocation so the platform keeps the interaction open while the
/// answer is fetched, `reply` then fills in the deferred response.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AskInteraction {
    async fn defer(&self) -> Result<(), MessageInteractionError>;
    async fn reply(&self, message: String) -> Result<(), MessageInteractionError>;
}

#[async_trait]
pub trait Client {
    async fn run(&mut self) -> Result<(), ClientError>;
}
