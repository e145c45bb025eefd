use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone, PartialEq))]
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Malformed(String),
    #[error("the answering service returned an empty answer")]
    Empty,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnswerService {
    async fn ask(&self, query: &str) -> Result<String, AnswerError>;
}
