use crate::ports::outbound::answer_service::{AnswerError, AnswerService};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{RequestBuilder, Response, Url};
use serde::Deserialize;
use std::error::Error as _;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

#[derive(Debug, Error)]
pub enum HttpAnswerServiceError {
    #[error("Failed HTTP client build: {0}")]
    Client(#[from] reqwest::Error),
    #[error("{0} can't be used as a base url")]
    BaseUrl(Url),
}

#[derive(Deserialize)]
struct Answer {
    answer: String,
}

pub struct HttpAnswerService {
    http_client: reqwest::Client,
    endpoint: Url,
}

impl HttpAnswerService {
    pub fn new(base_url: &Url, timeout: Option<Duration>) -> Result<Self, HttpAnswerServiceError> {
        let endpoint = endpoint(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("Rust Discord Bot"));
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    fn request(&self, query: &str) -> RequestBuilder {
        self.http_client
            .get(self.endpoint.clone())
            .query(&[("query", query)])
    }
}

fn endpoint(base_url: &Url) -> Result<Url, HttpAnswerServiceError> {
    let mut endpoint = base_url.clone();
    endpoint
        .path_segments_mut()
        .map_err(|()| HttpAnswerServiceError::BaseUrl(base_url.clone()))?
        .pop_if_empty()
        .push("ask");
    Ok(endpoint)
}

/// Flattens an error and its sources into one line, since reqwest keeps the interesting
/// part ("Connection refused", ...) in the source chain.
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, query: &str) -> Result<String, AnswerError> {
        let start = Instant::now();

        let response = self
            .request(query)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|why| AnswerError::Unavailable(describe(&why)))?;

        let Answer { answer } = response
            .json::<Answer>()
            .await
            .map_err(|why| AnswerError::Malformed(describe(&why)))?;

        log::info!(
            "Answering service took {}ms to answer {:?}",
            start.elapsed().as_millis(),
            query
        );

        if answer.trim().is_empty() {
            return Err(AnswerError::Empty);
        }

        Ok(answer)
    }
}
