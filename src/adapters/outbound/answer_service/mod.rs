mod http;

pub use http::{HttpAnswerService, HttpAnswerServiceError};

use crate::config::Config;

pub fn init_answer_service(config: &Config) -> Result<HttpAnswerService, HttpAnswerServiceError> {
    HttpAnswerService::new(config.answer_service_url(), config.answer_timeout())
}
