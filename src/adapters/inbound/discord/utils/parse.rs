use serenity::all::{ResolvedOption, ResolvedValue};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Error parsing command options: {message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub trait ResolveOption {
    fn resolve(options: Vec<(&str, ResolvedValue)>) -> Result<Self, ParseError>
    where
        Self: Sized;
}

pub fn options<T: ResolveOption>(options: Vec<ResolvedOption>) -> Result<T, ParseError> {
    let options: Vec<(&str, ResolvedValue)> = options
        .into_iter()
        .map(|option| (option.name, option.value))
        .collect();

    T::resolve(options)
}
