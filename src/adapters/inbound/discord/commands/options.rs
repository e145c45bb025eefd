use crate::adapters::inbound::discord::utils::parse::{ParseError, ResolveOption};
use crate::domain::command::AskOptions;
use serenity::all::ResolvedValue;

impl ResolveOption for AskOptions {
    fn resolve(options: Vec<(&str, ResolvedValue)>) -> Result<Self, ParseError> {
        let mut query = None;

        for (name, value) in options {
            match name {
                "query" => {
                    query = match value {
                        ResolvedValue::String(query) => Some(query.to_string()),
                        _ => return Err(ParseError::new("query was not a string")),
                    }
                }
                other => log::debug!("Ignoring unexpected ask option {other:?}"),
            }
        }

        let Some(query) = query else {
            return Err(ParseError::new("ask was sent without a query"));
        };

        Ok(AskOptions::new(query))
    }
}
