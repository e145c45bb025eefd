pub mod message;
pub mod parse;
