pub mod app;
pub mod command;
pub mod functions;
