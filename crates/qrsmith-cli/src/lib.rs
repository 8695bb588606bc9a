mod args;
mod commands;
pub mod config;
mod handlers;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, JourneyCommand, LogoCommand, TemplateCommand};
pub use commands::run;
