mod args;
mod commands;
mod handlers;
pub mod input;
mod logging;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, StatutesCommand};
pub use commands::run;
