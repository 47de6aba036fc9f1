pub mod cli;
pub mod commands;
pub mod config;
pub mod input;

pub use cli::{Cli, Commands, InputArgs};
pub use commands::execute;
pub use config::AppConfig;
