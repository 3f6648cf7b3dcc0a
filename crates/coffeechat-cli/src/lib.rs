//! CLI, configuration loading, output rendering
//!
//! This crate provides the `coffeechat` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command, ConfigAction};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
