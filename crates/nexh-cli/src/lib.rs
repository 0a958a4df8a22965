//! NexH CLI library.
//!
//! Configuration loading, command execution and output formatting for the
//! `nexh` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::{Config, TimeoutPreset};
pub use error::{CliError, Result};
pub use output::Formatter;
