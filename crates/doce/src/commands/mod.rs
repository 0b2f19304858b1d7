//! Command implementations for the doce CLI.
//!
//! This module contains the actual command handlers that are invoked by the
//! CLI, plus the shared context and error types they use.

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod list;
pub mod show;

use chrono::{Local, NaiveDateTime};

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Registration validation failure.
    #[error("{0}")]
    Registration(#[from] doceria_core_rs::RegistrationError),

    /// Item lookup failure.
    #[error("{0}")]
    Lookup(#[from] doceria_core_rs::LookupError),

    /// Store error.
    #[error("store error: {0}")]
    Api(#[from] doceria_api_rs::error::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// Resolved store connection settings.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Base URL of the remote store.
    pub url: String,
    /// API key for the store.
    pub api_key: String,
}

/// The moment the view is loaded; status derivation is relative to this.
pub fn view_now() -> NaiveDateTime {
    Local::now().naive_local()
}
