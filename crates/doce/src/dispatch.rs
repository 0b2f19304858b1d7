//! Command dispatch module for routing CLI commands to their handlers.
//!
//! This module provides trait-based dispatch for CLI commands, keeping the
//! routing logic out of main.rs.

use clap_complete::Shell;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::{self, CommandContext, CommandError, Result, StoreSettings};

/// Trait for commands that run without store credentials.
pub trait NoAuthCommand {
    /// Execute the command without requiring store settings.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that talk to the remote store.
#[allow(async_fn_in_trait)]
pub trait StoreCommand {
    /// Execute the command against the given store.
    async fn execute(&self, ctx: &CommandContext, store: &StoreSettings) -> Result<()>;
}

/// Commands that don't require store credentials.
pub enum NoAuthDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(Shell),
    Help,
}

impl<'a> NoAuthDispatch<'a> {
    /// Try to create a no-auth dispatch from the CLI command.
    /// Returns None if the command needs the store.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(*shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl NoAuthCommand for NoAuthDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(*shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("doce - confectionery stock CLI");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that require the remote store.
pub enum StoreDispatch<'a> {
    List {
        flavor: &'a Option<String>,
        category: &'a Option<String>,
        max_price: Option<f64>,
    },
    Add {
        name: &'a str,
        flavor: &'a Option<String>,
        category: &'a Option<String>,
        quantity: &'a Option<String>,
        price: &'a Option<String>,
        made: &'a Option<String>,
        expiry: &'a Option<String>,
        notes: &'a Option<String>,
    },
    Show {
        item: &'a str,
    },
    Delete {
        items: &'a [String],
        force: bool,
    },
}

impl<'a> StoreDispatch<'a> {
    /// Create a store dispatch from the CLI command.
    /// Returns None for commands handled by [`NoAuthDispatch`].
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::List {
                flavor,
                category,
                max_price,
            }) => Some(Self::List {
                flavor,
                category,
                max_price: *max_price,
            }),
            Some(Commands::Add {
                name,
                flavor,
                category,
                quantity,
                price,
                made,
                expiry,
                notes,
            }) => Some(Self::Add {
                name,
                flavor,
                category,
                quantity,
                price,
                made,
                expiry,
                notes,
            }),
            Some(Commands::Show { item }) => Some(Self::Show { item }),
            Some(Commands::Delete { items, force }) => Some(Self::Delete {
                items,
                force: *force,
            }),
            _ => None,
        }
    }
}

impl StoreCommand for StoreDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, store: &StoreSettings) -> Result<()> {
        match self {
            Self::List {
                flavor,
                category,
                max_price,
            } => {
                let opts = commands::list::ListOptions {
                    flavor: (*flavor).clone(),
                    category: (*category).clone(),
                    max_price: *max_price,
                };
                commands::list::execute(ctx, &opts, store).await
            }
            Self::Add {
                name,
                flavor,
                category,
                quantity,
                price,
                made,
                expiry,
                notes,
            } => {
                let opts = commands::add::AddOptions {
                    name: (*name).to_string(),
                    flavor: (*flavor).clone(),
                    category: (*category).clone(),
                    quantity: (*quantity).clone(),
                    price: (*price).clone(),
                    made: (*made).clone(),
                    expiry: (*expiry).clone(),
                    notes: (*notes).clone(),
                };
                commands::add::execute(ctx, &opts, store).await
            }
            Self::Show { item } => {
                let opts = commands::show::ShowOptions {
                    item: (*item).to_string(),
                };
                commands::show::execute(ctx, &opts, store).await
            }
            Self::Delete { items, force } => {
                let opts = commands::delete::DeleteOptions {
                    items: items.to_vec(),
                    force: *force,
                };
                commands::delete::execute(ctx, &opts, store).await
            }
        }
    }
}
