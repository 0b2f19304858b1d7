//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the doce CLI.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// doce - stock control for a homemade confectionery
#[derive(Parser, Debug)]
#[command(name = "doce")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override store URL (default: from config)
    #[arg(long, global = true, env = "DOCE_STORE_URL")]
    pub store_url: Option<String>,

    /// Override store API key (default: from config)
    #[arg(long, global = true, env = "DOCE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the stock
    #[command(alias = "l")]
    List {
        /// Only sweets whose flavor contains this text
        #[arg(short, long)]
        flavor: Option<String>,

        /// Only sweets whose category contains this text
        #[arg(short, long)]
        category: Option<String>,

        /// Only sweets priced at or below this value
        #[arg(short = 'p', long, value_parser = clap::value_parser!(f64))]
        max_price: Option<f64>,
    },

    /// Register a new sweet
    #[command(alias = "a")]
    Add {
        /// Product name
        name: String,

        /// Flavor description
        #[arg(short, long)]
        flavor: Option<String>,

        /// Product category
        #[arg(short, long)]
        category: Option<String>,

        /// Units in stock
        #[arg(short = 'n', long)]
        quantity: Option<String>,

        /// Unit price
        #[arg(short, long)]
        price: Option<String>,

        /// Manufacture date (YYYY-MM-DD)
        #[arg(long)]
        made: Option<String>,

        /// Expiry date (YYYY-MM-DD)
        #[arg(short, long)]
        expiry: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show sweet details
    #[command(alias = "s")]
    Show {
        /// Sweet id, id prefix, or name
        item: String,
    },

    /// Delete sweet(s). Irreversible
    #[command(alias = "rm")]
    Delete {
        /// Sweet id(s), id prefix(es), or name(s)
        #[arg(required = true)]
        items: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// View and manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (store_url, api_key, output.color)
        key: String,
        /// Value to set
        value: String,
    },
    /// Print the config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_flags() {
        let cli = Cli::parse_from([
            "doce",
            "list",
            "--flavor",
            "morango",
            "--max-price",
            "10.50",
        ]);
        match cli.command {
            Some(Commands::List {
                flavor,
                category,
                max_price,
            }) => {
                assert_eq!(flavor.as_deref(), Some("morango"));
                assert!(category.is_none());
                assert_eq!(max_price, Some(10.50));
            }
            other => panic!("Expected List, got: {other:?}"),
        }
    }

    #[test]
    fn test_list_rejects_non_numeric_max_price() {
        // Malformed numeric criteria never reach the filter engine.
        let result = Cli::try_parse_from(["doce", "list", "--max-price", "barato"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_requires_at_least_one_item() {
        let result = Cli::try_parse_from(["doce", "delete"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["doce", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
