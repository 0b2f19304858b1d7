use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError, StoreSettings};
use dispatch::{NoAuthCommand, NoAuthDispatch, StoreCommand, StoreDispatch};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    // Commands that don't need the store (config, completions, help)
    if let Some(dispatch) = NoAuthDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    // Everything else talks to the remote store
    let store = resolve_store(cli)?;
    if let Some(dispatch) = StoreDispatch::from_cli(cli) {
        return dispatch.execute(&ctx, &store).await;
    }

    // Fallback for any unhandled commands
    if !cli.quiet {
        println!("Command not yet implemented: {:?}", cli.command);
    }
    Ok(())
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Registration(_) => "VALIDATION_ERROR",
        CommandError::Lookup(_) => "LOOKUP_ERROR",
        CommandError::Api(_) => "API_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Registration(_) => ExitCode::from(1),
        CommandError::Lookup(_) => ExitCode::from(1),
        CommandError::Api(doceria_api_rs::error::Error::Api(api)) => {
            ExitCode::from(api.exit_code() as u8)
        }
        CommandError::Api(_) => ExitCode::from(2),
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}

/// Resolves the store settings with priority: flag/env > config file.
///
/// The resolution order for both the URL and the API key is:
/// 1. Command line flag (`--store-url` / `--api-key`)
/// 2. Environment variable (`DOCE_STORE_URL` / `DOCE_API_KEY`, via clap)
/// 3. Config file (`~/.config/doce/config.toml`)
fn resolve_store(cli: &Cli) -> commands::Result<StoreSettings> {
    // Config load failures here degrade to "not configured"; `doce config
    // show` reports the parse error itself.
    let config = load_config().unwrap_or_default();

    let url = cli
        .store_url
        .clone()
        .or(config.store_url)
        .ok_or_else(|| {
            CommandError::Config(
                "store URL not set. Use --store-url, DOCE_STORE_URL, or 'doce config set store_url <url>'"
                    .to_string(),
            )
        })?;

    let api_key = cli
        .api_key
        .clone()
        .or(config.api_key)
        .ok_or_else(|| {
            CommandError::Config(
                "API key not set. Use --api-key, DOCE_API_KEY, or 'doce config set api_key <key>'"
                    .to_string(),
            )
        })?;

    Ok(StoreSettings { url, api_key })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper to create a test CLI with the given credentials.
    fn cli_with(store_url: Option<String>, api_key: Option<String>) -> Cli {
        Cli {
            verbose: false,
            quiet: false,
            json: false,
            no_color: false,
            store_url,
            api_key,
            command: Some(cli::Commands::List {
                flavor: None,
                category: None,
                max_price: None,
            }),
        }
    }

    /// Clears credential env vars and points DOCE_CONFIG at a missing file,
    /// restoring everything afterwards.
    fn with_clean_env<F: FnOnce()>(f: F) {
        let saved: Vec<(&str, Option<String>)> = ["DOCE_STORE_URL", "DOCE_API_KEY", "DOCE_CONFIG"]
            .iter()
            .map(|name| (*name, env::var(name).ok()))
            .collect();

        env::remove_var("DOCE_STORE_URL");
        env::remove_var("DOCE_API_KEY");
        env::set_var("DOCE_CONFIG", "/tmp/doce-test-nonexistent/config.toml");

        f();

        for (name, value) in saved {
            match value {
                Some(val) => env::set_var(name, val),
                None => env::remove_var(name),
            }
        }
    }

    #[test]
    #[serial]
    fn test_resolve_store_from_flags() {
        with_clean_env(|| {
            let cli = cli_with(
                Some("https://example.supabase.co".to_string()),
                Some("flag-key".to_string()),
            );
            let store = resolve_store(&cli).unwrap();
            assert_eq!(store.url, "https://example.supabase.co");
            assert_eq!(store.api_key, "flag-key");
        });
    }

    #[test]
    #[serial]
    fn test_resolve_store_missing_url_fails() {
        with_clean_env(|| {
            let cli = cli_with(None, Some("flag-key".to_string()));
            let err = resolve_store(&cli).unwrap_err();
            assert!(err.to_string().contains("store URL not set"));
        });
    }

    #[test]
    #[serial]
    fn test_resolve_store_missing_key_fails() {
        with_clean_env(|| {
            let cli = cli_with(Some("https://example.supabase.co".to_string()), None);
            let err = resolve_store(&cli).unwrap_err();
            assert!(err.to_string().contains("API key not set"));
        });
    }

    #[test]
    #[serial]
    fn test_resolve_store_from_config_file() {
        use std::fs;
        use std::io::Write;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, r#"store_url = "https://config.supabase.co""#).unwrap();
        writeln!(file, r#"api_key = "config-key""#).unwrap();

        let saved: Vec<(&str, Option<String>)> = ["DOCE_STORE_URL", "DOCE_API_KEY", "DOCE_CONFIG"]
            .iter()
            .map(|name| (*name, env::var(name).ok()))
            .collect();
        env::remove_var("DOCE_STORE_URL");
        env::remove_var("DOCE_API_KEY");
        env::set_var("DOCE_CONFIG", config_path.to_str().unwrap());

        let cli = cli_with(None, None);
        let result = resolve_store(&cli);

        for (name, value) in saved {
            match value {
                Some(val) => env::set_var(name, val),
                None => env::remove_var(name),
            }
        }

        let store = result.unwrap();
        assert_eq!(store.url, "https://config.supabase.co");
        assert_eq!(store.api_key, "config-key");
    }

    #[test]
    #[serial]
    fn test_flags_override_config_file() {
        use std::fs;
        use std::io::Write;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, r#"store_url = "https://config.supabase.co""#).unwrap();
        writeln!(file, r#"api_key = "config-key""#).unwrap();

        let saved = env::var("DOCE_CONFIG").ok();
        env::set_var("DOCE_CONFIG", config_path.to_str().unwrap());

        let cli = cli_with(
            Some("https://flag.supabase.co".to_string()),
            Some("flag-key".to_string()),
        );
        let result = resolve_store(&cli);

        match saved {
            Some(val) => env::set_var("DOCE_CONFIG", val),
            None => env::remove_var("DOCE_CONFIG"),
        }

        let store = result.unwrap();
        assert_eq!(store.url, "https://flag.supabase.co");
        assert_eq!(store.api_key, "flag-key");
    }
}
