//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/doce/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Minimum key length to apply masking (show first and last N characters).
const KEY_MASK_MIN_LENGTH: usize = 8;

/// Number of characters to show at start/end of a masked API key.
const KEY_MASK_VISIBLE_CHARS: usize = 4;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Base URL of the remote store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_url: Option<String>,

    /// API key for the store (can use DOCE_API_KEY env var instead).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            store_url: None,
            api_key: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/doce/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("DOCE_CONFIG") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    // Use XDG_CONFIG_HOME if set, otherwise ~/.config/doce
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("doce"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("doce"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("DOCE_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    Ok(get_config_dir()?.join("config.toml"))
}

/// Loads the configuration from disk, or defaults when the file is absent.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|e| CommandError::Config(format!("invalid config file '{}': {e}", path.display())))
}

/// Saves the configuration to disk, creating the directory if needed.
pub fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("failed to serialize config: {e}")))?;
    fs::write(&path, contents)?;

    Ok(())
}

/// Masks an API key for display, keeping a few characters on each end.
fn mask_key(key: &str) -> String {
    if key.len() < KEY_MASK_MIN_LENGTH {
        return "****".to_string();
    }
    format!(
        "{}...{}",
        &key[..KEY_MASK_VISIBLE_CHARS],
        &key[key.len() - KEY_MASK_VISIBLE_CHARS..]
    )
}

/// Executes `config show`.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "version": config.version,
            "store_url": config.store_url,
            "api_key": config.api_key.as_deref().map(mask_key),
            "output": { "color": config.output.color },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("store_url = {}", config.store_url.as_deref().unwrap_or("(not set)"));
        println!(
            "api_key = {}",
            config
                .api_key
                .as_deref()
                .map(mask_key)
                .unwrap_or_else(|| "(not set)".to_string())
        );
        if let Some(color) = config.output.color {
            println!("output.color = {color}");
        }
    }

    Ok(())
}

/// Options for `config set`.
#[derive(Debug)]
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Value to set.
    pub value: String,
}

/// Executes `config set`.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;

    match opts.key.as_str() {
        "store_url" => config.store_url = Some(opts.value.clone()),
        "api_key" => config.api_key = Some(opts.value.clone()),
        "output.color" => {
            let value = opts.value.parse::<bool>().map_err(|_| {
                CommandError::Config(format!(
                    "invalid value for output.color: '{}' (expected true or false)",
                    opts.value
                ))
            })?;
            config.output.color = Some(value);
        }
        other => {
            return Err(CommandError::Config(format!(
                "unknown config key: '{other}' (expected store_url, api_key, or output.color)"
            )));
        }
    }

    save_config(&config)?;

    if !ctx.quiet && !ctx.json_output {
        println!("Set {}", opts.key);
    }

    Ok(())
}

/// Executes `config path`.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        println!(
            "{}",
            serde_json::json!({ "path": path.display().to_string() })
        );
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Points DOCE_CONFIG at a temp file and runs `f`, restoring afterwards.
    fn with_temp_config<F: FnOnce(&PathBuf)>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let original = env::var("DOCE_CONFIG").ok();
        env::set_var("DOCE_CONFIG", config_path.to_str().unwrap());

        f(&config_path);

        match original {
            Some(val) => env::set_var("DOCE_CONFIG", val),
            None => env::remove_var("DOCE_CONFIG"),
        }
    }

    #[test]
    #[serial]
    fn test_load_config_defaults_when_missing() {
        with_temp_config(|_| {
            let config = load_config().unwrap();
            assert_eq!(config.version, CONFIG_VERSION);
            assert!(config.store_url.is_none());
            assert!(config.api_key.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_save_and_reload_config() {
        with_temp_config(|path| {
            let config = Config {
                store_url: Some("https://example.supabase.co".to_string()),
                api_key: Some("secret-key-123456".to_string()),
                ..Config::default()
            };
            save_config(&config).unwrap();
            assert!(path.exists());

            let loaded = load_config().unwrap();
            assert_eq!(
                loaded.store_url.as_deref(),
                Some("https://example.supabase.co")
            );
            assert_eq!(loaded.api_key.as_deref(), Some("secret-key-123456"));
        });
    }

    #[test]
    #[serial]
    fn test_execute_set_store_url() {
        with_temp_config(|_| {
            let ctx = CommandContext {
                json_output: false,
                use_colors: false,
                quiet: true,
                verbose: false,
            };
            let opts = ConfigSetOptions {
                key: "store_url".to_string(),
                value: "https://example.supabase.co".to_string(),
            };

            execute_set(&ctx, &opts).unwrap();

            let config = load_config().unwrap();
            assert_eq!(
                config.store_url.as_deref(),
                Some("https://example.supabase.co")
            );
        });
    }

    #[test]
    #[serial]
    fn test_execute_set_rejects_unknown_key() {
        with_temp_config(|_| {
            let ctx = CommandContext {
                json_output: false,
                use_colors: false,
                quiet: true,
                verbose: false,
            };
            let opts = ConfigSetOptions {
                key: "token".to_string(),
                value: "x".to_string(),
            };

            let err = execute_set(&ctx, &opts).unwrap_err();
            assert!(err.to_string().contains("unknown config key"));
        });
    }

    #[test]
    #[serial]
    fn test_load_config_rejects_invalid_toml() {
        with_temp_config(|path| {
            fs::write(path, "store_url = [not toml").unwrap();
            let err = load_config().unwrap_err();
            assert!(err.to_string().contains("invalid config file"));
        });
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("short"), "****");
        assert_eq!(mask_key("abcdefghijkl"), "abcd...ijkl");
    }
}
