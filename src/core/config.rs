//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pocketbook/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::validation::DEFAULT_MAX_WORDS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PocketbookConfig {
    #[serde(default)]
    pub goals: GoalsConfig,
    #[serde(default)]
    pub sandbox: SandboxConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GoalsConfig {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub max_words: Option<i64>,
    pub required: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SandboxConfig {
    pub base_url: Option<String>,
    pub client_id: Option<String>,
    pub secret: Option<String>,
    pub access_token: Option<String>,
    pub days: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_GOALS_LABEL: &str = "Savings goals";
pub const DEFAULT_GOALS_PLACEHOLDER: &str = "Describe a goal, e.g. build a three month emergency fund";
pub const DEFAULT_SANDBOX_BASE_URL: &str = "https://sandbox.plaid.com";
pub const DEFAULT_TRANSACTION_DAYS: u32 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub goals_label: String,
    pub goals_placeholder: String,
    pub max_words: i64,
    pub goals_required: bool,
    pub sandbox: SandboxSettings,
}

/// Everything the sandbox client needs. Credentials stay optional here;
/// the client reports a config error if they are missing at fetch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxSettings {
    pub base_url: String,
    pub client_id: Option<String>,
    pub secret: Option<String>,
    pub access_token: Option<String>,
    pub days: u32,
}

impl Default for SandboxSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SANDBOX_BASE_URL.to_string(),
            client_id: None,
            secret: None,
            access_token: None,
            days: DEFAULT_TRANSACTION_DAYS,
        }
    }
}

/// Overrides collected from CLI flags (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub max_words: Option<i64>,
    pub days: Option<u32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pocketbook/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pocketbook").join("config.toml"))
}

/// Load config from `~/.pocketbook/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PocketbookConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PocketbookConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PocketbookConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path. Same missing-file behavior as
/// [`load_config`].
pub fn load_config_from(path: &Path) -> Result<PocketbookConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PocketbookConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PocketbookConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // Secrets are in here, so only log which sections are present
    debug!(
        "Config sections: goals.max_words={:?}, sandbox.base_url={:?}",
        config.goals.max_words, config.sandbox.base_url
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Pocketbook Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [goals]
# label = "Savings goals"
# placeholder = "Describe a goal"
# max_words = 50                     # Or set POCKETBOOK_MAX_WORDS env var
# required = false                   # Show an error while the list is empty

# [sandbox]
# base_url = "https://sandbox.plaid.com"
# client_id = "..."                  # Or set SANDBOX_CLIENT_ID env var
# secret = "..."                     # Or set SANDBOX_SECRET env var
# access_token = "access-sandbox-..." # Or set SANDBOX_ACCESS_TOKEN env var
# days = 30                          # How far back to fetch transactions
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PocketbookConfig, cli: CliOverrides) -> ResolvedConfig {
    // Max words: CLI → env → config → default
    let max_words = cli
        .max_words
        .or_else(|| env_parse("POCKETBOOK_MAX_WORDS"))
        .or(config.goals.max_words)
        .unwrap_or(DEFAULT_MAX_WORDS);

    let sandbox = SandboxSettings {
        // Base URL: env → config → default
        base_url: std::env::var("SANDBOX_BASE_URL")
            .ok()
            .or_else(|| config.sandbox.base_url.clone())
            .unwrap_or_else(|| DEFAULT_SANDBOX_BASE_URL.to_string()),
        // Credentials: env → config
        client_id: std::env::var("SANDBOX_CLIENT_ID")
            .ok()
            .or_else(|| config.sandbox.client_id.clone()),
        secret: std::env::var("SANDBOX_SECRET")
            .ok()
            .or_else(|| config.sandbox.secret.clone()),
        access_token: std::env::var("SANDBOX_ACCESS_TOKEN")
            .ok()
            .or_else(|| config.sandbox.access_token.clone()),
        // Days: CLI → config → default
        days: cli
            .days
            .or(config.sandbox.days)
            .unwrap_or(DEFAULT_TRANSACTION_DAYS),
    };

    ResolvedConfig {
        goals_label: config
            .goals
            .label
            .clone()
            .unwrap_or_else(|| DEFAULT_GOALS_LABEL.to_string()),
        goals_placeholder: config
            .goals
            .placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_GOALS_PLACEHOLDER.to_string()),
        max_words,
        goals_required: config.goals.required.unwrap_or(false),
        sandbox,
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}
