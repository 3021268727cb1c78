/// Application configuration
///
/// Values are layered, each layer overriding the previous one:
/// 1. Built-in defaults (production endpoint, fixed prompt)
/// 2. `config.json` in the user's config directory:
///    - Linux: ~/.config/waste-sorter/config.json
///    - macOS: ~/Library/Application Support/waste-sorter/config.json
///    - Windows: %APPDATA%\waste-sorter\config.json
/// 3. `WASTE_SORTER_ENDPOINT` / `WASTE_SORTER_TIMEOUT_SECS` environment variables

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::classify::prompt::CLASSIFICATION_PROMPT;

const DEFAULT_ENDPOINT: &str = "https://78pi2wk1zg.execute-api.ap-southeast-2.amazonaws.com/classify";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

const ENDPOINT_VAR: &str = "WASTE_SORTER_ENDPOINT";
const TIMEOUT_VAR: &str = "WASTE_SORTER_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Classification service URL
    pub endpoint: String,
    /// Upper bound on a single classification call
    pub request_timeout: Duration,
    /// Instruction prompt sent with every photo
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            prompt: CLASSIFICATION_PROMPT.to_string(),
        }
    }
}

/// On-disk overrides; every field is optional
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {key} value {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl Config {
    /// Load the layered configuration, logging (and skipping) bad layers
    pub fn load() -> Self {
        let mut config = match Self::config_path().filter(|path| path.exists()) {
            Some(path) => match Self::read_file(&path) {
                Ok(config) => {
                    info!("⚙️  Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("⚠️  Ignoring config file: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        config.apply_env(|key| env::var(key).ok());

        info!("⚙️  Classification endpoint: {}", config.endpoint);
        config
    }

    /// Defaults overlaid with a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        let mut config = Self::default();
        config.apply(file);
        Ok(config)
    }

    /// Where the optional config file lives
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("waste-sorter");
        path.push("config.json");
        Some(path)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(endpoint) = file.endpoint {
            self.endpoint = endpoint;
        }
        match file.timeout_secs {
            Some(0) => warn!("⚠️  timeout_secs must be positive, keeping {:?}", self.request_timeout),
            Some(secs) => self.request_timeout = Duration::from_secs(secs),
            None => {}
        }
    }

    /// Overlay environment variables read through `lookup`
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            info!("{ENDPOINT_VAR} set, overriding endpoint");
            self.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match parse_timeout(&raw) {
                Ok(timeout) => self.request_timeout = timeout,
                Err(e) => warn!("⚠️  {}, keeping {:?}", e, self.request_timeout),
            }
        }
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: TIMEOUT_VAR,
            value: raw.to_string(),
        })
}
