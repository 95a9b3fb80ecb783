use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;
use crate::scoring::{FilterConfig, SignalWeights};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub timeout_ms: u64,
    pub tx_saturation: f64,
    pub balance_saturation: f64,
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "http://localhost:8545".to_string(),
            timeout_ms: 5000,
            tx_saturation: 50.0,
            balance_saturation: 10.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub weights: SignalWeights,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub reputation: ReputationConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                EngineConfig::default()
            }
        } else {
            EngineConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(ttl) = env::var("SUGGEST_CACHE_TTL_SECS") {
            if let Ok(value) = ttl.parse::<u64>() {
                self.cache.ttl_secs = value;
            }
        }
        if let Ok(endpoint) = env::var("REPUTATION_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.reputation.endpoint = endpoint;
                self.reputation.enabled = true;
            }
        }
        if let Ok(timeout) = env::var("REPUTATION_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.reputation.timeout_ms = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("SUGGEST_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/suggest.toml")))
}
