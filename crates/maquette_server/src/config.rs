//! Server configuration.

use crate::engine::{EngineConfig, EngineConfigBuilder};
use derive_getters::Getters;
use maquette_error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Playground server settings.
///
/// Loaded from a TOML file when one exists, then overridden by
/// environment variables:
/// - `MAQUETTE_BIND` - socket address to listen on
/// - `MAQUETTE_DELAY_MIN_MS` / `MAQUETTE_DELAY_MAX_MS` - delay window
/// - `MAQUETTE_SEED` - RNG seed for reproducible responses
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    bind: String,
    /// Lower artificial-delay bound in milliseconds
    delay_min_ms: u64,
    /// Upper artificial-delay bound in milliseconds
    delay_max_ms: u64,
    /// Optional RNG seed
    seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            delay_min_ms: 1000,
            delay_max_ms: 3000,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| ConfigError::new(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.validate()
    }

    /// Loads configuration: file when present, defaults otherwise, then
    /// environment overrides on top.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let base = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        base.apply_env()
    }

    fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(bind) = std::env::var("MAQUETTE_BIND") {
            self.bind = bind;
        }
        if let Ok(min) = std::env::var("MAQUETTE_DELAY_MIN_MS") {
            self.delay_min_ms = parse_env("MAQUETTE_DELAY_MIN_MS", &min)?;
        }
        if let Ok(max) = std::env::var("MAQUETTE_DELAY_MAX_MS") {
            self.delay_max_ms = parse_env("MAQUETTE_DELAY_MAX_MS", &max)?;
        }
        if let Ok(seed) = std::env::var("MAQUETTE_SEED") {
            self.seed = Some(parse_env("MAQUETTE_SEED", &seed)?);
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.delay_min_ms > self.delay_max_ms {
            return Err(ConfigError::new(format!(
                "delay_min_ms ({}) exceeds delay_max_ms ({})",
                self.delay_min_ms, self.delay_max_ms
            )));
        }
        Ok(self)
    }

    /// The engine configuration this server config implies.
    pub fn engine_config(&self) -> EngineConfig {
        let mut builder = EngineConfigBuilder::default();
        builder
            .delay_min_ms(self.delay_min_ms)
            .delay_max_ms(self.delay_max_ms)
            .seed(self.seed);
        builder.build().expect("Valid EngineConfig")
    }
}

fn parse_env(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .parse()
        .map_err(|e| ConfigError::new(format!("Invalid {}: {}", name, e)))
}
