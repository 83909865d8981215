use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use steppe_core::{EcosystemConfig, LifeConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    pub num_sheep: usize,
    pub num_wolves: usize,
    /// Fixed RNG seed; omit for entropy seeding.
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub steps: u64,
    pub delay_ms: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub run: RunConfig,
    pub ecosystem: EcosystemConfig,
    pub life: LifeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                width: 20,
                height: 10,
                num_sheep: 10,
                num_wolves: 5,
                seed: None,
            },
            run: RunConfig {
                steps: 100,
                delay_ms: 100,
            },
            ecosystem: EcosystemConfig::default(),
            life: LifeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads the config file, or falls back to defaults when it does not
    /// exist yet (and writes the default file for next time). A file that
    /// exists but fails to parse is an error, not a silent fallback.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.into(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let default = Self::default();
                if let Ok(serialized) = toml::to_string(&default) {
                    let _ = fs::write(path, serialized);
                }
                Ok(default)
            }
            Err(source) => Err(ConfigError::Read {
                path: path.into(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_parameters() {
        let config = AppConfig::default();
        assert_eq!(config.world.width, 20);
        assert_eq!(config.world.height, 10);
        assert_eq!(config.world.num_sheep, 10);
        assert_eq!(config.world.num_wolves, 5);
        assert_eq!(config.run.steps, 100);
        assert_eq!(config.run.delay_ms, 100);
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let default = AppConfig::default();
        let serialized = toml::to_string(&default).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.world.num_sheep, default.world.num_sheep);
        assert_eq!(parsed.ecosystem.sheep_max_age, 50);
        assert_eq!(parsed.ecosystem.wolf_max_hunger, 10);
    }
}
