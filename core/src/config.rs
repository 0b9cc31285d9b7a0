use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Environment variable holding inline YAML configuration.
pub const CONFIG_ENV_VAR: &str = "GREETER_CONFIG";

const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GreeterConfig {
    pub version: u32,
    pub greeting: GreetingOptions,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GreetingOptions {
    pub default_name: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            greeting: GreetingOptions::default(),
        }
    }
}

impl Default for GreetingOptions {
    fn default() -> Self {
        Self {
            default_name: "World".to_string(),
        }
    }
}

pub async fn load_config(config_path: Option<&str>) -> Result<GreeterConfig, ConfigError> {
    match config_path {
        Some(path) => GreeterConfig::from_file(path),
        None => GreeterConfig::from_env(),
    }
}

impl GreeterConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_string(),
            error: Box::new(e),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_string(),
            error: Box::new(e),
        })
    }

    /// Reads inline YAML from `GREETER_CONFIG`. An unset variable means the
    /// built-in defaults; the greeter needs no configuration to run.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(config_str) => {
                serde_yaml::from_str(&config_str).map_err(|e| ConfigError::Invalid {
                    message: e.to_string(),
                })
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != SUPPORTED_VERSION {
            return Err(ConfigError::ValidationFailed {
                reason: format!("Unsupported config version: {}", self.version),
            });
        }
        if self.greeting.default_name.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "Default name cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
