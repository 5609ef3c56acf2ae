use std::path::{Path, PathBuf};

use reqwest::Url;

use crate::config::schema::{Config, CONFIG_VERSION};
use crate::error::{ConfigError, Result as BidboardResult};

const SCHEMA_JSON: &str = include_str!("../../../../schema/config-v1.json");

/// Environment variable overriding `api_base`.
pub const API_BASE_ENV: &str = "BIDBOARD_API";

/// `<platform config dir>/bidboard/config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("bidboard").join("config.json"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Loads a config file and applies environment overrides.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut config = load_config_from_str(&content)?;
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Loads `path` when given, else the default config file if it exists, else
/// a config pointing at `fallback_api_base`. Environment overrides apply in
/// every case.
pub fn resolve_config(path: Option<&Path>, fallback_api_base: &str) -> BidboardResult<Config> {
    if let Some(path) = path {
        return Ok(load_config(path)?);
    }

    match default_config_path() {
        Ok(path) if path.exists() => Ok(load_config(&path)?),
        _ => {
            log::debug!("No config file found, using {}", fallback_api_base);
            let mut config = Config::with_api_base(fallback_api_base);
            apply_env_overrides(&mut config)?;
            validate_config(&config)?;
            Ok(config)
        }
    }
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let json_value: serde_json::Value = serde_json::from_str(content)?;

    validate_schema(&json_value)?;

    let config: Config = serde_json::from_value(json_value)?;

    validate_config(&config)?;

    Ok(config)
}

pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
    if let Ok(api_base) = std::env::var(API_BASE_ENV) {
        let api_base = api_base.trim();
        if !api_base.is_empty() {
            validate_api_base(api_base)?;
            log::debug!("{} overrides api_base with {}", API_BASE_ENV, api_base);
            config.api_base = api_base.to_string();
        }
    }
    Ok(())
}

fn validate_schema(json_value: &serde_json::Value) -> Result<(), ConfigError> {
    let schema: serde_json::Value =
        serde_json::from_str(SCHEMA_JSON).map_err(|e| ConfigError::Validation {
            message: format!("Invalid embedded schema JSON: {}", e),
        })?;

    let validator = jsonschema::validator_for(&schema).map_err(|e| ConfigError::Validation {
        message: format!("Failed to compile JSON schema: {}", e),
    })?;

    let error_messages: Vec<String> = validator
        .iter_errors(json_value)
        .map(|e| e.to_string())
        .collect();
    if !error_messages.is_empty() {
        return Err(ConfigError::SchemaValidation {
            errors: error_messages.join("; "),
        });
    }

    Ok(())
}

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    validate_api_base(&config.api_base)?;

    if config.http.connect_timeout_secs == 0 || config.http.request_timeout_secs == 0 {
        return Err(ConfigError::Validation {
            message: "HTTP timeouts must be at least one second".to_string(),
        });
    }

    if config.summary.description_limit == 0 {
        return Err(ConfigError::Validation {
            message: "summary.description_limit must be positive".to_string(),
        });
    }

    Ok(())
}

fn validate_api_base(api_base: &str) -> Result<(), ConfigError> {
    let url = Url::parse(api_base).map_err(|e| ConfigError::InvalidApiBase {
        url: api_base.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidApiBase {
            url: api_base.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
