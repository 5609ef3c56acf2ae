use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BidboardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidApiBase { url: String, reason: String },

    #[error("Could not determine a default config directory")]
    NoConfigDir,
}

/// Errors returned by the marketplace backend client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// The request never produced a response (connect, timeout, TLS).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Backend returned {status}{}", suffix(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

fn suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl ApiError {
    /// The message supplied by the backend in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("A global logger is already installed")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, BidboardError>;
