//! Application configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub reactions: ReactionsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Reaction subsystem settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReactionsConfig {
    /// Reaction type definitions file (TOML, JSON or YAML)
    #[serde(default)]
    pub types_file: Option<String>,
}

// Default value functions
fn default_app_name() -> String {
    "reactions".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Parse a numeric setting, keeping the default when the variable is unset
fn parse_count(name: &'static str, raw: Option<String>, default: u32) -> Result<u32, ConfigError> {
    match raw {
        Some(raw) => {
            let parsed = raw.trim().parse();
            parsed.map_err(|_| ConfigError::InvalidValue(name, raw))
        }
        None => Ok(default),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_count(
                    "DATABASE_MAX_CONNECTIONS",
                    env::var("DATABASE_MAX_CONNECTIONS").ok(),
                    default_max_connections(),
                )?,
                min_connections: parse_count(
                    "DATABASE_MIN_CONNECTIONS",
                    env::var("DATABASE_MIN_CONNECTIONS").ok(),
                    default_min_connections(),
                )?,
            },
            reactions: ReactionsConfig {
                types_file: env::var("REACTION_TYPES_FILE")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Invalid reaction type definitions: {0}")]
    Definitions(String),
}
