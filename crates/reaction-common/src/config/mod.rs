//! Configuration structs

mod app_config;
mod definitions;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, ReactionsConfig,
};
pub use definitions::ReactionTypeDefinitions;
