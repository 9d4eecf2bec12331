//! Reaction type definition files
//!
//! Definitions are keyed by type name under a `types` table:
//!
//! ```toml
//! [types.like]
//! object_options = { type = "post", subtype = ["post", "page"] }
//! weight_options = { type = "vote" }
//! labels = { name = "Likes", singular_name = "Like", present = "like" }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ::config::{Config, File, FileFormat};
use reaction_core::ReactionTypeConfig;
use serde::Deserialize;

use super::app_config::ConfigError;

/// Parsed reaction type definitions, in name order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReactionTypeDefinitions {
    #[serde(default)]
    pub types: BTreeMap<String, ReactionTypeConfig>,
}

impl ReactionTypeDefinitions {
    /// Load definitions from a file; the format follows the file extension
    ///
    /// # Errors
    /// Returns `ConfigError::Definitions` if the file is missing or malformed
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let definitions = Self::build(Config::builder().add_source(File::from(path)))?;

        tracing::info!(
            path = %path.display(),
            count = definitions.types.len(),
            "Reaction type definitions loaded"
        );

        Ok(definitions)
    }

    /// Parse definitions from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Definitions` if the text is malformed
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    fn build(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::Definitions(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl IntoIterator for ReactionTypeDefinitions {
    type Item = (String, ReactionTypeConfig);
    type IntoIter = std::collections::btree_map::IntoIter<String, ReactionTypeConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.into_iter()
    }
}
