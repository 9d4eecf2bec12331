//! Reaction type registry
//!
//! Built once at startup and shared read-only afterwards. Types are keyed by
//! their sanitized name, so `"Like"` and `"like"` refer to the same entry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::entities::{ReactionType, ReactionTypeConfig};
use crate::error::DomainError;
use crate::value_objects::TypeName;

/// Name → reaction type mapping
#[derive(Debug, Clone, Default)]
pub struct ReactionTypeRegistry {
    types: HashMap<TypeName, Arc<ReactionType>>,
}

impl ReactionTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct and store a reaction type
    ///
    /// # Errors
    /// Construction errors from [`ReactionType::new`], or `ReactionTypeExists` if the
    /// sanitized name is already registered.
    pub fn register(
        &mut self,
        name: &str,
        config: ReactionTypeConfig,
    ) -> Result<Arc<ReactionType>, DomainError> {
        let reaction_type = ReactionType::new(name, config)?;

        if self.types.contains_key(reaction_type.name()) {
            return Err(DomainError::ReactionTypeExists(
                reaction_type.name().to_string(),
            ));
        }

        let reaction_type = Arc::new(reaction_type);
        self.types
            .insert(reaction_type.name().clone(), Arc::clone(&reaction_type));

        tracing::debug!(
            name = %reaction_type.name(),
            object_kind = %reaction_type.object_kind(),
            weight_scheme = %reaction_type.weight_options().scheme(),
            "Reaction type registered"
        );

        Ok(reaction_type)
    }

    /// Look up a previously registered type
    ///
    /// # Errors
    /// `UnknownReactionType` if no type is registered under the (sanitized) name.
    pub fn get(&self, name: &str) -> Result<Arc<ReactionType>, DomainError> {
        TypeName::sanitize(name)
            .and_then(|key| self.types.get(key.as_str()).cloned())
            .ok_or_else(|| DomainError::UnknownReactionType(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&TypeName> {
        let mut names: Vec<_> = self.types.keys().collect();
        names.sort();
        names
    }
}
