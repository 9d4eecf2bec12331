//! Startup wiring
//!
//! Connects to PostgreSQL, installs the reactions schema, registers the
//! configured reaction types and assembles the [`ServiceContext`].

use std::sync::Arc;

use reaction_common::{AppConfig, AppError, AppResult, ReactionTypeDefinitions};
use reaction_core::value_objects::ObjectKind;
use reaction_core::{DomainError, ReactionTypeRegistry};
use reaction_db::{create_pool, directory_for, migrations, PgReactionRepository, PoolConfig};
use tracing::info;

use super::context::{ServiceContext, ServiceContextBuilder};

/// Register every definition, stopping at the first invalid or duplicate one
///
/// # Errors
/// The registration error, e.g. `InvalidName` or `ReactionTypeExists`.
pub fn registry_from_definitions(
    definitions: ReactionTypeDefinitions,
) -> Result<ReactionTypeRegistry, DomainError> {
    let mut registry = ReactionTypeRegistry::new();
    for (name, config) in definitions {
        registry.register(&name, config)?;
    }
    Ok(registry)
}

/// Initialize all dependencies and create the ServiceContext
pub async fn bootstrap(config: &AppConfig) -> AppResult<ServiceContext> {
    // Load reaction types before touching the database
    let definitions = match config.reactions.types_file.as_deref() {
        Some(path) => ReactionTypeDefinitions::from_file(path)?,
        None => ReactionTypeDefinitions::default(),
    };
    let registry = registry_from_definitions(definitions)?;
    info!(types = ?registry.names(), "Reaction types registered");

    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    migrations::run(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Build service context
    let builder = ObjectKind::ALL.into_iter().fold(
        ServiceContextBuilder::new()
            .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
            .registry(registry),
        |builder, kind| builder.directory(directory_for(kind, pool.clone())),
    );

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reaction_core::value_objects::WeightScheme;

    #[test]
    fn test_registry_from_definitions() {
        let definitions = ReactionTypeDefinitions::from_toml_str(
            r#"
            [types.like]
            weight_options = { type = "vote" }

            [types.rating]
            object_options = { type = "comment" }
            weight_options = { type = "rating", default = 3 }
            "#,
        )
        .unwrap();

        let registry = registry_from_definitions(definitions).unwrap();
        assert_eq!(registry.len(), 2);

        let like = registry.get("like").unwrap();
        assert_eq!(like.weight_options().scheme(), WeightScheme::Vote);
        assert_eq!(like.object_kind(), ObjectKind::Post);

        let rating = registry.get("rating").unwrap();
        assert_eq!(rating.object_kind(), ObjectKind::Comment);
        assert_eq!(rating.validate_weight(Some(9)), 3);
    }

    #[test]
    fn test_duplicate_slugs_are_rejected() {
        // Both keys sanitize to "like"
        let definitions = ReactionTypeDefinitions::from_toml_str(
            r#"
            [types.like]
            weight_options = { type = "vote" }

            [types."like!"]
            weight_options = { type = "rating" }
            "#,
        )
        .unwrap();

        let err = registry_from_definitions(definitions).unwrap_err();
        assert!(matches!(err, DomainError::ReactionTypeExists(_)));
    }

    #[test]
    fn test_empty_definitions() {
        let registry = registry_from_definitions(ReactionTypeDefinitions::default()).unwrap();
        assert!(registry.is_empty());
    }
}
