//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reaction_core::entities::{NewReaction, Reaction};
use reaction_core::traits::{ReactionRepository, RepoResult};
use reaction_core::value_objects::{EntityId, ReactionId, TypeName};
use reaction_core::DomainError;

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_entities(models: Vec<ReactionModel>) -> RepoResult<Vec<Reaction>> {
    models.into_iter().map(Reaction::try_from).collect()
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ReactionId) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, object_id, subject_id, reaction_weight, reaction_type, created_at, updated_at
            FROM reactions
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_id(
        &self,
        object_id: EntityId,
        subject_id: EntityId,
        type_name: &TypeName,
    ) -> RepoResult<Option<ReactionId>> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id
            FROM reactions
            WHERE object_id = $1 AND subject_id = $2 AND reaction_type = $3
            ",
        )
        .bind(object_id.into_inner())
        .bind(subject_id.into_inner())
        .bind(type_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReactionId::new))
    }

    #[instrument(skip(self))]
    async fn upsert(&self, reaction: &NewReaction) -> RepoResult<Reaction> {
        // A concurrent first-time reaction on the same triple turns into an update
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            INSERT INTO reactions (object_id, subject_id, reaction_weight, reaction_type)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (object_id, subject_id, reaction_type)
            DO UPDATE SET reaction_weight = EXCLUDED.reaction_weight, updated_at = NOW()
            RETURNING id, object_id, subject_id, reaction_weight, reaction_type, created_at, updated_at
            ",
        )
        .bind(reaction.object_id.into_inner())
        .bind(reaction.subject_id.into_inner())
        .bind(reaction.weight)
        .bind(reaction.type_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .ok_or_else(|| DomainError::storage_failure("insert"))
            .and_then(Reaction::try_from)
    }

    #[instrument(skip(self))]
    async fn update_weight(&self, id: ReactionId, weight: i32) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            UPDATE reactions
            SET reaction_weight = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, object_id, subject_id, reaction_weight, reaction_type, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .bind(weight)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        object_id: EntityId,
        subject_id: EntityId,
        type_name: &TypeName,
    ) -> RepoResult<Option<ReactionId>> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            DELETE FROM reactions
            WHERE object_id = $1 AND subject_id = $2 AND reaction_type = $3
            RETURNING id
            ",
        )
        .bind(object_id.into_inner())
        .bind(subject_id.into_inner())
        .bind(type_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReactionId::new))
    }

    #[instrument(skip(self))]
    async fn find_by_object(
        &self,
        object_id: EntityId,
        type_name: &TypeName,
    ) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, object_id, subject_id, reaction_weight, reaction_type, created_at, updated_at
            FROM reactions
            WHERE object_id = $1 AND reaction_type = $2
            ORDER BY id
            ",
        )
        .bind(object_id.into_inner())
        .bind(type_name.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entities(results)
    }

    #[instrument(skip(self))]
    async fn find_by_subject(
        &self,
        subject_id: EntityId,
        type_name: &TypeName,
    ) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, object_id, subject_id, reaction_weight, reaction_type, created_at, updated_at
            FROM reactions
            WHERE subject_id = $1 AND reaction_type = $2
            ORDER BY id
            ",
        )
        .bind(subject_id.into_inner())
        .bind(type_name.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entities(results)
    }
}
