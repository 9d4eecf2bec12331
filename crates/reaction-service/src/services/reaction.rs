//! Reaction service
//!
//! Operations over the reactions of one registered reaction type: react,
//! look up, delete and list, with object and subject validation.

use std::sync::Arc;

use reaction_core::entities::{ContentObject, NewReaction, Reaction, ReactionType};
use reaction_core::traits::ObjectDirectory;
use reaction_core::value_objects::EntityId;
use reaction_core::DomainError;
use tracing::{debug, info, instrument};

use super::cache::ReactionCache;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service bound to one reaction type
///
/// Meant to live for one request; rows loaded by [`Self::get_reaction`] are
/// cached for the lifetime of the service only.
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
    reaction_type: Arc<ReactionType>,
    cache: ReactionCache,
}

impl<'a> ReactionService<'a> {
    /// Create a ReactionService for an already resolved type
    pub fn new(ctx: &'a ServiceContext, reaction_type: Arc<ReactionType>) -> Self {
        Self {
            ctx,
            reaction_type,
            cache: ReactionCache::new(),
        }
    }

    /// Create a ReactionService for a registered type name
    ///
    /// # Errors
    /// `UnknownReactionType` if nothing is registered under `name`.
    pub fn for_type(ctx: &'a ServiceContext, name: &str) -> ServiceResult<Self> {
        let reaction_type = ctx.registry().get(name)?;
        Ok(Self::new(ctx, reaction_type))
    }

    /// The reaction type this service operates on
    pub fn reaction_type(&self) -> &ReactionType {
        &self.reaction_type
    }

    /// Reactions loaded by this service so far
    pub fn cache(&self) -> &ReactionCache {
        &self.cache
    }

    /// Add or update the subject's reaction on an object
    ///
    /// The weight is normalized by the type's weight scheme first.
    #[instrument(skip(self), fields(reaction_type = %self.reaction_type.name()))]
    pub async fn react(
        &self,
        object_id: EntityId,
        subject_id: EntityId,
        weight: Option<i32>,
    ) -> ServiceResult<Reaction> {
        self.validate_object(object_id).await?;
        self.validate_subject(subject_id).await?;

        let weight = self.reaction_type.validate_weight(weight);
        let type_name = self.reaction_type.name();
        let repo = self.ctx.reaction_repo();

        let reaction = match repo.find_id(object_id, subject_id, type_name).await? {
            Some(id) => {
                let reaction = repo
                    .update_weight(id, weight)
                    .await?
                    .ok_or_else(|| DomainError::storage_failure("update"))?;

                info!(
                    reaction_id = %reaction.id,
                    object_id = %object_id,
                    subject_id = %subject_id,
                    weight,
                    "Reaction updated"
                );
                reaction
            }
            None => {
                let reaction = repo
                    .upsert(&NewReaction::new(object_id, subject_id, weight, type_name.clone()))
                    .await?;

                info!(
                    reaction_id = %reaction.id,
                    object_id = %object_id,
                    subject_id = %subject_id,
                    weight,
                    "Reaction added"
                );
                reaction
            }
        };

        // Later lookups reload the written row
        self.cache.evict(reaction.id);
        Ok(reaction)
    }

    /// Get the subject's reaction on an object
    #[instrument(skip(self), fields(reaction_type = %self.reaction_type.name()))]
    pub async fn get_reaction(
        &self,
        object_id: EntityId,
        subject_id: EntityId,
    ) -> ServiceResult<Reaction> {
        self.validate_object(object_id).await?;
        self.validate_subject(subject_id).await?;

        let repo = self.ctx.reaction_repo();
        let id = repo
            .find_id(object_id, subject_id, self.reaction_type.name())
            .await?
            .ok_or(DomainError::ReactionNotFound)?;

        Ok(self.cache.get_or_load(id, repo).await?)
    }

    /// Remove the subject's reaction on an object
    ///
    /// Returns whether a reaction was removed.
    #[instrument(skip(self), fields(reaction_type = %self.reaction_type.name()))]
    pub async fn delete_reaction(
        &self,
        object_id: EntityId,
        subject_id: EntityId,
    ) -> ServiceResult<bool> {
        self.validate_object(object_id).await?;
        self.validate_subject(subject_id).await?;

        let deleted = self
            .ctx
            .reaction_repo()
            .delete(object_id, subject_id, self.reaction_type.name())
            .await?;

        let Some(id) = deleted else {
            debug!(object_id = %object_id, subject_id = %subject_id, "No reaction to remove");
            return Ok(false);
        };

        self.cache.evict(id);

        info!(
            reaction_id = %id,
            object_id = %object_id,
            subject_id = %subject_id,
            "Reaction removed"
        );

        Ok(true)
    }

    /// All reactions of this type on an object, ordered by row id
    #[instrument(skip(self), fields(reaction_type = %self.reaction_type.name()))]
    pub async fn get_object_reactions(&self, object_id: EntityId) -> ServiceResult<Vec<Reaction>> {
        self.validate_object(object_id).await?;

        Ok(self
            .ctx
            .reaction_repo()
            .find_by_object(object_id, self.reaction_type.name())
            .await?)
    }

    /// All reactions of this type issued by a subject, ordered by row id
    #[instrument(skip(self), fields(reaction_type = %self.reaction_type.name()))]
    pub async fn get_subject_reactions(
        &self,
        subject_id: EntityId,
    ) -> ServiceResult<Vec<Reaction>> {
        self.validate_subject(subject_id).await?;

        Ok(self
            .ctx
            .reaction_repo()
            .find_by_subject(subject_id, self.reaction_type.name())
            .await?)
    }

    /// Load the object a reaction of this type would target
    #[instrument(skip(self), fields(reaction_type = %self.reaction_type.name()))]
    pub async fn get_object(&self, object_id: EntityId) -> ServiceResult<ContentObject> {
        if !object_id.is_valid() {
            return Err(DomainError::InvalidObject(object_id).into());
        }

        self.objects()
            .fetch(object_id)
            .await?
            .filter(|object| self.reaction_type.accepts_subtype(object.subtype()))
            .ok_or_else(|| DomainError::InvalidObject(object_id).into())
    }

    /// Normalize a requested weight for this type
    pub fn validate_weight(&self, weight: Option<i32>) -> i32 {
        self.reaction_type.validate_weight(weight)
    }

    // === Validation ===

    fn objects(&self) -> &dyn ObjectDirectory {
        self.ctx.directory(self.reaction_type.object_kind())
    }

    async fn validate_object(&self, object_id: EntityId) -> ServiceResult<()> {
        if !object_id.is_valid() {
            return Err(DomainError::InvalidObject(object_id).into());
        }

        let valid = if self.reaction_type.restricts_subtype() {
            // Subtype check needs the full object
            self.objects()
                .fetch(object_id)
                .await?
                .is_some_and(|object| self.reaction_type.accepts_subtype(object.subtype()))
        } else {
            self.objects().exists(object_id).await?
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidObject(object_id).into())
        }
    }

    async fn validate_subject(&self, subject_id: EntityId) -> ServiceResult<()> {
        if subject_id.is_valid() && self.ctx.users().exists(subject_id).await? {
            Ok(())
        } else {
            Err(DomainError::InvalidSubject(subject_id).into())
        }
    }
}
