//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{ContentObject, NewReaction, Reaction};
use crate::error::DomainError;
use crate::value_objects::{EntityId, ObjectKind, ReactionId, TypeName};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

/// Storage of reaction rows
///
/// Implementations must enforce uniqueness of `(object_id, subject_id, type_name)`.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find reaction by row id
    async fn find_by_id(&self, id: ReactionId) -> RepoResult<Option<Reaction>>;

    /// Find the row id for an (object, subject, type) triple
    async fn find_id(
        &self,
        object_id: EntityId,
        subject_id: EntityId,
        type_name: &TypeName,
    ) -> RepoResult<Option<ReactionId>>;

    /// Insert a reaction; a row that already exists for the triple has its weight
    /// replaced instead
    async fn upsert(&self, reaction: &NewReaction) -> RepoResult<Reaction>;

    /// Replace the weight of an existing row, `None` if the row is gone
    async fn update_weight(&self, id: ReactionId, weight: i32) -> RepoResult<Option<Reaction>>;

    /// Delete the row for a triple, returning its id if one was deleted
    async fn delete(
        &self,
        object_id: EntityId,
        subject_id: EntityId,
        type_name: &TypeName,
    ) -> RepoResult<Option<ReactionId>>;

    /// List reactions of a type on an object, ordered by row id
    async fn find_by_object(
        &self,
        object_id: EntityId,
        type_name: &TypeName,
    ) -> RepoResult<Vec<Reaction>>;

    /// List reactions of a type issued by a subject, ordered by row id
    async fn find_by_subject(
        &self,
        subject_id: EntityId,
        type_name: &TypeName,
    ) -> RepoResult<Vec<Reaction>>;
}

// ============================================================================
// Object Directory
// ============================================================================

/// Read access to one kind of host entity
#[async_trait]
pub trait ObjectDirectory: Send + Sync {
    /// Kind of entity this directory resolves
    fn kind(&self) -> ObjectKind;

    /// Check whether an entity with this id exists
    async fn exists(&self, id: EntityId) -> RepoResult<bool>;

    /// Load the full entity
    async fn fetch(&self, id: EntityId) -> RepoResult<Option<ContentObject>>;
}
