//! Reaction entity cache
//!
//! Identity cache of loaded reaction rows keyed by row id. Each
//! [`ReactionService`](super::ReactionService) owns one, so entries never
//! outlive the request that loaded them.

use dashmap::DashMap;
use reaction_core::entities::Reaction;
use reaction_core::traits::{ReactionRepository, RepoResult};
use reaction_core::value_objects::ReactionId;
use reaction_core::DomainError;

/// Concurrent reaction cache
#[derive(Debug, Default)]
pub struct ReactionCache {
    entries: DashMap<ReactionId, Reaction>,
}

impl ReactionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached entity, if present
    pub fn get(&self, id: ReactionId) -> Option<Reaction> {
        self.entries.get(&id).map(|entry| entry.value().clone())
    }

    /// Cached entity, or load it through the repository
    ///
    /// # Errors
    /// `ReactionNotFound` if the row does not exist, or the repository error.
    pub async fn get_or_load(
        &self,
        id: ReactionId,
        repo: &dyn ReactionRepository,
    ) -> RepoResult<Reaction> {
        if let Some(reaction) = self.get(id) {
            return Ok(reaction);
        }

        let reaction = repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ReactionNotFound)?;

        self.entries.insert(reaction.id, reaction.clone());
        Ok(reaction)
    }

    /// Drop an entity after its row was deleted
    pub fn evict(&self, id: ReactionId) {
        if self.entries.remove(&id).is_some() {
            tracing::trace!(reaction_id = %id, "Reaction evicted from cache");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
