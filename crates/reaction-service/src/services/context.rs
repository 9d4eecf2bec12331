//! Service context - dependency container for services
//!
//! Holds the reaction repository, one object directory per object kind and
//! the reaction type registry.

use std::sync::Arc;

use reaction_core::traits::{ObjectDirectory, ReactionRepository};
use reaction_core::value_objects::ObjectKind;
use reaction_core::ReactionTypeRegistry;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; clones share the registry.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    reaction_repo: Arc<dyn ReactionRepository>,

    // Object directories
    posts: Arc<dyn ObjectDirectory>,
    users: Arc<dyn ObjectDirectory>,
    comments: Arc<dyn ObjectDirectory>,

    // Reaction types
    registry: Arc<ReactionTypeRegistry>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        posts: Arc<dyn ObjectDirectory>,
        users: Arc<dyn ObjectDirectory>,
        comments: Arc<dyn ObjectDirectory>,
        registry: Arc<ReactionTypeRegistry>,
    ) -> Self {
        Self {
            reaction_repo,
            posts,
            users,
            comments,
            registry,
        }
    }

    // === Repositories ===

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Directories ===

    /// Get the directory resolving objects of a kind
    pub fn directory(&self, kind: ObjectKind) -> &dyn ObjectDirectory {
        match kind {
            ObjectKind::Post => self.posts.as_ref(),
            ObjectKind::User => self.users.as_ref(),
            ObjectKind::Comment => self.comments.as_ref(),
        }
    }

    /// Get the user directory, which also resolves subjects
    pub fn users(&self) -> &dyn ObjectDirectory {
        self.users.as_ref()
    }

    // === Reaction types ===

    /// Get the reaction type registry
    pub fn registry(&self) -> &ReactionTypeRegistry {
        self.registry.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("directories", &"...")
            .field("registry", &self.registry.names())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    posts: Option<Arc<dyn ObjectDirectory>>,
    users: Option<Arc<dyn ObjectDirectory>>,
    comments: Option<Arc<dyn ObjectDirectory>>,
    registry: Option<Arc<ReactionTypeRegistry>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            reaction_repo: None,
            posts: None,
            users: None,
            comments: None,
            registry: None,
        }
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    /// Install a directory in the slot for its own kind
    pub fn directory(mut self, directory: Arc<dyn ObjectDirectory>) -> Self {
        let slot = match directory.kind() {
            ObjectKind::Post => &mut self.posts,
            ObjectKind::User => &mut self.users,
            ObjectKind::Comment => &mut self.comments,
        };
        *slot = Some(directory);
        self
    }

    pub fn registry(mut self, registry: ReactionTypeRegistry) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    /// Build the ServiceContext
    ///
    /// The registry defaults to empty.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the repository or a directory is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.reaction_repo.ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.posts.ok_or_else(|| ServiceError::validation("post directory is required"))?,
            self.users.ok_or_else(|| ServiceError::validation("user directory is required"))?,
            self.comments.ok_or_else(|| ServiceError::validation("comment directory is required"))?,
            self.registry.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
