//! # reaction-core
//!
//! Domain layer containing reaction types, entities, value objects, repository traits,
//! and the reaction type registry.
//! This crate has zero dependencies on infrastructure (database, runtime, etc.).

pub mod entities;
pub mod error;
pub mod registry;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, ContentObject, LabelKind, LabelsConfig, NewReaction, ObjectOptions,
    ObjectOptionsConfig, Post, Reaction, ReactionLabels, ReactionType, ReactionTypeConfig, User,
    WeightOptionsConfig,
};
pub use error::DomainError;
pub use registry::ReactionTypeRegistry;
pub use traits::{ObjectDirectory, ReactionRepository, RepoResult};
pub use value_objects::{
    EntityId, IdParseError, ObjectKind, ReactionId, TypeName, WeightOptions, WeightScheme,
};
