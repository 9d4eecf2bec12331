//! Reaction services
//!
//! Validation and orchestration of reaction operations over the repository
//! and object directories held by the [`ServiceContext`].

pub mod bootstrap;
pub mod cache;
pub mod context;
pub mod error;
pub mod reaction;

pub use bootstrap::{bootstrap, registry_from_definitions};
pub use cache::ReactionCache;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;
