//! Repository traits (ports)

mod repositories;

pub use repositories::{ObjectDirectory, ReactionRepository, RepoResult};
