//! Repository implementations
//!
//! PostgreSQL implementations of the traits defined in reaction-core.

mod directory;
mod error;
mod reaction;

pub use directory::{directory_for, PgCommentDirectory, PgPostDirectory, PgUserDirectory};
pub use reaction::PgReactionRepository;
