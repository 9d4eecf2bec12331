//! Database models - SQLx-compatible structs for PostgreSQL tables

mod content;
mod reaction;

pub use content::{CommentModel, PostModel, UserModel};
pub use reaction::ReactionModel;
