//! Model to entity mappers
//!
//! - `TryFrom<ReactionModel> for Reaction`: stored rows to domain objects
//! - `From<*Model>` for the host content entities

mod content;
mod reaction;
