//! Domain entities - core business objects

mod content_object;
mod reaction;
mod reaction_type;

pub use content_object::{Comment, ContentObject, Post, User};
pub use reaction::{NewReaction, Reaction};
pub use reaction_type::{
    LabelKind, LabelsConfig, ObjectOptions, ObjectOptionsConfig, ReactionLabels, ReactionType,
    ReactionTypeConfig, WeightOptionsConfig,
};
