//! Reaction model -> entity mapper

use reaction_core::entities::Reaction;
use reaction_core::error::DomainError;
use reaction_core::value_objects::{EntityId, ReactionId, TypeName};

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
///
/// Fails only if the stored type name is not a valid slug.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let type_name = TypeName::sanitize(&model.reaction_type).ok_or_else(|| {
            DomainError::InternalError(format!(
                "reaction {} has invalid type name {:?}",
                model.id, model.reaction_type
            ))
        })?;

        Ok(Reaction {
            id: ReactionId::new(model.id),
            object_id: EntityId::new(model.object_id),
            subject_id: EntityId::new(model.subject_id),
            weight: model.reaction_weight,
            type_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
