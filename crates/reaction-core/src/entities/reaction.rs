//! Reaction entity - one stored (object, subject, type) relationship

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{EntityId, ReactionId, TypeName};

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reaction {
    pub id: ReactionId,
    pub object_id: EntityId,
    pub subject_id: EntityId,
    pub weight: i32,
    pub type_name: TypeName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Check if the reaction belongs to the given (object, subject, type) triple
    pub fn matches(&self, object_id: EntityId, subject_id: EntityId, type_name: &TypeName) -> bool {
        self.object_id == object_id && self.subject_id == subject_id && &self.type_name == type_name
    }

    /// Copy with a new weight, as stored after an update at `now`
    pub fn with_weight(&self, weight: i32, now: DateTime<Utc>) -> Self {
        Self {
            weight,
            updated_at: now,
            ..self.clone()
        }
    }
}

/// Reaction that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub object_id: EntityId,
    pub subject_id: EntityId,
    pub weight: i32,
    pub type_name: TypeName,
}

impl NewReaction {
    pub fn new(object_id: EntityId, subject_id: EntityId, weight: i32, type_name: TypeName) -> Self {
        Self {
            object_id,
            subject_id,
            weight,
            type_name,
        }
    }
}
