//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::EntityId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reaction not found")]
    ReactionNotFound,

    #[error("Unknown reaction type: {0}")]
    UnknownReactionType(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid reaction type name: {0:?}")]
    InvalidName(String),

    #[error("Invalid object: {0}")]
    InvalidObject(EntityId),

    #[error("Invalid subject: {0}")]
    InvalidSubject(EntityId),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction type already registered: {0}")]
    ReactionTypeExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// A write that reached storage but did not take effect
    pub fn storage_failure(operation: &str) -> Self {
        Self::StorageFailure(format!("{operation} did not take effect"))
    }

    /// Get an error code string for callers that report failures
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ReactionNotFound => "UNKNOWN_REACTION",
            Self::UnknownReactionType(_) => "UNKNOWN_REACTION_TYPE",

            // Validation
            Self::InvalidName(_) => "INVALID_NAME",
            Self::InvalidObject(_) => "INVALID_OBJECT",
            Self::InvalidSubject(_) => "INVALID_SUBJECT",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Conflict
            Self::ReactionTypeExists(_) => "REACTION_TYPE_EXISTS",

            // Infrastructure
            Self::StorageFailure(_) => "STORAGE_FAILURE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReactionNotFound | Self::UnknownReactionType(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidName(_)
                | Self::InvalidObject(_)
                | Self::InvalidSubject(_)
                | Self::ValidationError(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionTypeExists(_))
    }

    /// Check if the storage layer failed
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageFailure(_) | Self::DatabaseError(_))
    }
}
