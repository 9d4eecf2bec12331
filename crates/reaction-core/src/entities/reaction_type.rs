//! Reaction type - named configuration governing what can be reacted to and how
//! reaction weight is validated
//!
//! A type is built once from a loosely-typed `ReactionTypeConfig` (as found in
//! definition files or passed by setup code). Unknown object kinds and weight
//! schemes are coerced to their defaults rather than rejected; only an empty
//! name or oversized labels fail construction.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::value_objects::{ObjectKind, TypeName, WeightOptions, WeightScheme};

// ============================================================================
// Raw configuration
// ============================================================================

/// Configuration supplied at registration; every field is optional
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ReactionTypeConfig {
    pub object_options: ObjectOptionsConfig,
    pub weight_options: WeightOptionsConfig,
    #[validate(nested)]
    pub labels: LabelsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObjectOptionsConfig {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subtype: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeightOptionsConfig {
    #[serde(rename = "type")]
    pub scheme: Option<String>,
    pub default: Option<i32>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LabelsConfig {
    #[validate(length(min = 1, max = 64, message = "Label must be 1-64 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "Label must be 1-64 characters"))]
    pub singular_name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "Label must be 1-64 characters"))]
    pub present: Option<String>,
    #[validate(length(min = 1, max = 64, message = "Label must be 1-64 characters"))]
    pub past: Option<String>,
    #[validate(length(min = 1, max = 64, message = "Label must be 1-64 characters"))]
    pub continuous: Option<String>,
}

// ============================================================================
// Normalized type
// ============================================================================

/// Which host entities a type targets
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ObjectOptions {
    pub kind: ObjectKind,
    /// Allowed post/comment types; empty means any
    pub subtype: BTreeSet<String>,
}

/// Human-readable labels of a reaction type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionLabels {
    pub name: String,
    pub singular_name: String,
    pub present: String,
    pub past: String,
    pub continuous: String,
}

impl Default for ReactionLabels {
    fn default() -> Self {
        Self {
            name: "Reactions".to_string(),
            singular_name: "Reaction".to_string(),
            present: "react".to_string(),
            past: "reacted".to_string(),
            continuous: "reacting".to_string(),
        }
    }
}

impl ReactionLabels {
    fn merged(config: LabelsConfig) -> Self {
        let defaults = Self::default();
        Self {
            name: config.name.unwrap_or(defaults.name),
            singular_name: config.singular_name.unwrap_or(defaults.singular_name),
            present: config.present.unwrap_or(defaults.present),
            past: config.past.unwrap_or(defaults.past),
            continuous: config.continuous.unwrap_or(defaults.continuous),
        }
    }
}

/// Label selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Name,
    SingularName,
    Present,
    Past,
    Continuous,
}

/// Reaction type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionType {
    name: TypeName,
    object_options: ObjectOptions,
    weight_options: WeightOptions,
    labels: ReactionLabels,
}

impl ReactionType {
    /// Build a reaction type from its name and raw configuration
    ///
    /// # Errors
    /// `InvalidName` if the name sanitizes to nothing, `ValidationError` if a label is
    /// empty or too long.
    pub fn new(name: &str, config: ReactionTypeConfig) -> Result<Self, DomainError> {
        let name = TypeName::sanitize(name).ok_or_else(|| DomainError::InvalidName(name.to_string()))?;

        config
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let ReactionTypeConfig {
            object_options,
            weight_options,
            labels,
        } = config;

        let object_options = ObjectOptions {
            kind: ObjectKind::coerce(object_options.kind.as_deref()),
            subtype: object_options
                .subtype
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };

        let weight_options = WeightOptions::new(
            WeightScheme::coerce(weight_options.scheme.as_deref()),
            weight_options.default,
            weight_options.min,
            weight_options.max,
        );

        Ok(Self {
            name,
            object_options,
            weight_options,
            labels: ReactionLabels::merged(labels),
        })
    }

    #[inline]
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    #[inline]
    pub fn object_kind(&self) -> ObjectKind {
        self.object_options.kind
    }

    #[inline]
    pub fn object_options(&self) -> &ObjectOptions {
        &self.object_options
    }

    #[inline]
    pub fn weight_options(&self) -> &WeightOptions {
        &self.weight_options
    }

    #[inline]
    pub fn labels(&self) -> &ReactionLabels {
        &self.labels
    }

    pub fn label(&self, kind: LabelKind) -> &str {
        match kind {
            LabelKind::Name => &self.labels.name,
            LabelKind::SingularName => &self.labels.singular_name,
            LabelKind::Present => &self.labels.present,
            LabelKind::Past => &self.labels.past,
            LabelKind::Continuous => &self.labels.continuous,
        }
    }

    /// Validate a requested weight against this type's scheme
    #[inline]
    pub fn validate_weight(&self, weight: Option<i32>) -> i32 {
        self.weight_options.validate(weight)
    }

    /// Whether an object with the given subtype may be reacted to
    pub fn accepts_subtype(&self, subtype: Option<&str>) -> bool {
        if self.object_options.subtype.is_empty() {
            return true;
        }
        subtype.is_some_and(|s| self.object_options.subtype.contains(s))
    }

    /// Whether the subtype restriction applies at all
    #[inline]
    pub fn restricts_subtype(&self) -> bool {
        !self.object_options.subtype.is_empty()
    }
}
