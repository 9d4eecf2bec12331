//! Reaction type name - slug-formatted registry key

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Slug used as the unique key of a reaction type
///
/// Only lowercase ASCII letters, digits, `_` and `-` survive sanitization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    /// Maximum length of a stored type name (matches the `reaction_type` column)
    pub const MAX_LEN: usize = 32;

    /// Normalize `raw` into a slug, returning `None` when nothing survives
    pub fn sanitize(raw: &str) -> Option<Self> {
        let slug: String = raw
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
            .take(Self::MAX_LEN)
            .collect();

        if slug.is_empty() {
            None
        } else {
            Some(Self(slug))
        }
    }

    /// Get the slug as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TypeName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::sanitize(&value).ok_or_else(|| format!("invalid reaction type name: {value:?}"))
    }
}

impl From<TypeName> for String {
    fn from(name: TypeName) -> Self {
        name.0
    }
}
