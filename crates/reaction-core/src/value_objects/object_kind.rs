//! Object kind - which host entity a reaction type targets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of host entity that can be reacted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Post,
    User,
    Comment,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 3] = [Self::Post, Self::User, Self::Comment];

    /// Parse a configured kind, falling back to `Post` when absent or unrecognized
    pub fn coerce(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("user") => Self::User,
            Some("comment") => Self::Comment,
            _ => Self::Post,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::User => "user",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
