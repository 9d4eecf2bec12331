//! Content objects - host platform entities that reactions attach to

use serde::Serialize;

use crate::value_objects::{EntityId, ObjectKind};

/// Post (or any post-like content with a post type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: EntityId,
    pub post_type: String,
    pub title: String,
    pub author_id: EntityId,
}

/// User profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: EntityId,
    pub login: String,
    pub display_name: String,
}

/// Comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: EntityId,
    pub post_id: EntityId,
    pub author_id: Option<EntityId>,
    pub comment_type: String,
    pub content: String,
}

/// Any entity a reaction can target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentObject {
    Post(Post),
    User(User),
    Comment(Comment),
}

impl ContentObject {
    pub fn id(&self) -> EntityId {
        match self {
            Self::Post(p) => p.id,
            Self::User(u) => u.id,
            Self::Comment(c) => c.id,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Post(_) => ObjectKind::Post,
            Self::User(_) => ObjectKind::User,
            Self::Comment(_) => ObjectKind::Comment,
        }
    }

    /// Post type or comment type; users have none
    pub fn subtype(&self) -> Option<&str> {
        match self {
            Self::Post(p) => Some(&p.post_type),
            Self::User(_) => None,
            Self::Comment(c) => Some(&c.comment_type),
        }
    }
}
