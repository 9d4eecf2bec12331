//! Host content model -> entity mappers

use reaction_core::entities::{Comment, ContentObject, Post, User};
use reaction_core::value_objects::EntityId;

use crate::models::{CommentModel, PostModel, UserModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: EntityId::new(model.id),
            post_type: model.post_type,
            title: model.title,
            author_id: EntityId::new(model.author_id),
        }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: EntityId::new(model.id),
            login: model.login,
            display_name: model.display_name,
        }
    }
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: EntityId::new(model.id),
            post_id: EntityId::new(model.post_id),
            author_id: model.author_id.map(EntityId::new),
            comment_type: model.comment_type,
            content: model.content,
        }
    }
}

impl From<PostModel> for ContentObject {
    fn from(model: PostModel) -> Self {
        ContentObject::Post(model.into())
    }
}

impl From<UserModel> for ContentObject {
    fn from(model: UserModel) -> Self {
        ContentObject::User(model.into())
    }
}

impl From<CommentModel> for ContentObject {
    fn from(model: CommentModel) -> Self {
        ContentObject::Comment(model.into())
    }
}
