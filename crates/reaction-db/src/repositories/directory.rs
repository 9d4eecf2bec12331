//! PostgreSQL implementations of ObjectDirectory
//!
//! One directory per host entity kind. All of them only read host tables.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reaction_core::entities::ContentObject;
use reaction_core::traits::{ObjectDirectory, RepoResult};
use reaction_core::value_objects::{EntityId, ObjectKind};

use crate::models::{CommentModel, PostModel, UserModel};

use super::error::map_db_error;

async fn exists_in(pool: &PgPool, sql: &'static str, id: EntityId) -> RepoResult<bool> {
    sqlx::query_scalar::<_, bool>(sql)
        .bind(id.into_inner())
        .fetch_one(pool)
        .await
        .map_err(map_db_error)
}

/// Posts directory
#[derive(Clone)]
pub struct PgPostDirectory {
    pool: PgPool,
}

impl PgPostDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ObjectDirectory for PgPostDirectory {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Post
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        exists_in(&self.pool, "SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)", id).await
    }

    #[instrument(skip(self))]
    async fn fetch(&self, id: EntityId) -> RepoResult<Option<ContentObject>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, post_type, title, author_id
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ContentObject::from))
    }
}

/// Users directory; also resolves reaction subjects
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ObjectDirectory for PgUserDirectory {
    fn kind(&self) -> ObjectKind {
        ObjectKind::User
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        exists_in(&self.pool, "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)", id).await
    }

    #[instrument(skip(self))]
    async fn fetch(&self, id: EntityId) -> RepoResult<Option<ContentObject>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, login, display_name
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ContentObject::from))
    }
}

/// Comments directory
#[derive(Clone)]
pub struct PgCommentDirectory {
    pool: PgPool,
}

impl PgCommentDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ObjectDirectory for PgCommentDirectory {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Comment
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        exists_in(&self.pool, "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)", id).await
    }

    #[instrument(skip(self))]
    async fn fetch(&self, id: EntityId) -> RepoResult<Option<ContentObject>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, author_id, comment_type, content
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ContentObject::from))
    }
}

/// Build the directory for an object kind
pub fn directory_for(kind: ObjectKind, pool: PgPool) -> Arc<dyn ObjectDirectory> {
    match kind {
        ObjectKind::Post => Arc::new(PgPostDirectory::new(pool)),
        ObjectKind::User => Arc::new(PgUserDirectory::new(pool)),
        ObjectKind::Comment => Arc::new(PgCommentDirectory::new(pool)),
    }
}
