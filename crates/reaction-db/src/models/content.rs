//! Host platform content models (read-only)

use sqlx::FromRow;

/// Row of the host `posts` table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub post_type: String,
    pub title: String,
    pub author_id: i64,
}

/// Row of the host `users` table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub login: String,
    pub display_name: String,
}

/// Row of the host `comments` table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub post_id: i64,
    pub author_id: Option<i64>,
    pub comment_type: String,
    pub content: String,
}
