//! # reaction-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the traits defined in
//! `reaction-core`. It handles:
//!
//! - Connection pool management
//! - The `reactions` table schema
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - The reaction repository and the post/user/comment directories
//!
//! Posts, users and comments belong to the host platform; this crate only
//! reads them. Expected host columns:
//!
//! - `posts(id, post_type, title, author_id)`
//! - `users(id, login, display_name)`
//! - `comments(id, post_id, author_id, comment_type, content)`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reaction_common::AppConfig;
//! use reaction_db::{create_pool, migrations, PoolConfig, PgReactionRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     migrations::run(&pool).await?;
//!     let reaction_repo = PgReactionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{
    directory_for, PgCommentDirectory, PgPostDirectory, PgReactionRepository, PgUserDirectory,
};
