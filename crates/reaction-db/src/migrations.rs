//! Schema for the `reactions` table
//!
//! Statements are idempotent, so running them on every startup is safe.

use sqlx::PgPool;
use tracing::info;

/// Name of the uniqueness constraint on (object, subject, type)
pub const UNIQUE_CONSTRAINT: &str = "reactions_object_subject_type_key";

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS reactions (
    id               BIGSERIAL PRIMARY KEY,
    object_id        BIGINT NOT NULL,
    subject_id       BIGINT NOT NULL,
    reaction_weight  INTEGER NOT NULL,
    reaction_type    VARCHAR(32) NOT NULL,
    created_at       TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at       TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT reactions_object_subject_type_key UNIQUE (object_id, subject_id, reaction_type)
);

CREATE INDEX IF NOT EXISTS idx_reactions_object_type
    ON reactions (object_id, reaction_type);

CREATE INDEX IF NOT EXISTS idx_reactions_subject_type
    ON reactions (subject_id, reaction_type);
";

/// Create the reactions table and its indexes if missing
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;

    info!("Reaction schema migrations complete");
    Ok(())
}
