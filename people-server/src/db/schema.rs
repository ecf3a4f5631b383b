//! Idempotent schema setup
//!
//! Only ever creates what is missing. Nothing here alters or drops.

use sqlx::PgPool;

/// Create the `people` table if it does not exist yet.
pub async fn ensure_people_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NULL,
            created_at TIMESTAMPTZ DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("table \"people\" verified");
    Ok(())
}
