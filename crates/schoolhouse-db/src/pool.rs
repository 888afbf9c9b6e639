use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use schoolhouse_config::DatabaseConfig;

/// Connects a PostgreSQL pool using `DATABASE_URL` and `DB_MAX_CONNECTIONS`.
///
/// # Errors
///
/// Fails when no URL is configured or the connection cannot be established.
pub async fn init_db_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let url = config
        .url
        .as_deref()
        .context("DATABASE_URL must be set for the postgres store backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await
        .context("Failed to connect to database")?;

    info!(
        db.max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

/// Applies the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    info!("Database migrations applied");
    Ok(())
}
