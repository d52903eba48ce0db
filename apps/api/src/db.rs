use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::Config;

/// Availability of the optional PostgreSQL backend, decided once at startup.
#[derive(Debug, Clone)]
pub enum DatabaseState {
    /// `DATABASE_URL` is not configured.
    Disabled,
    /// Connecting at startup failed; holds the error message.
    Failed(String),
    Ready(PgPool),
}

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Connects if a URL is configured. A failed connection is recorded, not fatal.
pub async fn connect_database(config: &Config) -> DatabaseState {
    let Some(url) = config.database_url.as_deref() else {
        info!("DATABASE_URL not set; database probe disabled");
        return DatabaseState::Disabled;
    };

    match create_pool(url).await {
        Ok(pool) => {
            match database_name(&pool).await {
                Ok(name) => info!("Connected to database '{name}'"),
                Err(e) => warn!("Could not read current database name: {e}"),
            }
            DatabaseState::Ready(pool)
        }
        Err(e) => {
            warn!("Database unavailable: {e:#}");
            DatabaseState::Failed(e.to_string())
        }
    }
}

pub async fn database_name(pool: &PgPool) -> Result<String, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT current_database()::text")
        .fetch_one(pool)
        .await
}

/// Names of tables in the `public` schema, alphabetical, at most `limit`.
pub async fn list_tables(pool: &PgPool, limit: i64) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT table_name::text
        FROM information_schema.tables
        WHERE table_schema = 'public'
        ORDER BY table_name
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
