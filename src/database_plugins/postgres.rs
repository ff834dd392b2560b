//! PostgreSQL execution adapter
//!
//! Binds numbered `$n` placeholders, implementing the same interface as the
//! SQLite version with native `UUID`, `TIMESTAMPTZ`, and `BOOLEAN` columns.

use super::ExecutionAdapter;
use crate::errors::ExecuteError;
use crate::models::UserSummary;
use crate::predicates::BindValue;
use crate::statement::{PlaceholderStyle, RenderedStatement};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

/// PostgreSQL-backed statement executor
#[derive(Clone)]
pub struct PostgresExecutor {
    pool: PgPool,
}

impl PostgresExecutor {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the given URL and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        let executor = Self { pool };
        executor.migrate().await?;
        Ok(executor)
    }

    /// Create the users table if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                level BIGINT NOT NULL DEFAULT 0,
                gender TEXT,
                has_membership BOOLEAN NOT NULL DEFAULT FALSE,
                status TEXT NOT NULL DEFAULT 'active',
                created TIMESTAMPTZ NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Placeholder style this backend expects
    #[must_use]
    pub const fn placeholder_style() -> PlaceholderStyle {
        PlaceholderStyle::Numbered
    }

    /// The underlying pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ExecutionAdapter for PostgresExecutor {
    async fn execute(
        &self,
        statement: &RenderedStatement,
    ) -> Result<Vec<UserSummary>, ExecuteError> {
        let mut query = sqlx::query(statement.text());
        for value in statement.parameters() {
            query = match value {
                BindValue::Int(v) => query.bind(*v),
                BindValue::Bool(v) => query.bind(*v),
                BindValue::Text(v) => query.bind(v.clone()),
                BindValue::Timestamp(v) => query.bind(*v),
            };
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_user_summary).collect()
    }
}

fn row_to_user_summary(row: &PgRow) -> Result<UserSummary, ExecuteError> {
    let id: Uuid = row.try_get("id")?;
    let name: String = row.try_get("name")?;

    Ok(UserSummary { id, name })
}
