//! SQLite execution adapter
//!
//! Binds positional `?` placeholders. Timestamps are stored and bound as
//! RFC 3339 text, booleans as integers, ids as UUID text.

use super::ExecutionAdapter;
use crate::errors::ExecuteError;
use crate::models::UserSummary;
use crate::predicates::BindValue;
use crate::statement::{PlaceholderStyle, RenderedStatement};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// SQLite-backed statement executor
#[derive(Clone)]
pub struct SqliteExecutor {
    pool: SqlitePool,
}

impl SqliteExecutor {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the given URL and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url).await?;
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
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                level INTEGER NOT NULL DEFAULT 0,
                gender TEXT,
                has_membership INTEGER NOT NULL DEFAULT 0,
                status TEXT NOT NULL DEFAULT 'active',
                created TEXT NOT NULL
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
        PlaceholderStyle::Positional
    }

    /// The underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ExecutionAdapter for SqliteExecutor {
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
                BindValue::Timestamp(v) => query.bind(v.to_rfc3339()),
            };
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_user_summary).collect()
    }
}

fn row_to_user_summary(row: &SqliteRow) -> Result<UserSummary, ExecuteError> {
    let id: String = row.try_get("id")?;
    let name: String = row.try_get("name")?;

    Ok(UserSummary {
        id: Uuid::parse_str(&id)?,
        name,
    })
}
