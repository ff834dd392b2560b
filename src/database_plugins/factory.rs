// ABOUTME: Database factory and adapter abstraction for multi-database support
// ABOUTME: Detects the backend from the connection string and matches the placeholder dialect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::sqlite::SqliteExecutor;
use super::ExecutionAdapter;
use crate::builder::UserQueryBuilder;
use crate::errors::ExecuteError;
use crate::models::UserSummary;
use crate::statement::{PlaceholderStyle, RenderedStatement};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::{debug, info};

#[cfg(feature = "postgresql")]
use super::postgres::PostgresExecutor;

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    SQLite,
    PostgreSQL,
}

/// Database instance wrapper that delegates to the appropriate executor
#[derive(Clone)]
pub enum Database {
    SQLite(SqliteExecutor),
    #[cfg(feature = "postgresql")]
    PostgreSQL(PostgresExecutor),
}

impl Database {
    /// Connect to the backend named by the connection string and run
    /// migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database URL format is unsupported
    /// - The `postgresql` feature is not enabled when a PostgreSQL URL is
    ///   provided
    /// - The connection or migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        debug!("Detecting database type from URL: {}", database_url);
        let db_type = detect_database_type(database_url)?;
        info!("Detected database type: {:?}", db_type);

        match db_type {
            DatabaseType::SQLite => {
                let db = SqliteExecutor::connect(database_url).await?;
                info!("SQLite database initialized successfully");
                Ok(Self::SQLite(db))
            }
            #[cfg(feature = "postgresql")]
            DatabaseType::PostgreSQL => {
                let db = PostgresExecutor::connect(database_url).await?;
                info!("PostgreSQL database initialized successfully");
                Ok(Self::PostgreSQL(db))
            }
            #[cfg(not(feature = "postgresql"))]
            DatabaseType::PostgreSQL => Err(anyhow!(
                "PostgreSQL support not enabled. Enable the 'postgresql' feature flag."
            )),
        }
    }

    /// Get the database type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(_) => DatabaseType::PostgreSQL,
        }
    }

    /// Get a descriptive string for the current database backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (embedded)",
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(_) => "PostgreSQL (client-server)",
        }
    }

    /// Placeholder style the active backend expects
    #[must_use]
    pub const fn placeholder_style(&self) -> PlaceholderStyle {
        match self {
            Self::SQLite(_) => PlaceholderStyle::Positional,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(_) => PlaceholderStyle::Numbered,
        }
    }

    /// A query builder whose placeholder dialect matches this backend
    #[must_use]
    pub fn query_builder(&self) -> UserQueryBuilder {
        UserQueryBuilder::new(self.placeholder_style())
    }
}

/// Detect the backend from a connection string
///
/// # Errors
///
/// Returns an error if the URL prefix is not recognized, or names PostgreSQL
/// while the `postgresql` feature is disabled.
pub fn detect_database_type(database_url: &str) -> Result<DatabaseType> {
    if database_url.starts_with("sqlite:") {
        Ok(DatabaseType::SQLite)
    } else if database_url.starts_with("postgresql://") || database_url.starts_with("postgres://") {
        #[cfg(feature = "postgresql")]
        return Ok(DatabaseType::PostgreSQL);

        #[cfg(not(feature = "postgresql"))]
        return Err(anyhow!(
            "PostgreSQL connection string detected, but PostgreSQL support is not enabled. \
             Enable the 'postgresql' feature flag in Cargo.toml"
        ));
    } else {
        Err(anyhow!("Unsupported database URL: {database_url}"))
    }
}

#[async_trait]
impl ExecutionAdapter for Database {
    async fn execute(
        &self,
        statement: &RenderedStatement,
    ) -> Result<Vec<UserSummary>, ExecuteError> {
        match self {
            Self::SQLite(db) => db.execute(statement).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.execute(statement).await,
        }
    }
}
