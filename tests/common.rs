// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, database, and seed-data helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(dead_code, clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Shared test utilities for `siftsql`
//!
//! Common setup functions to reduce duplication across integration tests.

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use siftsql::database_plugins::sqlite::SqliteExecutor;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-memory pool pinned to a single connection so the seeded schema is
/// visible to every query in the test
pub async fn create_test_pool() -> Result<SqlitePool> {
    init_test_logging();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

/// Migrated executor over a fresh in-memory database
pub async fn create_test_executor() -> Result<(SqliteExecutor, SqlitePool)> {
    let pool = create_test_pool().await?;
    let executor = SqliteExecutor::new(pool.clone());
    executor.migrate().await?;
    Ok((executor, pool))
}

/// A user row seeded into the test database
pub struct SeededUser {
    pub id: Uuid,
    pub name: &'static str,
    pub level: i64,
    pub gender: &'static str,
    pub has_membership: bool,
    pub status: &'static str,
    pub created: DateTime<Utc>,
}

fn seed_fixture() -> Vec<SeededUser> {
    let at = |y, m, d| Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
    vec![
        SeededUser {
            id: Uuid::new_v4(),
            name: "alice",
            level: 3,
            gender: "female",
            has_membership: false,
            status: "active",
            created: at(2024, 1, 10),
        },
        SeededUser {
            id: Uuid::new_v4(),
            name: "bob",
            level: 5,
            gender: "male",
            has_membership: true,
            status: "active",
            created: at(2024, 2, 20),
        },
        SeededUser {
            id: Uuid::new_v4(),
            name: "carol",
            level: 8,
            gender: "female",
            has_membership: true,
            status: "suspended",
            created: at(2024, 3, 5),
        },
        SeededUser {
            id: Uuid::new_v4(),
            name: "dave",
            level: 10,
            gender: "male",
            has_membership: false,
            status: "deleted",
            created: at(2024, 4, 15),
        },
    ]
}

/// Insert the standard four-user fixture and return it
pub async fn seed_users(pool: &SqlitePool) -> Result<Vec<SeededUser>> {
    let users = seed_fixture();

    for user in &users {
        sqlx::query(
            r"
            INSERT INTO users (id, name, level, gender, has_membership, status, created)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(user.id.to_string())
        .bind(user.name)
        .bind(user.level)
        .bind(user.gender)
        .bind(user.has_membership)
        .bind(user.status)
        .bind(user.created.to_rfc3339())
        .execute(pool)
        .await?;
    }

    Ok(users)
}
