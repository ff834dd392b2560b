// ABOUTME: Execution boundary between the pure builder core and real data stores
// ABOUTME: Plugin architecture with SQLite and PostgreSQL backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::ExecuteError;
use crate::models::UserSummary;
use crate::statement::RenderedStatement;
use async_trait::async_trait;

pub mod factory;
pub mod sqlite;

#[cfg(feature = "postgresql")]
pub mod postgres;

/// Executes a rendered statement against a real data store.
///
/// Implementations bind the statement's parameters in order and return the
/// resulting rows. Backend failures are propagated unchanged as
/// [`ExecuteError::Backend`], with no retry and no interpretation. The core
/// never blocks; this is the only awaiting surface, and callers may wrap it
/// with their own timeout or cancellation policy.
#[async_trait]
pub trait ExecutionAdapter: Send + Sync {
    /// Run the statement and collect the matching rows in order.
    async fn execute(&self, statement: &RenderedStatement)
        -> Result<Vec<UserSummary>, ExecuteError>;
}
