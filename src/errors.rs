// ABOUTME: Error taxonomy for query construction and execution
// ABOUTME: Separates recoverable caller errors from opaque backend failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use thiserror::Error;

/// Errors surfaced while building a statement.
///
/// These are caller-input errors: the statement is never rendered when one is
/// returned. Internal invariant breaches (predicate/parameter count drift) are
/// not represented here; they panic, because they indicate a defect rather
/// than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The requested sort field is not in the allow-list.
    #[error("sort field not allowed: {0}")]
    InvalidSortField(String),
}

/// Result type alias for statement construction
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors surfaced while executing a rendered statement.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// Opaque backend failure, passed through unchanged. The core performs no
    /// retry and no interpretation.
    #[error("backend error: {0}")]
    Backend(#[from] sqlx::Error),

    /// A stored row carried an id that is not a valid UUID.
    #[error("stored row contained a malformed id: {0}")]
    InvalidRow(#[from] uuid::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sort_field_names_the_offender() {
        let err = QueryError::InvalidSortField("age".into());
        assert_eq!(err.to_string(), "sort field not allowed: age");
    }
}
