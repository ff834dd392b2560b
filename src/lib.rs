// ABOUTME: Main library entry point for the siftsql query builder
// ABOUTME: Composable, injection-safe construction of filtered user-retrieval statements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # SiftSQL
//!
//! A composable, parameterized query builder: it assembles a single
//! filtered/sorted user-retrieval statement from a fixed set of optional
//! criteria, guaranteeing immunity to injection.
//!
//! Two channels with different rules carry data into the statement:
//!
//! - **Values** always travel through positional parameter binding, never
//!   through string interpolation.
//! - **Identifiers** (the sort column) are the only interpolated tokens, and
//!   only after validation against a closed allow-list.
//!
//! The rendered clause order is canonical: it depends on *which* criteria are
//! present, never on how the caller assembled them. An empty filter emits no
//! `WHERE` clause at all. Building is a pure function (equal inputs produce
//! byte-identical text) and every component is stateless, so builders can be
//! shared freely across threads.
//!
//! ## Example
//!
//! ```rust
//! use siftsql::{ListUsersFilter, PlaceholderStyle, SortSpec, UserQueryBuilder};
//!
//! # fn main() -> Result<(), siftsql::QueryError> {
//! let builder = UserQueryBuilder::new(PlaceholderStyle::Positional);
//! let filter = ListUsersFilter {
//!     min_level: Some(5),
//!     has_membership: Some(true),
//!     ..Default::default()
//! };
//! let statement = builder.build(&filter, &SortSpec::by("created"))?;
//!
//! assert_eq!(
//!     statement.text(),
//!     "SELECT id, name FROM users WHERE level >= ? AND has_membership = ? ORDER BY created"
//! );
//! assert_eq!(statement.parameters().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Execution lives behind the [`ExecutionAdapter`] trait in
//! [`database_plugins`], with SQLite and (feature-gated) PostgreSQL
//! implementations whose placeholder dialects the factory matches
//! automatically.

pub mod binding;
pub mod builder;
pub mod database_plugins;
pub mod errors;
pub mod filters;
pub mod models;
pub mod predicates;
pub mod statement;

pub use binding::ParameterSet;
pub use builder::UserQueryBuilder;
pub use database_plugins::ExecutionAdapter;
pub use errors::{ExecuteError, QueryError, QueryResult};
pub use filters::{AccountStatus, Gender, ListUsersFilter, SortDirection, SortSpec};
pub use models::UserSummary;
pub use predicates::{BindValue, CompareOp, Predicate};
pub use statement::{PlaceholderStyle, RenderedStatement, SortAllowList, StatementRenderer};
