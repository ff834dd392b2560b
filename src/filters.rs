// ABOUTME: Caller-facing filter criteria and sort request for user retrieval
// ABOUTME: Optional fields mean "no constraint"; enums give labels to stored literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gender recorded on a user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "female" => Self::Female,
            "male" => Self::Male,
            _ => Self::Other,
        }
    }
}

/// Account lifecycle state
///
/// A closed set of labeled states instead of bare literals scattered through
/// comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// Account in good standing
    #[default]
    Active,
    /// Temporarily locked by an operator
    Suspended,
    /// Soft-deleted, retained for audit
    Deleted,
}

impl AccountStatus {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Deleted => "deleted",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "suspended" => Self::Suspended,
            "deleted" => Self::Deleted,
            _ => Self::Active,
        }
    }
}

/// Filter options for listing users.
///
/// Every field is optional; an absent field contributes no constraint (it does
/// not mean "match null"). Present fields always apply conjunctively, in the
/// canonical order the fields are declared here; the order of the rendered
/// clause never depends on how the caller assembled the struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListUsersFilter {
    /// Minimum level, inclusive (`level >= n`)
    pub min_level: Option<i64>,
    /// Maximum level, inclusive (`level <= n`)
    pub max_level: Option<i64>,
    /// Exact gender match
    pub gender: Option<Gender>,
    /// Membership flag; both `true` and `false` constrain the result
    pub has_membership: Option<bool>,
    /// Registered strictly after this instant (`created > t`)
    pub registered_after: Option<DateTime<Utc>>,
    /// Exclude accounts in this state (`status != s`)
    pub exclude_status: Option<AccountStatus>,
}

/// Sort order for a sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Ascending; renders as the bare identifier
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Requested sort field, validated against the allow-list at render time.
///
/// Sort identifiers cannot travel through parameter binding the way values do,
/// so the field name is checked against a closed set before it is ever
/// interpolated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Allow-list name of the field to sort by
    pub field: String,
    /// Sort direction, ascending by default
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort by the given allow-list field name
    #[must_use]
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort by the given allow-list field name
    #[must_use]
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}
