// ABOUTME: Predicate model and collection of predicates from filter criteria
// ABOUTME: Values travel through typed BindValue slots, never through statement text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::filters::ListUsersFilter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comparison operator of a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `!=`
    Ne,
}

impl CompareOp {
    /// SQL spelling of the operator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ne => "!=",
        }
    }
}

/// A typed value destined for a placeholder slot.
///
/// Backend encoding (RFC 3339 text vs native timestamp columns, integer vs
/// native boolean) is decided by the executing adapter, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindValue {
    Int(i64),
    Bool(bool),
    Text(String),
    Timestamp(DateTime<Utc>),
}

/// One filter condition: column, operator, bound value.
///
/// Immutable once created. The column is a `&'static str` drawn from the
/// closed set of filterable columns; the value only ever reaches the database
/// through parameter binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    column: &'static str,
    op: CompareOp,
    value: BindValue,
}

impl Predicate {
    pub(crate) fn new(column: &'static str, op: CompareOp, value: BindValue) -> Self {
        Self { column, op, value }
    }

    /// Column identifier this predicate constrains
    #[must_use]
    pub const fn column(&self) -> &'static str {
        self.column
    }

    /// Comparison operator
    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    /// Bound value
    #[must_use]
    pub const fn value(&self) -> &BindValue {
        &self.value
    }
}

impl ListUsersFilter {
    /// Collect the predicates for every present criterion.
    ///
    /// Output order is the canonical field order of the filter, independent of
    /// which subset of criteria is present. An all-absent filter collects to
    /// an empty vector, meaning "match everything". A present boolean flag
    /// contributes a predicate for either value.
    #[must_use]
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(level) = self.min_level {
            predicates.push(Predicate::new("level", CompareOp::Ge, BindValue::Int(level)));
        }
        if let Some(level) = self.max_level {
            predicates.push(Predicate::new("level", CompareOp::Le, BindValue::Int(level)));
        }
        if let Some(gender) = self.gender {
            predicates.push(Predicate::new(
                "gender",
                CompareOp::Eq,
                BindValue::Text(gender.as_str().to_owned()),
            ));
        }
        if let Some(flag) = self.has_membership {
            predicates.push(Predicate::new(
                "has_membership",
                CompareOp::Eq,
                BindValue::Bool(flag),
            ));
        }
        if let Some(instant) = self.registered_after {
            predicates.push(Predicate::new(
                "created",
                CompareOp::Gt,
                BindValue::Timestamp(instant),
            ));
        }
        if let Some(status) = self.exclude_status {
            predicates.push(Predicate::new(
                "status",
                CompareOp::Ne,
                BindValue::Text(status.as_str().to_owned()),
            ));
        }

        predicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{AccountStatus, Gender};

    #[test]
    fn collection_follows_canonical_order() {
        let filter = ListUsersFilter {
            exclude_status: Some(AccountStatus::Deleted),
            gender: Some(Gender::Female),
            min_level: Some(3),
            ..Default::default()
        };

        let columns: Vec<_> = filter.predicates().iter().map(Predicate::column).collect();
        assert_eq!(columns, ["level", "gender", "status"]);
    }

    #[test]
    fn absent_criteria_collect_nothing() {
        assert!(ListUsersFilter::default().predicates().is_empty());
    }
}
