// ABOUTME: Statement assembly from collected predicates and a validated sort
// ABOUTME: Identifiers are interpolated only after allow-list validation; values never are
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::binding::ParameterSet;
use crate::errors::{QueryError, QueryResult};
use crate::filters::{SortDirection, SortSpec};
use crate::predicates::{BindValue, Predicate};
use serde::{Deserialize, Serialize};

/// Base projection for user retrieval
pub const USER_PROJECTION: &str = "SELECT id, name FROM users";

/// Default sortable fields: allow-list name to validated column identifier
pub const DEFAULT_SORT_FIELDS: &[(&str, &str)] =
    &[("created", "created"), ("level", "level"), ("name", "name")];

/// Placeholder surface syntax of the target backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `?` for every slot (SQLite)
    Positional,
    /// `$1`, `$2`, … (PostgreSQL)
    Numbered,
}

impl PlaceholderStyle {
    /// Placeholder token for the zero-based slot `index`
    #[must_use]
    pub fn token(self, index: usize) -> String {
        match self {
            Self::Positional => "?".to_owned(),
            Self::Numbered => format!("${}", index + 1),
        }
    }
}

/// Closed mapping from permitted sort-field names to column identifiers.
///
/// Sort identifiers cannot be parameterized, so they are only ever
/// interpolated after resolving against this list. The list is fixed at
/// construction and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SortAllowList {
    entries: Vec<(String, String)>,
}

impl SortAllowList {
    /// Build from `(name, column identifier)` pairs
    #[must_use]
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(name, ident)| ((*name).to_owned(), (*ident).to_owned()))
                .collect(),
        }
    }

    /// The default user sort fields
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_SORT_FIELDS)
    }

    /// Resolve a requested field name to its validated column identifier
    #[must_use]
    pub fn resolve(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == field)
            .map(|(_, ident)| ident.as_str())
    }
}

/// The immutable output of a build: statement text plus its bound values.
///
/// The number of placeholder tokens in `text` always equals
/// `parameters().len()`, and they correspond positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStatement {
    text: String,
    parameters: ParameterSet,
}

impl RenderedStatement {
    /// The statement text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The bound values, in placeholder order
    #[must_use]
    pub fn parameters(&self) -> &[BindValue] {
        self.parameters.values()
    }
}

/// Assembles statement text from the collected predicates and a validated
/// sort. Stateless across calls: rendering is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct StatementRenderer {
    projection: String,
    placeholder: PlaceholderStyle,
    sort_fields: SortAllowList,
}

impl StatementRenderer {
    /// Create a renderer for a fixed projection, placeholder style, and sort
    /// allow-list
    #[must_use]
    pub fn new(
        projection: impl Into<String>,
        placeholder: PlaceholderStyle,
        sort_fields: SortAllowList,
    ) -> Self {
        Self {
            projection: projection.into(),
            placeholder,
            sort_fields,
        }
    }

    /// Render the statement.
    ///
    /// The sort field is validated first; nothing is rendered on rejection.
    /// An empty predicate sequence emits no filter clause at all, never a
    /// vacuous always-true one. Equal inputs yield byte-identical text and
    /// value-equal parameters.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidSortField`] when the requested sort field
    /// is not in the allow-list.
    ///
    /// # Panics
    ///
    /// Panics when the predicate and parameter counts diverge. That only
    /// happens when a caller bypasses [`ParameterSet::from_predicates`]; it is
    /// a contract breach in the calling code, not a recoverable condition.
    pub fn render(
        &self,
        predicates: &[Predicate],
        parameters: &ParameterSet,
        sort: &SortSpec,
    ) -> QueryResult<RenderedStatement> {
        assert_eq!(
            predicates.len(),
            parameters.len(),
            "predicate and parameter counts diverged; collector and binder must stay in lockstep"
        );

        let sort_column = self
            .sort_fields
            .resolve(&sort.field)
            .ok_or_else(|| QueryError::InvalidSortField(sort.field.clone()))?;

        let mut text = String::with_capacity(self.projection.len() + 32 * predicates.len() + 24);
        text.push_str(&self.projection);

        for (index, predicate) in predicates.iter().enumerate() {
            text.push_str(if index == 0 { " WHERE " } else { " AND " });
            text.push_str(predicate.column());
            text.push(' ');
            text.push_str(predicate.op().as_str());
            text.push(' ');
            text.push_str(&self.placeholder.token(index));
        }

        text.push_str(" ORDER BY ");
        text.push_str(sort_column);
        if sort.direction == SortDirection::Desc {
            text.push_str(" DESC");
        }

        Ok(RenderedStatement {
            text,
            parameters: parameters.clone(),
        })
    }
}
