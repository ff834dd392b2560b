// ABOUTME: Entry point wiring predicate collection, parameter binding, and rendering
// ABOUTME: Pure and stateless; safe to share across threads and reuse per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::binding::ParameterSet;
use crate::errors::QueryResult;
use crate::filters::{ListUsersFilter, SortSpec};
use crate::statement::{
    PlaceholderStyle, RenderedStatement, SortAllowList, StatementRenderer, USER_PROJECTION,
};
use tracing::debug;

/// Builds parameterized user-retrieval statements from optional filter
/// criteria.
///
/// Construction fixes the projection, placeholder style, and sort allow-list;
/// each [`build`](Self::build) call then operates solely on its inputs and
/// produces a fresh [`RenderedStatement`]. No state is retained between
/// calls.
#[derive(Debug, Clone)]
pub struct UserQueryBuilder {
    renderer: StatementRenderer,
}

impl UserQueryBuilder {
    /// Builder with the default projection and sort allow-list
    #[must_use]
    pub fn new(placeholder: PlaceholderStyle) -> Self {
        Self::with_sort_fields(placeholder, SortAllowList::with_defaults())
    }

    /// Builder with a custom sort allow-list
    #[must_use]
    pub fn with_sort_fields(placeholder: PlaceholderStyle, sort_fields: SortAllowList) -> Self {
        Self {
            renderer: StatementRenderer::new(USER_PROJECTION, placeholder, sort_fields),
        }
    }

    /// Build the statement for the given criteria and sort request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::QueryError::InvalidSortField`] when the sort
    /// field is not in the allow-list; no statement text is produced in that
    /// case.
    pub fn build(&self, filter: &ListUsersFilter, sort: &SortSpec) -> QueryResult<RenderedStatement> {
        let predicates = filter.predicates();
        let parameters = ParameterSet::from_predicates(&predicates);
        let statement = self.renderer.render(&predicates, &parameters, sort)?;

        debug!(
            predicates = predicates.len(),
            sort_field = %sort.field,
            "rendered user retrieval statement"
        );

        Ok(statement)
    }
}
