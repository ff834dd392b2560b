// ABOUTME: Row models returned by statement execution
// ABOUTME: Shapes match the fixed projection of the builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the `SELECT id, name FROM users` projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
}
