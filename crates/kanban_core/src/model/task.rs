//! Task domain model.
//!
//! # Responsibility
//! - Define the card record held by board columns.
//! - Generate fresh opaque task ids.
//!
//! # Invariants
//! - `id` is never reused for another task on the same board.
//! - Tasks are immutable after creation; they only move or get deleted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix shared by every generated task id.
pub const TASK_ID_PREFIX: &str = "task-";

/// Opaque task identifier.
///
/// Persisted boards may carry ids produced by other writers, so no format is
/// assumed when reading one back.
pub type TaskId = String;

/// One card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
}

impl Task {
    /// Creates a task with a freshly generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(generate_task_id(), title)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by seed/import paths and tests where identity is already known.
    pub fn with_id(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Generates a new task id of the form `task-<uuid>`.
pub fn generate_task_id() -> TaskId {
    format!("{TASK_ID_PREFIX}{}", Uuid::new_v4().simple())
}
