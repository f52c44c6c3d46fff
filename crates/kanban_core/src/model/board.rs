//! Board state and drop resolution.
//!
//! # Responsibility
//! - Hold the ordered partition of tasks into the fixed columns.
//! - Resolve drag-end events into in-place reorders or cross-column moves.
//!
//! # Invariants
//! - A task id appears in at most one column; no column holds a duplicate.
//! - Every mutation completes inside one `&mut self` call, so a task is never
//!   observable as missing from all columns.
//! - Unresolvable ids degrade to no-ops; the partition is never repaired or
//!   rewritten on their account.

use crate::model::column::ColumnId;
use crate::model::task::{generate_task_id, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Partition check failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardValidationError {
    DuplicateTaskId(TaskId),
}

impl Display for BoardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTaskId(id) => write!(f, "task id appears more than once: {id}"),
        }
    }
}

impl Error for BoardValidationError {}

/// Result of resolving one drag-end event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped outside any target.
    Cancelled,
    /// Active or over id did not resolve to a column or task index.
    Unresolved,
    /// Both ids resolved to the same slot.
    Unchanged,
    /// Array-move inside one column.
    Reordered {
        column: ColumnId,
        from: usize,
        to: usize,
    },
    /// Task left `from` and was inserted into `to` at `index`.
    Moved {
        from: ColumnId,
        to: ColumnId,
        index: usize,
    },
}

impl DropOutcome {
    /// Returns whether the board content changed.
    pub fn changed(self) -> bool {
        matches!(self, Self::Reordered { .. } | Self::Moved { .. })
    }
}

/// Mapping from each fixed column to its ordered task sequence.
///
/// Serialized as `{"todo": [...], "inprogress": [...], "done": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    todo: Vec<Task>,
    inprogress: Vec<Task>,
    done: Vec<Task>,
}

impl Board {
    /// Creates a board from explicit column contents.
    ///
    /// Does not check the partition; see [`Board::check_partition`].
    pub fn new(todo: Vec<Task>, inprogress: Vec<Task>, done: Vec<Task>) -> Self {
        Self {
            todo,
            inprogress,
            done,
        }
    }

    /// Creates a board with every column empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the first-run board with freshly generated ids.
    pub fn default_seed() -> Self {
        Self::new(
            vec![
                Task::new("Write project brief"),
                Task::new("Set up repo"),
                Task::new("Draft UI"),
            ],
            vec![Task::new("API integration")],
            vec![Task::new("Create wireframes")],
        )
    }

    /// Returns one column's tasks in display order.
    pub fn column(&self, column: ColumnId) -> &[Task] {
        match column {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.inprogress,
            ColumnId::Done => &self.done,
        }
    }

    fn column_mut(&mut self, column: ColumnId) -> &mut Vec<Task> {
        match column {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.inprogress,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Iterates columns in declared order.
    pub fn columns(&self) -> impl Iterator<Item = (ColumnId, &[Task])> + '_ {
        ColumnId::ALL
            .into_iter()
            .map(move |column| (column, self.column(column)))
    }

    /// Total number of tasks across all columns.
    pub fn task_count(&self) -> usize {
        self.todo.len() + self.inprogress.len() + self.done.len()
    }

    /// Resolves a drag item id to the column that owns it.
    ///
    /// A column wire name resolves to that column directly. Otherwise columns
    /// are scanned in declared order and the first one holding the task wins.
    pub fn find_container(&self, item_id: &str) -> Option<ColumnId> {
        if let Some(column) = ColumnId::parse(item_id) {
            return Some(column);
        }
        ColumnId::ALL
            .into_iter()
            .find(|column| self.index_of(*column, item_id).is_some())
    }

    /// Position of `task_id` inside `column`.
    pub fn index_of(&self, column: ColumnId, task_id: &str) -> Option<usize> {
        self.column(column)
            .iter()
            .position(|task| task.id == task_id)
    }

    /// Looks up a task anywhere on the board.
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        let column = self.find_container(task_id)?;
        self.column(column).iter().find(|task| task.id == task_id)
    }

    /// Draws a task id not yet present on this board.
    pub fn fresh_task_id(&self) -> TaskId {
        loop {
            let candidate = generate_task_id();
            if self.find_task(&candidate).is_none() {
                return candidate;
            }
        }
    }

    /// Appends a new task to `todo`.
    ///
    /// Returns `None` without touching the board when `title` is blank after
    /// trim; otherwise returns the new task id.
    pub fn add_task(&mut self, title: &str) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let id = self.fresh_task_id();
        self.todo.push(Task::with_id(id.clone(), title));
        Some(id)
    }

    /// Removes `task_id` from whichever column holds it.
    ///
    /// Returns whether anything was removed.
    pub fn delete_task(&mut self, task_id: &str) -> bool {
        let before = self.task_count();
        for column in ColumnId::ALL {
            self.column_mut(column).retain(|task| task.id != task_id);
        }
        self.task_count() != before
    }

    /// Applies a drag-end event.
    ///
    /// - `over = None` cancels.
    /// - Same column: array-move from the active index to the over index.
    /// - Across columns: insert before the `over` task, or append when `over`
    ///   names the target column itself.
    ///
    /// All indices are resolved before the first mutation.
    pub fn apply_drop(&mut self, active_id: &str, over_id: Option<&str>) -> DropOutcome {
        let Some(over_id) = over_id else {
            return DropOutcome::Cancelled;
        };
        let (Some(from), Some(to)) = (self.find_container(active_id), self.find_container(over_id))
        else {
            return DropOutcome::Unresolved;
        };

        if from == to {
            let (Some(old_index), Some(new_index)) =
                (self.index_of(from, active_id), self.index_of(to, over_id))
            else {
                return DropOutcome::Unresolved;
            };
            if old_index == new_index {
                return DropOutcome::Unchanged;
            }
            let items = self.column_mut(from);
            let task = items.remove(old_index);
            items.insert(new_index, task);
            return DropOutcome::Reordered {
                column: from,
                from: old_index,
                to: new_index,
            };
        }

        let Some(from_index) = self.index_of(from, active_id) else {
            return DropOutcome::Unresolved;
        };
        let to_index = if ColumnId::parse(over_id).is_some() {
            self.column(to).len()
        } else {
            match self.index_of(to, over_id) {
                Some(index) => index,
                None => return DropOutcome::Unresolved,
            }
        };

        let task = self.column_mut(from).remove(from_index);
        self.column_mut(to).insert(to_index, task);
        DropOutcome::Moved {
            from,
            to,
            index: to_index,
        }
    }

    /// Verifies that no task id appears twice across the board.
    pub fn check_partition(&self) -> Result<(), BoardValidationError> {
        let mut seen = HashSet::with_capacity(self.task_count());
        for (_, tasks) in self.columns() {
            for task in tasks {
                if !seen.insert(task.id.as_str()) {
                    return Err(BoardValidationError::DuplicateTaskId(task.id.clone()));
                }
            }
        }
        Ok(())
    }
}
