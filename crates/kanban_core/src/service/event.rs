//! Messages accepted by the board service.
//!
//! Gesture and input layers produce these; `BoardService::dispatch` consumes
//! them one at a time. JSON form is tagged by `type`, e.g.
//! `{"type":"drag_end","active_id":"task-1","over_id":"done"}`.

use crate::model::board::DropOutcome;
use crate::model::task::TaskId;
use serde::{Deserialize, Serialize};

/// One user intent forwarded from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    AddTask {
        title: String,
    },
    DeleteTask {
        task_id: TaskId,
    },
    DragStart {
        active_id: TaskId,
    },
    DragEnd {
        active_id: String,
        /// `None` when released outside every droppable target.
        #[serde(default)]
        over_id: Option<String>,
    },
}

/// What handling one `BoardEvent` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    TaskAdded(TaskId),
    TaskDeleted,
    /// Blank title or unknown task id.
    Ignored,
    DragStarted,
    Dropped(DropOutcome),
}

impl EventOutcome {
    /// Returns whether board content changed.
    pub fn changed(&self) -> bool {
        match self {
            Self::TaskAdded(_) | Self::TaskDeleted => true,
            Self::Dropped(outcome) => outcome.changed(),
            Self::Ignored | Self::DragStarted => false,
        }
    }
}
