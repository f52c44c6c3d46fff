//! Board state manager.
//!
//! # Responsibility
//! - Initialize the board from the store, falling back to the default seed.
//! - Apply add/delete/drag operations and persist every change.
//! - Track the ephemeral drag session used for preview rendering.
//!
//! # Invariants
//! - Operations never fail; unresolvable input is a no-op.
//! - A failed save is logged and never rolls back in-memory state.
//! - Unchanged boards are not written back.

use crate::model::board::{Board, DropOutcome};
use crate::model::column::ColumnId;
use crate::model::task::{Task, TaskId};
use crate::repo::board_store::BoardStore;
use crate::repo::codec::{decode_board, encode_board};
use crate::service::event::{BoardEvent, EventOutcome};
use log::{debug, info, warn};

/// Storage key used when callers do not pick one.
pub const DEFAULT_STORAGE_KEY: &str = "kanban-columns";

/// Builds the starting board from an optional persisted payload.
///
/// Malformed payloads are swallowed and replaced by [`Board::default_seed`].
pub fn initialize(persisted: Option<&str>) -> Board {
    resolve_board(persisted).0
}

/// Like [`initialize`], also reporting whether the seed was used.
fn resolve_board(persisted: Option<&str>) -> (Board, bool) {
    let Some(payload) = persisted else {
        info!("event=board_init module=service status=ok source=seed");
        return (Board::default_seed(), true);
    };

    match decode_board(payload) {
        Ok(board) => {
            if let Err(err) = board.check_partition() {
                warn!("event=board_init module=service status=warn source=persisted error={err}");
            }
            info!(
                "event=board_init module=service status=ok source=persisted tasks={}",
                board.task_count()
            );
            (board, false)
        }
        Err(err) => {
            warn!(
                "event=board_init module=service status=fallback source=seed error_code=malformed_state error={err}"
            );
            (Board::default_seed(), true)
        }
    }
}

/// Owner of one board, its drag session and its store.
pub struct BoardService<S: BoardStore> {
    store: S,
    storage_key: String,
    board: Board,
    active_task_id: Option<TaskId>,
}

impl<S: BoardStore> BoardService<S> {
    /// Opens the board stored under [`DEFAULT_STORAGE_KEY`].
    pub fn open(store: S) -> Self {
        Self::open_with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Opens the board stored under `storage_key`.
    ///
    /// A load error is treated like a missing payload. When the seed is used,
    /// including after a malformed payload, it is written back immediately.
    pub fn open_with_key(store: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let persisted = match store.load(&storage_key) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    "event=board_load module=service status=error error_code=store_read_failed error={err}"
                );
                None
            }
        };
        let (board, seeded) = resolve_board(persisted.as_deref());

        let service = Self {
            store,
            storage_key,
            board,
            active_task_id: None,
        };
        if seeded {
            service.persist("seed");
        }
        service
    }

    /// Current board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Key the board is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Appends a trimmed task to `todo`; blank titles are ignored.
    pub fn add_task(&mut self, title: &str) -> Option<TaskId> {
        let id = self.board.add_task(title);
        match &id {
            Some(id) => {
                debug!("event=task_add module=service status=ok task_id={id}");
                self.persist("add");
            }
            None => debug!("event=task_add module=service status=skip reason=blank_title"),
        }
        id
    }

    /// Removes a task from whichever column holds it.
    pub fn delete_task(&mut self, task_id: &str) -> bool {
        let removed = self.board.delete_task(task_id);
        if removed {
            debug!("event=task_delete module=service status=ok task_id={task_id}");
            self.persist("delete");
        } else {
            debug!("event=task_delete module=service status=skip reason=not_found task_id={task_id}");
        }
        removed
    }

    /// Column owning `item_id`; see [`Board::find_container`].
    pub fn find_container(&self, item_id: &str) -> Option<ColumnId> {
        self.board.find_container(item_id)
    }

    /// Starts a drag session, replacing any previous one.
    pub fn begin_drag(&mut self, task_id: impl Into<TaskId>) {
        self.active_task_id = Some(task_id.into());
    }

    /// Id of the task currently being dragged.
    pub fn active_drag(&self) -> Option<&str> {
        self.active_task_id.as_deref()
    }

    /// Task shown as the floating drag preview.
    ///
    /// `None` when no drag is active or the dragged task no longer exists.
    pub fn active_task(&self) -> Option<&Task> {
        self.board.find_task(self.active_task_id.as_deref()?)
    }

    /// Ends the drag session and applies the drop.
    pub fn end_drag(&mut self, active_id: &str, over_id: Option<&str>) -> DropOutcome {
        self.active_task_id = None;
        let outcome = self.board.apply_drop(active_id, over_id);
        match outcome {
            DropOutcome::Reordered { column, from, to } => {
                debug!(
                    "event=task_drop module=service status=ok kind=reorder column={column} from={from} to={to}"
                );
                self.persist("reorder");
            }
            DropOutcome::Moved { from, to, index } => {
                debug!(
                    "event=task_drop module=service status=ok kind=move from={from} to={to} index={index}"
                );
                self.persist("move");
            }
            DropOutcome::Cancelled => {
                debug!("event=task_drop module=service status=skip reason=cancelled");
            }
            DropOutcome::Unchanged => {
                debug!("event=task_drop module=service status=skip reason=same_index");
            }
            DropOutcome::Unresolved => debug!(
                "event=task_drop module=service status=skip reason=unresolved active_id={active_id} over_id={}",
                over_id.unwrap_or("none")
            ),
        }
        outcome
    }

    /// Routes one event to the matching operation.
    pub fn dispatch(&mut self, event: BoardEvent) -> EventOutcome {
        match event {
            BoardEvent::AddTask { title } => match self.add_task(&title) {
                Some(id) => EventOutcome::TaskAdded(id),
                None => EventOutcome::Ignored,
            },
            BoardEvent::DeleteTask { task_id } => {
                if self.delete_task(&task_id) {
                    EventOutcome::TaskDeleted
                } else {
                    EventOutcome::Ignored
                }
            }
            BoardEvent::DragStart { active_id } => {
                self.begin_drag(active_id);
                EventOutcome::DragStarted
            }
            BoardEvent::DragEnd { active_id, over_id } => {
                EventOutcome::Dropped(self.end_drag(&active_id, over_id.as_deref()))
            }
        }
    }

    fn persist(&self, reason: &'static str) {
        let payload = match encode_board(&self.board) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    "event=board_save module=service status=error reason={reason} error_code=encode_failed error={err}"
                );
                return;
            }
        };

        match self.store.save(&self.storage_key, &payload) {
            Ok(()) => debug!(
                "event=board_save module=service status=ok reason={reason} bytes={}",
                payload.len()
            ),
            Err(err) => warn!(
                "event=board_save module=service status=error reason={reason} error_code=store_write_failed error={err}"
            ),
        }
    }
}
