//! Core domain logic for the kanban board.
//! This crate is the single source of truth for board invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::board::{Board, BoardValidationError, DropOutcome};
pub use model::column::ColumnId;
pub use model::task::{generate_task_id, Task, TaskId};
pub use repo::board_store::{
    BoardStore, MemoryBoardStore, SqliteBoardStore, StoreError, StoreResult,
};
pub use repo::codec::{decode_board, encode_board};
pub use service::board_service::{initialize, BoardService, DEFAULT_STORAGE_KEY};
pub use service::event::{BoardEvent, EventOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
