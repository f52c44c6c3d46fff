//! Board domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core board logic.
//! - Keep every board transition a synchronous function of `(Board, input)`.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - A task id appears in at most one column sequence at any time.
//! - The column set is fixed; columns never grow or shrink at runtime.

pub mod board;
pub mod column;
pub mod task;
