//! Persistence collaborator for board state.
//!
//! # Responsibility
//! - Define the key-value contract the board service persists through.
//! - Keep SQLite and wire-format details out of the service layer.
//!
//! # Invariants
//! - Stores treat payloads as opaque text; only `codec` knows the shape.
//! - Store failures are reported as `StoreError`, never as panics.

pub mod board_store;
pub mod codec;
