//! Board use-case services.
//!
//! # Responsibility
//! - Own the board, the drag session and the store behind one handle.
//! - Keep rendering/gesture layers decoupled from storage details.

pub mod board_service;
pub mod event;
