//! Board blob encoding.
//!
//! The wire shape is the board's column mapping as JSON with field names
//! preserved. Unknown task fields are ignored on read, so blobs written by a
//! newer task shape stay readable.

use crate::model::board::Board;

/// Encodes a board into its persisted text form.
pub fn encode_board(board: &Board) -> serde_json::Result<String> {
    serde_json::to_string(board)
}

/// Decodes a persisted blob.
///
/// Fails on malformed JSON or when any column field is missing or mistyped.
pub fn decode_board(payload: &str) -> serde_json::Result<Board> {
    serde_json::from_str(payload)
}
