//! JSON payload codec for the persisted todo collection.
//!
//! The payload is a JSON array of todo objects in list order.

use crate::model::todo::Todo;

/// Serializes the full collection, preserving order.
pub fn encode_todos(todos: &[Todo]) -> serde_json::Result<String> {
    serde_json::to_string(todos)
}

/// Parses a payload written by `encode_todos`.
///
/// # Errors
/// - Returns an error for malformed JSON, missing fields or unknown status
///   literals. Callers decide whether to fall back to an empty collection.
pub fn decode_todos(payload: &str) -> serde_json::Result<Vec<Todo>> {
    serde_json::from_str(payload)
}
