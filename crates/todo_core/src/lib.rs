//! Core domain logic for the todo list manager.
//! This crate is the single source of truth for todo invariants.

pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod validation;

pub use form::{EditSelection, FormError, SubmitOutcome, TodoForm};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::todo::{Todo, TodoDraft, TodoFields, TodoId, TodoStatus};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
    TODOS_STORAGE_KEY,
};
pub use store::{StoreError, StoreResult, TodoStore};
pub use validation::{validate_draft, TodoField, ValidationError, ValidationErrors};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
