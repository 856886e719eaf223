//! Authoritative in-memory todo collection.
//!
//! # Responsibility
//! - Own the ordered todo list and apply add/update/status/remove mutations.
//! - Seed from and write through to a `KeyValueStore`.
//!
//! # Invariants
//! - IDs are unique across the collection.
//! - List order is insertion order; updates keep position.
//! - Each successful mutation writes the full collection once.
//! - A failed write is logged; memory stays the source of truth.

use crate::model::todo::{Todo, TodoFields, TodoId, TodoStatus};
use crate::storage::{KeyValueStore, StorageError, TODOS_STORAGE_KEY};
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod codec;

use codec::{decode_todos, encode_todos};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(TodoId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Ordered todo collection backed by a key-value store.
pub struct TodoStore<S: KeyValueStore> {
    storage: S,
    key: String,
    todos: Vec<Todo>,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Loads the collection stored under the default `todos` key.
    ///
    /// # Errors
    /// - Propagates storage read failures. An absent or unparseable payload
    ///   is not an error and yields an empty store.
    pub fn load(storage: S) -> Result<Self, StorageError> {
        Self::load_with_key(storage, TODOS_STORAGE_KEY)
    }

    /// Loads the collection stored under `key`.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Result<Self, StorageError> {
        let key = key.into();
        let todos = match storage.get(&key)? {
            None => {
                info!("event=store_load module=store status=ok source=absent count=0");
                Vec::new()
            }
            Some(payload) => match decode_todos(&payload) {
                Ok(decoded) => {
                    let todos = dedup_by_id(decoded);
                    info!(
                        "event=store_load module=store status=ok source=storage count={}",
                        todos.len()
                    );
                    todos
                }
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=fallback error_code=payload_unparseable bytes={} error={err}",
                        payload.len()
                    );
                    Vec::new()
                }
            },
        };

        Ok(Self {
            storage,
            key,
            todos,
        })
    }

    /// Appends a new todo with a freshly generated ID.
    pub fn add(&mut self, fields: TodoFields) -> Todo {
        let mut todo = Todo::new(fields.clone());
        // Why: loaded ids are arbitrary strings, so a generated id is checked
        // against the collection rather than assumed unique.
        while self.position(&todo.id).is_some() {
            todo = Todo::new(fields.clone());
        }
        self.todos.push(todo.clone());
        debug!("event=todo_add module=store status=ok todo_id={}", todo.id);
        self.persist();
        todo
    }

    /// Replaces the mutable fields of the todo with `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no todo has `id`. Nothing is written.
    pub fn update(&mut self, id: &TodoId, fields: TodoFields) -> StoreResult<Todo> {
        let index = self.require(id)?;
        self.todos[index].apply(fields);
        let updated = self.todos[index].clone();
        debug!("event=todo_update module=store status=ok todo_id={id}");
        self.persist();
        Ok(updated)
    }

    /// Changes only the status of the todo with `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no todo has `id`. Nothing is written.
    pub fn set_status(&mut self, id: &TodoId, status: TodoStatus) -> StoreResult<()> {
        let index = self.require(id)?;
        self.todos[index].status = status;
        debug!(
            "event=todo_set_status module=store status=ok todo_id={id} todo_status={}",
            status.as_str()
        );
        self.persist();
        Ok(())
    }

    /// Deletes the todo with `id`. Absent IDs are a no-op.
    pub fn remove(&mut self, id: &TodoId) {
        let Some(index) = self.position(id) else {
            debug!("event=todo_remove module=store status=noop todo_id={id}");
            return;
        };
        self.todos.remove(index);
        debug!("event=todo_remove module=store status=ok todo_id={id}");
        self.persist();
    }

    /// Read-only snapshot in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Persistence collaborator this store writes through.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| &todo.id == id)
    }

    fn require(&self, id: &TodoId) -> StoreResult<usize> {
        self.position(id).ok_or_else(|| {
            debug!("event=todo_lookup module=store status=not_found todo_id={id}");
            StoreError::NotFound(id.clone())
        })
    }

    fn persist(&self) {
        let payload = match encode_todos(&self.todos) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=store_persist module=store status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };

        match self.storage.set(&self.key, &payload) {
            Ok(()) => debug!(
                "event=store_persist module=store status=ok count={} bytes={}",
                self.todos.len(),
                payload.len()
            ),
            Err(err) => error!(
                "event=store_persist module=store status=error error_code=write_failed count={} error={err}",
                self.todos.len()
            ),
        }
    }
}

fn dedup_by_id(todos: Vec<Todo>) -> Vec<Todo> {
    let mut seen = HashSet::with_capacity(todos.len());
    let mut unique = Vec::with_capacity(todos.len());
    for todo in todos {
        // Why: `update`/`remove` address the first match only, so a later
        // record with the same id would be unreachable yet still persisted.
        if seen.insert(todo.id.clone()) {
            unique.push(todo);
        } else {
            warn!(
                "event=store_load module=store status=skip error_code=duplicate_id todo_id={}",
                todo.id
            );
        }
    }
    unique
}
