//! Single form surface shared by create and edit flows.
//!
//! # Responsibility
//! - Track which todo, if any, is selected for editing.
//! - Route a submitted draft to `add` (idle) or `update` (editing).
//!
//! # Invariants
//! - `Editing(id)` is entered only for an id present in the store.
//! - A submit that fails validation changes neither selection nor draft.
//! - A successful submit resets the draft and returns to `Idle`.

use crate::model::todo::{Todo, TodoDraft, TodoId};
use crate::storage::KeyValueStore;
use crate::store::{StoreError, TodoStore};
use crate::validation::{validate_draft, ValidationErrors};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Edit-selection state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSelection {
    #[default]
    Idle,
    Editing(TodoId),
}

/// Result of a submit that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Todo),
    Updated(Todo),
    /// The selected todo disappeared before submit; nothing was written.
    Discarded(TodoId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    NotFound(TodoId),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "cannot edit missing todo: {id}"),
        }
    }
}

impl Error for FormError {}

/// Form controller holding the draft and the edit selection.
#[derive(Debug, Clone, Default)]
pub struct TodoForm {
    selection: EditSelection,
    draft: TodoDraft,
}

impl TodoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &EditSelection {
        &self.selection
    }

    pub fn draft(&self) -> &TodoDraft {
        &self.draft
    }

    /// Mutable access for field-by-field input.
    pub fn draft_mut(&mut self) -> &mut TodoDraft {
        &mut self.draft
    }

    /// Label of the submit action for the current state.
    pub fn submit_label(&self) -> &'static str {
        match self.selection {
            EditSelection::Idle => "Add TODO",
            EditSelection::Editing(_) => "Update TODO",
        }
    }

    /// Selects `id` for editing and pre-populates the draft.
    ///
    /// # Errors
    /// - `FormError::NotFound` when the store has no such todo; state is
    ///   left unchanged.
    pub fn begin_edit<S: KeyValueStore>(
        &mut self,
        store: &TodoStore<S>,
        id: &TodoId,
    ) -> Result<(), FormError> {
        let todo = store
            .get(id)
            .ok_or_else(|| FormError::NotFound(id.clone()))?;
        self.draft = todo.to_draft();
        self.selection = EditSelection::Editing(id.clone());
        debug!("event=form_edit module=form status=ok todo_id={id}");
        Ok(())
    }

    /// Drops any selection and clears the draft.
    pub fn cancel(&mut self) {
        self.selection = EditSelection::Idle;
        self.draft = TodoDraft::default();
    }

    /// Validates the draft and applies it to `store`.
    ///
    /// # Errors
    /// - Per-field validation failures. The store is not touched.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut TodoStore<S>,
    ) -> Result<SubmitOutcome, ValidationErrors> {
        let fields = validate_draft(&self.draft).map_err(|errors| {
            debug!(
                "event=form_submit module=form status=invalid failed_fields={}",
                errors.len()
            );
            errors
        })?;

        let outcome = match &self.selection {
            EditSelection::Idle => SubmitOutcome::Added(store.add(fields)),
            EditSelection::Editing(id) => match store.update(id, fields) {
                Ok(todo) => SubmitOutcome::Updated(todo),
                Err(StoreError::NotFound(id)) => {
                    warn!("event=form_submit module=form status=discarded todo_id={id}");
                    SubmitOutcome::Discarded(id)
                }
            },
        };

        self.cancel();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::{EditSelection, TodoForm};

    #[test]
    fn idle_form_has_add_label_and_default_draft() {
        let form = TodoForm::new();
        assert_eq!(form.selection(), &EditSelection::Idle);
        assert_eq!(form.submit_label(), "Add TODO");
        assert_eq!(form.draft().status, "Pending");
    }

    #[test]
    fn cancel_clears_draft() {
        let mut form = TodoForm::new();
        form.draft_mut().title = "Something".to_string();
        form.cancel();
        assert!(form.draft().title.is_empty());
    }
}
