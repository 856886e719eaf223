//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical todo record and its wire shape.
//! - Separate raw form input (`TodoDraft`) from accepted fields (`TodoFields`).
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `TodoFields` can only be produced by `validation::validate_draft`.
//! - Wire field names are `id|title|description|endDate|status`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque, stable identifier for a todo record.
///
/// Serialized as a plain string. Fresh ids are UUID v4 text, but any string
/// read back from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle tag of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TodoStatus {
    /// Created but not started.
    #[default]
    #[serde(rename = "Pending")]
    Pending,
    /// Work has started.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Completed.
    #[serde(rename = "Done")]
    Done,
}

impl TodoStatus {
    /// Every status in display order.
    pub const ALL: [TodoStatus; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Returns the wire literal for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Parses an exact wire literal. Anything else yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl Display for TodoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Assigned once at creation.
    pub id: TodoId,
    pub title: String,
    pub description: String,
    /// Date-formatted string, e.g. `2024-01-01`.
    pub end_date: String,
    pub status: TodoStatus,
}

impl Todo {
    /// Creates a todo with a freshly generated ID.
    pub fn new(fields: TodoFields) -> Self {
        Self::with_id(TodoId::generate(), fields)
    }

    /// Creates a todo with a caller-provided ID.
    pub fn with_id(id: TodoId, fields: TodoFields) -> Self {
        let TodoFields {
            title,
            description,
            end_date,
            status,
        } = fields;
        Self {
            id,
            title,
            description,
            end_date,
            status,
        }
    }

    /// Replaces every mutable field, keeping `id`.
    pub fn apply(&mut self, fields: TodoFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.end_date = fields.end_date;
        self.status = fields.status;
    }

    /// Returns a draft pre-populated with this todo's current values.
    pub fn to_draft(&self) -> TodoDraft {
        TodoDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            end_date: self.end_date.clone(),
            status: self.status.as_str().to_string(),
        }
    }
}

/// Raw, unvalidated form input.
///
/// `status` stays a string so that unknown literals can be reported as
/// `InvalidEnum` instead of failing at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub end_date: String,
    pub status: String,
}

impl TodoDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        end_date: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            end_date: end_date.into(),
            status: status.into(),
        }
    }
}

impl Default for TodoDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            end_date: String::new(),
            status: TodoStatus::default().as_str().to_string(),
        }
    }
}

/// Field set that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    title: String,
    description: String,
    end_date: String,
    status: TodoStatus,
}

impl TodoFields {
    pub(crate) fn accepted(
        title: String,
        description: String,
        end_date: String,
        status: TodoStatus,
    ) -> Self {
        Self {
            title,
            description,
            end_date,
            status,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn status(&self) -> TodoStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::{Todo, TodoDraft, TodoFields, TodoId, TodoStatus};

    fn fields() -> TodoFields {
        TodoFields::accepted(
            "Buy milk!".to_string(),
            "Get milk at store".to_string(),
            "2024-01-01".to_string(),
            TodoStatus::Pending,
        )
    }

    #[test]
    fn status_literals_match_wire_names() {
        for status in TodoStatus::ALL {
            assert_eq!(TodoStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TodoStatus::parse("in progress"), None);
        assert_eq!(TodoStatus::parse("InProgress"), None);
    }

    #[test]
    fn apply_keeps_identity() {
        let mut todo = Todo::new(fields());
        let id = todo.id.clone();
        todo.apply(TodoFields::accepted(
            "Buy bread".to_string(),
            "Get bread at bakery".to_string(),
            "2024-02-02".to_string(),
            TodoStatus::Done,
        ));
        assert_eq!(todo.id, id);
        assert_eq!(todo.title, "Buy bread");
        assert_eq!(todo.status, TodoStatus::Done);
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = TodoId::from("todo-1");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("todo-1"));
        assert_eq!(
            serde_json::from_str::<TodoId>("\"anything goes\"").unwrap(),
            TodoId::from("anything goes")
        );
        assert_ne!(TodoId::generate(), TodoId::generate());
    }

    #[test]
    fn draft_defaults_to_pending() {
        assert_eq!(TodoDraft::default().status, "Pending");
        let draft = Todo::new(fields()).to_draft();
        assert_eq!(draft.end_date, "2024-01-01");
        assert_eq!(draft.status, "Pending");
    }
}
