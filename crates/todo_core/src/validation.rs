//! Form validation rules for todo drafts.
//!
//! # Responsibility
//! - Decide whether a `TodoDraft` is acceptable before it reaches the store.
//! - Report every failing field with a human-readable reason.
//!
//! # Invariants
//! - Validation is pure: no logging, no storage access.
//! - Lengths count Unicode scalar values, not bytes.

use crate::model::todo::{TodoDraft, TodoFields, TodoStatus};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 6;
/// Minimum description length in characters.
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// Editable todo field, named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TodoField {
    Title,
    Description,
    EndDate,
    Status,
}

impl TodoField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::EndDate => "endDate",
            Self::Status => "status",
        }
    }
}

impl Display for TodoField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reason for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    FieldTooShort { field: TodoField, min_chars: usize },
    FieldRequired(TodoField),
    InvalidEnum { field: TodoField, value: String },
}

impl ValidationError {
    /// Field this failure belongs to.
    pub fn field(&self) -> TodoField {
        match self {
            Self::FieldTooShort { field, .. } => *field,
            Self::FieldRequired(field) => *field,
            Self::InvalidEnum { field, .. } => *field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldTooShort { field, min_chars } => {
                write!(f, "{field} must be at least {min_chars} characters")
            }
            Self::FieldRequired(field) => write!(f, "{field} is required"),
            Self::InvalidEnum { field, value } => {
                let allowed = TodoStatus::ALL
                    .iter()
                    .map(|status| status.as_str())
                    .collect::<Vec<_>>()
                    .join("|");
                write!(f, "{field} must be one of {allowed}, got `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Per-field failures of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    by_field: BTreeMap<TodoField, ValidationError>,
}

impl ValidationErrors {
    fn insert(&mut self, error: ValidationError) {
        self.by_field.insert(error.field(), error);
    }

    /// Returns the failure for `field`, if any.
    pub fn get(&self, field: TodoField) -> Option<&ValidationError> {
        self.by_field.get(&field)
    }

    /// Iterates failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = (TodoField, &ValidationError)> {
        self.by_field.iter().map(|(field, error)| (*field, error))
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in self.by_field.values() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Validates a draft and converts it into accepted fields.
///
/// # Errors
/// - Returns every failing field when at least one rule does not hold.
pub fn validate_draft(draft: &TodoDraft) -> Result<TodoFields, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.title.chars().count() < TITLE_MIN_CHARS {
        errors.insert(ValidationError::FieldTooShort {
            field: TodoField::Title,
            min_chars: TITLE_MIN_CHARS,
        });
    }
    if draft.description.chars().count() < DESCRIPTION_MIN_CHARS {
        errors.insert(ValidationError::FieldTooShort {
            field: TodoField::Description,
            min_chars: DESCRIPTION_MIN_CHARS,
        });
    }
    if draft.end_date.is_empty() {
        errors.insert(ValidationError::FieldRequired(TodoField::EndDate));
    }
    let status = TodoStatus::parse(&draft.status);
    if status.is_none() {
        errors.insert(ValidationError::InvalidEnum {
            field: TodoField::Status,
            value: draft.status.clone(),
        });
    }

    match status {
        Some(status) if errors.is_empty() => Ok(TodoFields::accepted(
            draft.title.clone(),
            draft.description.clone(),
            draft.end_date.clone(),
            status,
        )),
        _ => Err(errors),
    }
}
