//! Todo domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and the form.
//!
//! # Invariants
//! - Every todo is identified by a stable `TodoId`.
//! - Deletion is permanent; there is no tombstone state.

pub mod todo;
