//! Project domain model.
//!
//! # Responsibility
//! - Define the record created by `ProjectStore::add_project` and
//!   handed to listeners inside snapshots.
//!
//! # Invariants
//! - `id` is stable and never reused for another project within one
//!   process lifetime.
//! - Fields never change after construction; the store exposes no
//!   update path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every tracked project.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Canonical record for one tracked project.
///
/// Listeners only ever see clones of this record; mutating a snapshot
/// has no effect on the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID, generated at creation time.
    pub id: ProjectId,
    /// Short display title.
    pub title: String,
    /// Free-form description text.
    pub description: String,
    /// Headcount assigned to the project.
    pub people: u32,
}

impl Project {
    /// Creates a new project with a generated stable ID.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by tests and fixtures where identity must be deterministic.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
        }
    }
}
