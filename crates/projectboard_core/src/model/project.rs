//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record held by `ProjectStore`.
//! - Expose read-only accessors; mutation happens only at creation.
//!
//! # Invariants
//! - `id` is generated at creation and never reused within one store lifetime.
//! - `status` starts as `ProjectStatus::Active`.
//! - Construction is crate-private: only `ProjectStore::add_project` creates
//!   projects.

use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for one project.
pub type ProjectId = Uuid;

/// Board column a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Newly created, still being worked on.
    Active,
    /// Completed. No operation in this crate moves a project here yet.
    Finished,
}

/// One submitted project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people_count: u32,
    status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated ID.
    pub(crate) fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people_count,
            status: ProjectStatus::Active,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of people assigned, validated to `1..=9` by the input form.
    pub fn people_count(&self) -> u32 {
        self.people_count
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns whether this project is still being worked on.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
