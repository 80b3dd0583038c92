//! The application project store.
//!
//! # Responsibility
//! - Own every `Project` created during this process lifetime.
//! - Create projects and broadcast the new snapshot to subscribed views.
//!
//! # Invariants
//! - Exactly one instance is shared by all views of a running board. It is
//!   built once by `ProjectBoard::start` and handed to each view as
//!   `Rc<ProjectStore>`; there is no global accessor and no reset.
//! - Contents are memory-only and vanish with the process.
//! - Callers validate input before `add_project`; the store itself never
//!   rejects a mutation.

use crate::model::project::{Project, ProjectId};
use crate::store::observable::ObservableStore;
use log::debug;

/// Process-wide shared mutable state for submitted projects.
#[derive(Default)]
pub struct ProjectStore {
    projects: ObservableStore<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a view callback invoked with the full project list after
    /// every change.
    pub fn subscribe(&self, listener: impl Fn(&[Project]) + 'static) {
        self.projects.subscribe(listener);
    }

    /// Creates an active project, appends it and notifies subscribers.
    ///
    /// # Contract
    /// - Generates a fresh `ProjectId`.
    /// - Status is `ProjectStatus::Active`.
    /// - Every subscriber has observed the new project when this returns.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people_count);
        let id = project.id();
        self.projects.push(project);
        debug!(
            "event=project_added module=store status=ok project_id={} total={} subscribers={}",
            id,
            self.projects.len(),
            self.projects.subscriber_count()
        );
        id
    }

    /// Returns a copy of all projects in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.snapshot()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.projects.subscriber_count()
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectStore;
    use crate::model::project::ProjectStatus;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[test]
    fn add_project_appends_active_projects_with_distinct_ids() {
        let store = ProjectStore::new();
        let ids = (0..5)
            .map(|index| store.add_project(format!("p{index}"), "desc", 2))
            .collect::<HashSet<_>>();

        let projects = store.projects();
        assert_eq!(projects.len(), 5);
        assert_eq!(ids.len(), 5);
        assert!(projects
            .iter()
            .all(|project| project.status() == ProjectStatus::Active));
        assert_eq!(projects[0].title(), "p0");
        assert_eq!(projects[4].title(), "p4");
    }

    #[test]
    fn subscribers_observe_the_appended_project() {
        let store = ProjectStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            store.subscribe(move |projects| {
                seen.borrow_mut()
                    .push(projects.iter().map(|p| p.title().to_string()).collect::<Vec<_>>());
            });
        }

        store.add_project("first", "d", 1);
        store.add_project("second", "d", 1);

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["first".to_string()],
                vec!["first".to_string(), "second".to_string()],
            ]
        );
    }
}
