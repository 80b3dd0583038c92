//! Filtered project list view.
//!
//! # Responsibility
//! - Subscribe to `ProjectStore` and keep the projects of one status.
//! - Rebuild the item list region on every store change.
//!
//! # Invariants
//! - Each re-render clears the list and appends one item per assigned
//!   project, in store order. There is no incremental diffing.
//! - Only the list region is re-rendered; the heading is set once.

use crate::app::BoardConfig;
use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::ProjectStore;
use crate::view::component::{DetachedComponent, View, ViewComponent};
use crate::view::renderer::{InsertPosition, MountError, Renderer};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Which projects a list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Active,
    Finished,
}

impl ProjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    pub fn status(self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        project.status() == self.status()
    }

    /// Id assigned to the view's root element, e.g. `active-projects`.
    pub fn element_id(self) -> String {
        format!("{}-projects", self.as_str())
    }

    /// Id assigned to the item list, e.g. `active-projects-list`.
    pub fn list_id(self) -> String {
        format!("{}-projects-list", self.as_str())
    }

    /// Heading text, e.g. `ACTIVE PROJECTS`.
    pub fn heading(self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }
}

/// List of project titles for one `ProjectCategory`.
pub struct ProjectListView<R: Renderer> {
    component: ViewComponent<R>,
    category: ProjectCategory,
    store: Rc<ProjectStore>,
    heading: R::Element,
    list: R::Element,
    assigned: RefCell<Vec<Project>>,
}

/// List view whose mount points are resolved but not yet attached.
pub struct PendingListView<R: Renderer> {
    component: DetachedComponent<R>,
    category: ProjectCategory,
    store: Rc<ProjectStore>,
    heading: R::Element,
    list: R::Element,
}

impl<R: Renderer + 'static> PendingListView<R> {
    /// Attaches at the end of the host, subscribes to the store and renders
    /// the heading.
    pub fn mount(self) -> Rc<ProjectListView<R>> {
        let view = Rc::new(ProjectListView {
            component: self.component.attach(),
            category: self.category,
            store: self.store,
            heading: self.heading,
            list: self.list,
            assigned: RefCell::new(Vec::new()),
        });
        view.configure();
        view.render_content();
        view
    }
}

impl<R: Renderer + 'static> ProjectListView<R> {
    /// Resolves the template, host, heading and list without attaching.
    pub fn prepare(
        renderer: Rc<R>,
        store: Rc<ProjectStore>,
        category: ProjectCategory,
        config: &BoardConfig,
    ) -> Result<PendingListView<R>, MountError> {
        let component = ViewComponent::prepare(
            renderer,
            &config.list_template_id,
            &config.host_id,
            InsertPosition::End,
            Some(&category.element_id()),
        )?;
        let heading = component.require(&config.list_heading_selector, "project list")?;
        let list = component.require(&config.list_selector, "project list")?;

        Ok(PendingListView {
            component,
            category,
            store,
            heading,
            list,
        })
    }

    /// Mounts the list at the end of the board host, subscribes it to
    /// `store` and renders its heading.
    pub fn new(
        renderer: Rc<R>,
        store: Rc<ProjectStore>,
        category: ProjectCategory,
        config: &BoardConfig,
    ) -> Result<Rc<Self>, MountError> {
        Ok(Self::prepare(renderer, store, category, config)?.mount())
    }

    pub fn category(&self) -> ProjectCategory {
        self.category
    }

    /// Projects shown after the most recent store notification.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    pub fn element(&self) -> &R::Element {
        self.component.element()
    }

    pub fn list_element(&self) -> &R::Element {
        &self.list
    }

    fn assign(&self, projects: &[Project]) {
        let relevant = projects
            .iter()
            .filter(|project| self.category.matches(project))
            .cloned()
            .collect::<Vec<_>>();
        debug!(
            "event=list_assign module=view category={} received={} shown={}",
            self.category.as_str(),
            projects.len(),
            relevant.len()
        );
        *self.assigned.borrow_mut() = relevant;
        self.render_projects();
    }

    fn render_projects(&self) {
        let renderer = self.component.renderer();
        renderer.clear_children(&self.list);
        for project in self.assigned.borrow().iter() {
            renderer.append_list_item(&self.list, project.title());
        }
    }
}

impl<R: Renderer + 'static> View for ProjectListView<R> {
    fn configure(self: &Rc<Self>) {
        let view = Rc::downgrade(self);
        self.store.subscribe(move |projects| {
            if let Some(view) = view.upgrade() {
                view.assign(projects);
            }
        });
    }

    fn render_content(&self) {
        let renderer = self.component.renderer();
        renderer.set_element_id(&self.list, &self.category.list_id());
        renderer.set_text(&self.heading, &self.category.heading());
    }
}
