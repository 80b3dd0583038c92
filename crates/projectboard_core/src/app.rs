//! Board composition root.
//!
//! # Responsibility
//! - Build the single `ProjectStore` and hand it to every view.
//! - Mount the input form and the active/finished lists in a fixed order.
//!
//! # Invariants
//! - One `ProjectBoard` owns exactly one store; views receive it by `Rc`.
//! - Any `MountError` aborts startup before anything is attached, so a failed
//!   start leaves the host unchanged.

use crate::store::project_store::ProjectStore;
use crate::view::project_input::ProjectInputForm;
use crate::view::project_list::{ProjectCategory, ProjectListView};
use crate::view::renderer::{MountError, Renderer};
use log::{error, info};
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Mount points and field rules for a board.
///
/// `Default` matches the markup served by `MemoryDocument::project_board`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Container all views attach into.
    pub host_id: String,
    pub input_template_id: String,
    pub list_template_id: String,
    /// Id assigned to the form's root element.
    pub form_element_id: String,
    pub title_selector: String,
    pub description_selector: String,
    pub people_selector: String,
    /// Heading inside each list template.
    pub list_heading_selector: String,
    /// Item container inside each list template.
    pub list_selector: String,
    /// Accepted headcount, inclusive.
    pub people_range: RangeInclusive<u32>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            host_id: "app".to_string(),
            input_template_id: "project-input".to_string(),
            list_template_id: "project-list".to_string(),
            form_element_id: "user-input".to_string(),
            title_selector: "#title".to_string(),
            description_selector: "#description".to_string(),
            people_selector: "#people".to_string(),
            list_heading_selector: "h2".to_string(),
            list_selector: "ul".to_string(),
            people_range: 1..=9,
        }
    }
}

/// A running board: one store, one form, two lists.
pub struct ProjectBoard<R: Renderer> {
    store: Rc<ProjectStore>,
    input: Rc<ProjectInputForm<R>>,
    active: Rc<ProjectListView<R>>,
    finished: Rc<ProjectListView<R>>,
}

impl<R: Renderer + 'static> ProjectBoard<R> {
    /// Resolves every view first, then attaches the form, the active list
    /// and the finished list in that order.
    ///
    /// # Errors
    /// Returns the first `MountError`; the caller should abort startup.
    pub fn start(renderer: Rc<R>, config: &BoardConfig) -> Result<Self, MountError> {
        Self::mount(renderer, config).inspect_err(|err| {
            error!("event=board_start module=app status=error error={err}");
        })
    }

    fn mount(renderer: Rc<R>, config: &BoardConfig) -> Result<Self, MountError> {
        let store = Rc::new(ProjectStore::new());
        let input = ProjectInputForm::prepare(Rc::clone(&renderer), Rc::clone(&store), config)?;
        let active = ProjectListView::prepare(
            Rc::clone(&renderer),
            Rc::clone(&store),
            ProjectCategory::Active,
            config,
        )?;
        let finished = ProjectListView::prepare(
            renderer,
            Rc::clone(&store),
            ProjectCategory::Finished,
            config,
        )?;

        let input = input.mount();
        let active = active.mount();
        let finished = finished.mount();
        info!(
            "event=board_start module=app status=ok host={} subscribers={}",
            config.host_id,
            store.subscriber_count()
        );

        Ok(Self {
            store,
            input,
            active,
            finished,
        })
    }

    /// The board's single shared store.
    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn input(&self) -> &ProjectInputForm<R> {
        &self.input
    }

    pub fn active_list(&self) -> &ProjectListView<R> {
        &self.active
    }

    pub fn finished_list(&self) -> &ProjectListView<R> {
        &self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ProjectBoard};
    use crate::dom::memory::MemoryDocument;
    use crate::view::renderer::MountError;
    use std::rc::Rc;

    #[test]
    fn start_mounts_form_first_then_lists_in_order() {
        let document = Rc::new(MemoryDocument::project_board());
        let board = ProjectBoard::start(Rc::clone(&document), &BoardConfig::default()).unwrap();

        let host = document.find_by_id("app").unwrap();
        assert_eq!(
            document.children(host),
            vec![
                *board.input().element(),
                *board.active_list().element(),
                *board.finished_list().element(),
            ]
        );
        assert_eq!(board.store().subscriber_count(), 2);
        assert!(board.store().is_empty());
    }

    #[test]
    fn start_fails_without_host() {
        let document = Rc::new(MemoryDocument::project_board());
        let config = BoardConfig {
            host_id: "missing".to_string(),
            ..BoardConfig::default()
        };
        let err = ProjectBoard::start(document, &config).err().unwrap();
        assert_eq!(err, MountError::HostNotFound("missing".to_string()));
    }

    #[test]
    fn failed_list_mount_leaves_host_without_the_form() {
        let document = Rc::new(MemoryDocument::project_board());
        let config = BoardConfig {
            list_template_id: "missing-list".to_string(),
            ..BoardConfig::default()
        };
        let err = ProjectBoard::start(Rc::clone(&document), &config).err().unwrap();

        assert_eq!(err, MountError::TemplateNotFound("missing-list".to_string()));
        let host = document.find_by_id("app").unwrap();
        assert!(document.children(host).is_empty());
        assert_eq!(document.find_by_id("user-input"), None);
    }
}
