//! Core state and view logic for the project board.
//!
//! A validated form adds projects to one in-memory store; two list views
//! re-render from store snapshots. Rendering goes through the `Renderer`
//! trait, so the same core runs under any UI host or headless.

pub mod app;
pub mod dom;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use app::{BoardConfig, ProjectBoard};
pub use dom::memory::{MemoryDocument, NodeId, TemplateNode};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use store::observable::{Listener, ObservableStore};
pub use store::project_store::ProjectStore;
pub use validation::rule::{validate, ConstraintViolation, FieldValue, ValidationRule};
pub use view::component::{DetachedComponent, View, ViewComponent};
pub use view::project_input::{
    PendingInputForm, ProjectInput, ProjectInputForm, INVALID_INPUT_ALERT,
};
pub use view::project_list::{PendingListView, ProjectCategory, ProjectListView};
pub use view::renderer::{InsertPosition, MountError, Renderer, SubmitEvent, SubmitHandler};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
