//! Rendering collaborator contract.
//!
//! The core never touches markup. A host UI implements `Renderer` over its
//! own node handles; `dom::memory::MemoryDocument` is the in-process
//! implementation used headless and in tests.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Where a view's root element lands inside its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the host's existing children.
    Start,
    /// After the host's existing children.
    End,
}

/// Submit event passed to form handlers.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the host's native form submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Submit callback registered on a form element.
pub type SubmitHandler = Rc<dyn Fn(&mut SubmitEvent)>;

/// Template materialization, attachment and element access.
///
/// `Host` and `Element` are opaque handles owned by the implementation;
/// cloning a handle must not clone the underlying node.
pub trait Renderer {
    type Host: Clone;
    type Element: Clone;

    /// Looks up the container a view attaches into.
    fn resolve_host(&self, host_id: &str) -> Result<Self::Host, MountError>;
    /// Produces a fresh, detached root element from a template.
    fn instantiate(&self, template_id: &str) -> Result<Self::Element, MountError>;
    fn attach(&self, host: &Self::Host, element: &Self::Element, position: InsertPosition);
    fn set_element_id(&self, element: &Self::Element, id: &str);
    /// Finds the first descendant of `root` matching `selector`
    /// (`#id`, `.class` or a tag name).
    fn query(&self, root: &Self::Element, selector: &str) -> Option<Self::Element>;
    fn set_text(&self, element: &Self::Element, text: &str);
    fn clear_children(&self, element: &Self::Element);
    /// Appends one list item showing `text`.
    fn append_list_item(&self, list: &Self::Element, text: &str);
    fn input_value(&self, input: &Self::Element) -> String;
    fn set_input_value(&self, input: &Self::Element, value: &str);
    fn on_submit(&self, form: &Self::Element, handler: SubmitHandler);
    /// Shows a blocking message to the user.
    fn alert(&self, message: &str);
}

/// Construction-time failure to resolve a mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    TemplateNotFound(String),
    HostNotFound(String),
    ElementNotFound {
        selector: String,
        context: &'static str,
    },
}

impl Display for MountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(id) => write!(f, "template not found: `{id}`"),
            Self::HostNotFound(id) => write!(f, "host element not found: `{id}`"),
            Self::ElementNotFound { selector, context } => {
                write!(f, "element `{selector}` not found in {context}")
            }
        }
    }
}

impl Error for MountError {}

#[cfg(test)]
mod tests {
    use super::{MountError, SubmitEvent};

    #[test]
    fn submit_event_tracks_prevent_default() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn mount_error_messages_name_the_missing_piece() {
        let err = MountError::ElementNotFound {
            selector: "#title".to_string(),
            context: "project input form",
        };
        assert_eq!(err.to_string(), "element `#title` not found in project input form");
        assert!(MountError::HostNotFound("app".to_string())
            .to_string()
            .contains("`app`"));
    }
}
