//! Shared mount lifecycle for every view.

use crate::view::renderer::{InsertPosition, MountError, Renderer};
use log::{debug, error};
use std::rc::Rc;

/// Content lifecycle every concrete view implements.
///
/// `ViewComponent::mount` never calls these; each view decides when to.
pub trait View {
    /// Wires event handlers and store subscriptions.
    ///
    /// Takes `&Rc<Self>` so handlers can capture a weak handle to the view
    /// at registration time.
    fn configure(self: &Rc<Self>);

    /// Populates content derived from the view's own configuration.
    fn render_content(&self);
}

/// Root element materialized from a template but not yet in its host.
///
/// Every fallible lookup happens against this value; `attach` cannot fail,
/// so a view either mounts completely or leaves the host untouched.
pub struct DetachedComponent<R: Renderer> {
    renderer: Rc<R>,
    host: R::Host,
    element: R::Element,
    position: InsertPosition,
    template_id: String,
}

impl<R: Renderer> DetachedComponent<R> {
    /// Finds a descendant of the root element or fails the mount.
    pub fn require(&self, selector: &str, context: &'static str) -> Result<R::Element, MountError> {
        self.renderer
            .query(&self.element, selector)
            .ok_or_else(|| MountError::ElementNotFound {
                selector: selector.to_string(),
                context,
            })
    }

    pub fn element(&self) -> &R::Element {
        &self.element
    }

    /// Inserts the root element into its host. Consumes `self`, so each
    /// component attaches exactly once.
    pub fn attach(self) -> ViewComponent<R> {
        self.renderer
            .attach(&self.host, &self.element, self.position);
        debug!(
            "event=view_mount module=view status=ok template={} position={:?}",
            self.template_id, self.position
        );
        ViewComponent {
            renderer: self.renderer,
            host: self.host,
            element: self.element,
        }
    }
}

/// Root element of a view, attached once under its host.
pub struct ViewComponent<R: Renderer> {
    renderer: Rc<R>,
    host: R::Host,
    element: R::Element,
}

impl<R: Renderer> ViewComponent<R> {
    /// Resolves `host_id`, materializes `template_id` and optionally assigns
    /// `element_id`, without touching the host.
    ///
    /// # Errors
    /// - `MountError::HostNotFound` / `MountError::TemplateNotFound` when the
    ///   renderer cannot resolve either reference. Startup must abort.
    pub fn prepare(
        renderer: Rc<R>,
        template_id: &str,
        host_id: &str,
        position: InsertPosition,
        element_id: Option<&str>,
    ) -> Result<DetachedComponent<R>, MountError> {
        let (host, element) = renderer
            .resolve_host(host_id)
            .and_then(|host| {
                renderer
                    .instantiate(template_id)
                    .map(|element| (host, element))
            })
            .inspect_err(|err| {
                error!(
                    "event=view_mount module=view status=error template={} host={} error={}",
                    template_id, host_id, err
                );
            })?;

        if let Some(id) = element_id {
            renderer.set_element_id(&element, id);
        }

        Ok(DetachedComponent {
            renderer,
            host,
            element,
            position,
            template_id: template_id.to_string(),
        })
    }

    /// `prepare` followed by `attach`.
    pub fn mount(
        renderer: Rc<R>,
        template_id: &str,
        host_id: &str,
        position: InsertPosition,
        element_id: Option<&str>,
    ) -> Result<Self, MountError> {
        Ok(Self::prepare(renderer, template_id, host_id, position, element_id)?.attach())
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn host(&self) -> &R::Host {
        &self.host
    }

    /// Root element produced from the template.
    pub fn element(&self) -> &R::Element {
        &self.element
    }
}

#[cfg(test)]
mod tests {
    use super::ViewComponent;
    use crate::dom::memory::{MemoryDocument, TemplateNode};
    use crate::view::renderer::{InsertPosition, MountError};
    use std::rc::Rc;

    fn document() -> Rc<MemoryDocument> {
        let document = MemoryDocument::new();
        document.create_host("app");
        document.register_template(
            "card",
            TemplateNode::new("section").child(TemplateNode::new("h2")),
        );
        Rc::new(document)
    }

    #[test]
    fn mount_attaches_at_requested_position_and_assigns_id() {
        let document = document();
        let first = ViewComponent::mount(
            Rc::clone(&document),
            "card",
            "app",
            InsertPosition::End,
            Some("first"),
        )
        .unwrap();
        let second = ViewComponent::mount(
            Rc::clone(&document),
            "card",
            "app",
            InsertPosition::Start,
            Some("second"),
        )
        .unwrap();

        let host = document.find_by_id("app").unwrap();
        assert_eq!(document.children(host), vec![*second.element(), *first.element()]);
        assert_eq!(document.element_id(*first.element()).as_deref(), Some("first"));
        assert_eq!(*first.host(), host);
    }

    #[test]
    fn mount_fails_for_unknown_template_or_host() {
        let document = document();
        let err = ViewComponent::mount(Rc::clone(&document), "missing", "app", InsertPosition::End, None)
            .err()
            .unwrap();
        assert_eq!(err, MountError::TemplateNotFound("missing".to_string()));

        let err = ViewComponent::mount(document, "card", "nowhere", InsertPosition::End, None)
            .err()
            .unwrap();
        assert_eq!(err, MountError::HostNotFound("nowhere".to_string()));
    }

    #[test]
    fn prepared_component_stays_out_of_the_host_until_attached() {
        let document = document();
        let host = document.find_by_id("app").unwrap();
        let detached = ViewComponent::prepare(
            Rc::clone(&document),
            "card",
            "app",
            InsertPosition::End,
            Some("card-1"),
        )
        .unwrap();

        assert!(detached.require("h2", "card").is_ok());
        assert!(matches!(
            detached.require("#nope", "card"),
            Err(MountError::ElementNotFound { .. })
        ));
        assert!(document.children(host).is_empty());
        assert_eq!(document.find_by_id("card-1"), None);

        let view = detached.attach();
        assert_eq!(document.children(host), vec![*view.element()]);
    }
}
