//! In-memory node tree implementing `Renderer`.
//!
//! # Responsibility
//! - Materialize registered templates into detached node subtrees.
//! - Attach, query and mutate nodes the way a browser document would for the
//!   subset of operations views use.
//! - Record submit handlers and alerts so callers can drive and observe the
//!   board headless.
//!
//! # Invariants
//! - Node handles are indices into an arena and stay valid for the document
//!   lifetime; detached nodes are never reused.
//! - No interior borrow is held while a submit handler runs.

use crate::view::renderer::{InsertPosition, MountError, Renderer, SubmitEvent, SubmitHandler};
use std::cell::RefCell;
use std::collections::HashMap;

/// Arena index of one node.
pub type NodeId = usize;

/// Declarative template markup, cloned on every instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNode {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    children: Vec<TemplateNode>,
}

impl TemplateNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn child(mut self, child: TemplateNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            value: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.classes.iter().any(|value| value == class)
        } else {
            self.tag.eq_ignore_ascii_case(selector)
        }
    }
}

#[derive(Default)]
struct DocumentState {
    nodes: Vec<Node>,
    templates: HashMap<String, TemplateNode>,
    submit_handlers: HashMap<NodeId, Vec<SubmitHandler>>,
    alerts: Vec<String>,
}

impl DocumentState {
    fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn materialize(&mut self, template: &TemplateNode, parent: Option<NodeId>) -> NodeId {
        let mut node = Node::element(&template.tag);
        node.id = template.id.clone();
        node.classes = template.classes.clone();
        node.text = template.text.clone();
        node.parent = parent;
        let node_id = self.insert(node);
        for child in &template.children {
            let child_id = self.materialize(child, Some(node_id));
            self.nodes[node_id].children.push(child_id);
        }
        node_id
    }

    fn detach_children(&mut self, parent: NodeId) {
        let Some(node) = self.nodes.get_mut(parent) else {
            return;
        };
        let children = std::mem::take(&mut node.children);
        for child in children {
            self.nodes[child].parent = None;
        }
    }

    /// Depth-first, pre-order search below `root`, excluding `root` itself.
    fn find_descendant(&self, root: NodeId, predicate: &dyn Fn(&Node) -> bool) -> Option<NodeId> {
        let mut stack = self.nodes.get(root)?.children.iter().rev().copied().collect::<Vec<_>>();
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current];
            if predicate(node) {
                return Some(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn text_content(&self, node_id: NodeId) -> String {
        let node = &self.nodes[node_id];
        let mut text = node.text.clone();
        for child in &node.children {
            text.push_str(&self.text_content(*child));
        }
        text
    }
}

/// Headless document: one `body` root, hosts below it, detached templates.
pub struct MemoryDocument {
    state: RefCell<DocumentState>,
    body: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        let mut state = DocumentState::default();
        let body = state.insert(Node::element("body"));
        Self {
            state: RefCell::new(state),
            body,
        }
    }

    /// Document preloaded with the `app` host and the board's templates.
    ///
    /// Mirrors the markup the board views expect: a `project-input` form
    /// with `#title`, `#description` and `#people` fields, and a
    /// `project-list` section with an `h2` heading and a `ul`.
    pub fn project_board() -> Self {
        let document = Self::new();
        document.create_host("app");
        document.register_template(
            "project-input",
            TemplateNode::new("form")
                .child(
                    TemplateNode::new("div")
                        .class("form-control")
                        .child(TemplateNode::new("label").text("Title"))
                        .child(TemplateNode::new("input").id("title")),
                )
                .child(
                    TemplateNode::new("div")
                        .class("form-control")
                        .child(TemplateNode::new("label").text("Description"))
                        .child(TemplateNode::new("textarea").id("description")),
                )
                .child(
                    TemplateNode::new("div")
                        .class("form-control")
                        .child(TemplateNode::new("label").text("People"))
                        .child(TemplateNode::new("input").id("people")),
                )
                .child(TemplateNode::new("button").text("ADD PROJECT")),
        );
        document.register_template(
            "project-list",
            TemplateNode::new("section")
                .class("projects")
                .child(TemplateNode::new("header").child(TemplateNode::new("h2")))
                .child(TemplateNode::new("ul")),
        );
        document
    }

    /// Registers (or replaces) a template under `template_id`.
    pub fn register_template(&self, template_id: impl Into<String>, template: TemplateNode) {
        self.state
            .borrow_mut()
            .templates
            .insert(template_id.into(), template);
    }

    /// Appends an empty `div` host with `host_id` under the body.
    pub fn create_host(&self, host_id: &str) -> NodeId {
        let mut state = self.state.borrow_mut();
        let mut node = Node::element("div");
        node.id = Some(host_id.to_string());
        node.parent = Some(self.body);
        let node_id = state.insert(node);
        state.nodes[self.body].children.push(node_id);
        node_id
    }

    /// Finds an attached node by id.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.state
            .borrow()
            .find_descendant(self.body, &|node: &Node| node.id.as_deref() == Some(id))
    }

    pub fn children(&self, node_id: NodeId) -> Vec<NodeId> {
        self.state
            .borrow()
            .nodes
            .get(node_id)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    pub fn element_id(&self, node_id: NodeId) -> Option<String> {
        self.state
            .borrow()
            .nodes
            .get(node_id)
            .and_then(|node| node.id.clone())
    }

    /// Concatenated text of a node and all its descendants.
    pub fn text(&self, node_id: NodeId) -> String {
        let state = self.state.borrow();
        if node_id >= state.nodes.len() {
            return String::new();
        }
        state.text_content(node_id)
    }

    /// Text of each child of `list`, in order.
    pub fn list_items(&self, list: NodeId) -> Vec<String> {
        let state = self.state.borrow();
        match state.nodes.get(list) {
            Some(node) => node
                .children
                .iter()
                .map(|child| state.text_content(*child))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn value(&self, node_id: NodeId) -> String {
        self.state
            .borrow()
            .nodes
            .get(node_id)
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }

    /// Runs every submit handler registered on `form`.
    ///
    /// Returns whether a handler suppressed native submission.
    pub fn dispatch_submit(&self, form: NodeId) -> bool {
        let handlers = self
            .state
            .borrow()
            .submit_handlers
            .get(&form)
            .cloned()
            .unwrap_or_default();
        let mut event = SubmitEvent::new();
        for handler in handlers {
            handler(&mut event);
        }
        event.default_prevented()
    }

    /// Alert messages shown so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }
}

impl Renderer for MemoryDocument {
    type Host = NodeId;
    type Element = NodeId;

    fn resolve_host(&self, host_id: &str) -> Result<NodeId, MountError> {
        self.find_by_id(host_id)
            .ok_or_else(|| MountError::HostNotFound(host_id.to_string()))
    }

    fn instantiate(&self, template_id: &str) -> Result<NodeId, MountError> {
        let mut state = self.state.borrow_mut();
        let template = state
            .templates
            .get(template_id)
            .cloned()
            .ok_or_else(|| MountError::TemplateNotFound(template_id.to_string()))?;
        Ok(state.materialize(&template, None))
    }

    fn attach(&self, host: &NodeId, element: &NodeId, position: InsertPosition) {
        let mut state = self.state.borrow_mut();
        if *element == *host || *element >= state.nodes.len() || *host >= state.nodes.len() {
            return;
        }
        if let Some(previous) = state.nodes[*element].parent.take() {
            state.nodes[previous].children.retain(|child| child != element);
        }
        state.nodes[*element].parent = Some(*host);
        let children = &mut state.nodes[*host].children;
        match position {
            InsertPosition::Start => children.insert(0, *element),
            InsertPosition::End => children.push(*element),
        }
    }

    fn set_element_id(&self, element: &NodeId, id: &str) {
        if let Some(node) = self.state.borrow_mut().nodes.get_mut(*element) {
            node.id = Some(id.to_string());
        }
    }

    fn query(&self, root: &NodeId, selector: &str) -> Option<NodeId> {
        self.state
            .borrow()
            .find_descendant(*root, &|node: &Node| node.matches(selector))
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        let mut state = self.state.borrow_mut();
        state.detach_children(*element);
        if let Some(node) = state.nodes.get_mut(*element) {
            node.text = text.to_string();
        }
    }

    fn clear_children(&self, element: &NodeId) {
        self.state.borrow_mut().detach_children(*element);
    }

    fn append_list_item(&self, list: &NodeId, text: &str) {
        let mut state = self.state.borrow_mut();
        if *list >= state.nodes.len() {
            return;
        }
        let mut item = Node::element("li");
        item.text = text.to_string();
        item.parent = Some(*list);
        let item_id = state.insert(item);
        state.nodes[*list].children.push(item_id);
    }

    fn input_value(&self, input: &NodeId) -> String {
        self.value(*input)
    }

    fn set_input_value(&self, input: &NodeId, value: &str) {
        if let Some(node) = self.state.borrow_mut().nodes.get_mut(*input) {
            node.value = value.to_string();
        }
    }

    fn on_submit(&self, form: &NodeId, handler: SubmitHandler) {
        self.state
            .borrow_mut()
            .submit_handlers
            .entry(*form)
            .or_default()
            .push(handler);
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }
}
