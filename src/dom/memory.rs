//! In-Memory Document
//!
//! A small arena-backed document used to exercise behaviours without a
//! browser. It models exactly what the [`Dom`] and [`Browser`] traits expose:
//! attributes, classes, text, inline styles, layout numbers and form values.
//! Layout is not computed; tests assign offsets and rects directly.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{Browser, Dom, Rect, Selector};

/// Handle to a node in a [`MemoryDom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    style: BTreeMap<String, String>,
    offset_top: f64,
    offset_height: f64,
    rect: Rect,
    value: String,
    default_value: String,
}

/// Arena-backed document
#[derive(Debug)]
pub struct MemoryDom {
    nodes: RefCell<Vec<Node>>,
    title: RefCell<String>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Create a document holding `<html>` and `<body>`
    pub fn new() -> Self {
        let html = Node {
            tag: "html".to_string(),
            ..Node::default()
        };
        let body = Node {
            tag: "body".to_string(),
            parent: Some(NodeId(0)),
            ..Node::default()
        };
        Self {
            nodes: RefCell::new(vec![html, body]),
            title: RefCell::new(String::new()),
        }
    }

    /// The `<body>` node
    pub fn root(&self) -> NodeId {
        NodeId(1)
    }

    /// Append a child element and return a builder for it
    pub fn append(&self, parent: NodeId, tag: &str) -> NodeBuilder<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            parent: Some(parent),
            ..Node::default()
        });
        NodeBuilder { dom: self, id }
    }

    pub fn set_document_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    /// Simulate typing into a field
    pub fn set_value(&self, id: NodeId, value: &str) {
        self.with_node(id, |n| n.value = value.to_string());
    }

    pub fn set_offset(&self, id: NodeId, top: f64, height: f64) {
        self.with_node(id, |n| {
            n.offset_top = top;
            n.offset_height = height;
        });
    }

    pub fn set_rect(&self, id: NodeId, rect: Rect) {
        self.with_node(id, |n| n.rect = rect);
    }

    /// Inline style value, if set
    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow().get(id.0).and_then(|n| n.style.get(property).cloned())
    }

    pub fn classes(&self, id: NodeId) -> Vec<String> {
        self.nodes.borrow().get(id.0).map(|n| n.classes.clone()).unwrap_or_default()
    }

    fn with_node(&self, id: NodeId, f: impl FnOnce(&mut Node)) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(id.0) {
            f(node);
        }
    }

    fn read<T>(&self, id: NodeId, f: impl FnOnce(&Node) -> T) -> Option<T> {
        self.nodes.borrow().get(id.0).map(f)
    }

    fn is_inclusive_ancestor(nodes: &[Node], ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match nodes.get(node.0).and_then(|n| n.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn node_matches(node: &Node, selector: &Selector) -> bool {
        selector.matches(&node.tag, &node.classes, |name| node.attrs.get(name).map(String::as_str))
    }
}

/// Chained setup for a freshly appended node
pub struct NodeBuilder<'a> {
    dom: &'a MemoryDom,
    id: NodeId,
}

impl NodeBuilder<'_> {
    pub fn with_id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: &str) -> Self {
        self.dom.with_node(self.id, |n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        });
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.dom.with_node(self.id, |n| {
            n.attrs.insert(name.to_string(), value.to_string());
        });
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.dom.with_node(self.id, |n| n.text = text.to_string());
        self
    }

    /// Initial field value, restored by a form reset
    pub fn value(self, value: &str) -> Self {
        self.dom.with_node(self.id, |n| {
            n.value = value.to_string();
            n.default_value = value.to_string();
        });
        self
    }

    pub fn offset(self, top: f64, height: f64) -> Self {
        self.dom.set_offset(self.id, top, height);
        self
    }

    pub fn rect(self, top: f64, bottom: f64) -> Self {
        self.dom.set_rect(self.id, Rect::new(top, bottom));
        self
    }

    pub fn node(self) -> NodeId {
        self.id
    }
}

impl Dom for MemoryDom {
    type Element = NodeId;

    fn document_element(&self) -> Option<NodeId> {
        Some(NodeId(0))
    }

    fn body(&self) -> Option<NodeId> {
        Some(NodeId(1))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n.attrs.get("id").is_some_and(|v| v == id))
            .map(NodeId)
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| Self::node_matches(n, selector))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn query_within(&self, element: &NodeId, selector: &Selector) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i), n))
            .find(|(id, n)| {
                id != element
                    && Self::is_inclusive_ancestor(&nodes, *element, *id)
                    && Self::node_matches(n, selector)
            })
            .map(|(id, _)| id)
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.read(*element, |n| n.parent).flatten()
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        Self::is_inclusive_ancestor(&self.nodes.borrow(), *ancestor, *node)
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.read(*element, |n| n.attrs.get(name).cloned()).flatten()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.with_node(*element, |n| {
            n.attrs.insert(name.to_string(), value.to_string());
        });
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.read(*element, |n| n.classes.iter().any(|c| c == class)).unwrap_or(false)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        self.with_node(*element, |n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        });
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.with_node(*element, |n| n.classes.retain(|c| c != class));
    }

    fn text(&self, element: &NodeId) -> String {
        self.read(*element, |n| n.text.clone()).unwrap_or_default()
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.with_node(*element, |n| n.text = text.to_string());
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        self.with_node(*element, |n| {
            n.style.insert(property.to_string(), value.to_string());
        });
    }

    fn offset_top(&self, element: &NodeId) -> f64 {
        self.read(*element, |n| n.offset_top).unwrap_or_default()
    }

    fn offset_height(&self, element: &NodeId) -> f64 {
        self.read(*element, |n| n.offset_height).unwrap_or_default()
    }

    fn bounding_rect(&self, element: &NodeId) -> Rect {
        self.read(*element, |n| n.rect).unwrap_or_default()
    }

    fn field_value(&self, element: &NodeId) -> String {
        self.read(*element, |n| n.value.clone()).unwrap_or_default()
    }

    fn reset_form(&self, form: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let fields: Vec<usize> = (0..nodes.len())
            .filter(|&i| i != form.0 && Self::is_inclusive_ancestor(&nodes, *form, NodeId(i)))
            .collect();
        for i in fields {
            let node = &mut nodes[i];
            node.value = node.default_value.clone();
        }
    }

    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_title(&self, title: &str) {
        self.set_document_title(title);
    }
}

/// Recording window
///
/// Scroll offset and viewport height are set by the test; alerts,
/// navigations and scroll requests are recorded in order.
#[derive(Debug)]
pub struct MemoryBrowser {
    scroll_y: Cell<f64>,
    inner_height: Cell<f64>,
    alerts: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    scroll_requests: RefCell<Vec<f64>>,
}

impl Default for MemoryBrowser {
    fn default() -> Self {
        Self::new(800.0)
    }
}

impl MemoryBrowser {
    pub fn new(inner_height: f64) -> Self {
        Self {
            scroll_y: Cell::new(0.0),
            inner_height: Cell::new(inner_height),
            alerts: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
            scroll_requests: RefCell::new(Vec::new()),
        }
    }

    /// Simulate the visitor scrolling
    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.scroll_requests.borrow().clone()
    }
}

impl Browser for MemoryBrowser {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn inner_height(&self) -> f64 {
        self.inner_height.get()
    }

    fn scroll_to(&self, top: f64) {
        self.scroll_requests.borrow_mut().push(top);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}
