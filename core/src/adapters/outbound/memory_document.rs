use std::cell::RefCell;
use std::rc::Rc;

use shopfront_common::dom::{ElementAttribute, Markup, NodeId};
use shopfront_common::error::{ShopError, SurfaceError};
use tracing::debug;

use crate::ports::outbound::host_surface::{EventHandler, HostSurface};

const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

enum NodeKind {
    Element(String),
    Text(String),
}

struct NodeData {
    kind: NodeKind,
    attributes: Vec<ElementAttribute>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    listeners: Vec<(String, EventHandler)>,
}

impl NodeData {
    fn element(tag: &str) -> Self {
        Self::with_kind(NodeKind::Element(tag.to_ascii_lowercase()))
    }

    fn text(content: &str) -> Self {
        Self::with_kind(NodeKind::Text(content.to_string()))
    }

    fn with_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
            listeners: Vec::new(),
        }
    }

    fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element(tag) => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// An in-memory document implementing [`HostSurface`].
///
/// Nodes live in an arena for the lifetime of the document. Replaced or
/// detached nodes stay allocated but are no longer reachable from `<body>`,
/// so lookups by id and serialization ignore them.
pub struct MemoryDocument {
    nodes: RefCell<Vec<NodeData>>,
    body: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![NodeData::element("body")]),
            body: NodeId::new(0),
        }
    }

    /// A document whose body already holds `<div id="{id}">`.
    pub fn with_mount_point(id: &str) -> Self {
        let document = Self::new();
        {
            let mut nodes = document.nodes.borrow_mut();
            let mount = insert(&mut nodes, NodeData::element("div"));
            nodes[mount.index()]
                .attributes
                .push(ElementAttribute::new("id", id));
            link(&mut nodes, document.body, mount);
        }
        document
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Every descendant of `node` matching `selector`, in document order.
    ///
    /// Selectors are compound only: a tag name optionally followed by any
    /// number of `.class` and `#id` parts (`li.product-item`, `#prod-list`).
    pub fn query_selector_all(
        &self,
        node: NodeId,
        selector: &str,
    ) -> Result<Vec<NodeId>, SurfaceError> {
        let nodes = self.nodes.borrow();
        lookup(&nodes, node)?;
        let selector = Selector::parse(selector);
        Ok(descendants(&nodes, node)
            .into_iter()
            .filter(|candidate| selector.matches(&nodes[candidate.index()]))
            .collect())
    }

    /// Concatenated text of `node` and all of its descendants.
    pub fn text_content(&self, node: NodeId) -> Result<String, SurfaceError> {
        let nodes = self.nodes.borrow();
        lookup(&nodes, node)?;
        let mut out = String::new();
        collect_text(&nodes, node, &mut out);
        Ok(out)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Result<Option<String>, SurfaceError> {
        let nodes = self.nodes.borrow();
        Ok(lookup(&nodes, node)?.attribute(name).map(str::to_string))
    }

    pub fn tag(&self, node: NodeId) -> Result<Option<String>, SurfaceError> {
        let nodes = self.nodes.borrow();
        Ok(lookup(&nodes, node)?.tag().map(str::to_string))
    }

    pub fn children(&self, node: NodeId) -> Result<Vec<NodeId>, SurfaceError> {
        let nodes = self.nodes.borrow();
        Ok(lookup(&nodes, node)?.children.clone())
    }

    pub fn outer_html(&self, node: NodeId) -> Result<String, SurfaceError> {
        let nodes = self.nodes.borrow();
        lookup(&nodes, node)?;
        let mut out = String::new();
        write_html(&nodes, node, &mut out);
        Ok(out)
    }

    /// Serializes the whole document starting at `<body>`.
    pub fn to_html(&self) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        write_html(&nodes, self.body, &mut out);
        out
    }

    /// Invokes every listener registered for `event` on `node`, in registration order.
    ///
    /// Listeners are collected before the first one runs, so a handler may
    /// freely mutate the document. Returns the number of listeners invoked.
    pub fn dispatch(&self, node: NodeId, event: &str) -> Result<usize, ShopError> {
        let handlers: Vec<EventHandler> = {
            let nodes = self.nodes.borrow();
            let listening: Vec<EventHandler> = lookup(&nodes, node)?
                .listeners
                .iter()
                .filter(|(name, _)| name == event)
                .map(|(_, handler)| Rc::clone(handler))
                .collect();
            listening
        };

        debug!(%node, event, listeners = handlers.len(), "dispatching event");
        for handler in &handlers {
            handler()?;
        }
        Ok(handlers.len())
    }

    pub fn click(&self, node: NodeId) -> Result<usize, ShopError> {
        self.dispatch(node, "click")
    }
}

impl HostSurface for MemoryDocument {
    fn create_element(&self, tag: &str) -> NodeId {
        insert(&mut self.nodes.borrow_mut(), NodeData::element(tag))
    }

    fn element_by_id(&self, id: &str) -> Result<NodeId, SurfaceError> {
        let nodes = self.nodes.borrow();
        std::iter::once(self.body)
            .chain(descendants(&nodes, self.body))
            .find(|node| nodes[node.index()].attribute("id") == Some(id))
            .ok_or_else(|| SurfaceError::MissingElement(id.to_string()))
    }

    fn append(&self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError> {
        let mut nodes = self.nodes.borrow_mut();
        lookup(&nodes, parent)?;
        lookup(&nodes, child)?;
        if is_inclusive_ancestor(&nodes, child, parent) {
            return Err(SurfaceError::HierarchyRequest { parent, child });
        }
        link(&mut nodes, parent, child);
        Ok(())
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) -> Result<(), SurfaceError> {
        let mut nodes = self.nodes.borrow_mut();
        let data = lookup_mut(&mut nodes, node)?;
        match data.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => data.attributes.push(ElementAttribute::new(name, value)),
        }
        Ok(())
    }

    fn query_selector(&self, node: NodeId, selector: &str) -> Result<NodeId, SurfaceError> {
        self.query_selector_all(node, selector)?
            .into_iter()
            .next()
            .ok_or_else(|| SurfaceError::NoMatch {
                node,
                selector: selector.to_string(),
            })
    }

    fn add_event_listener(
        &self,
        node: NodeId,
        event: &str,
        handler: EventHandler,
    ) -> Result<(), SurfaceError> {
        let mut nodes = self.nodes.borrow_mut();
        lookup_mut(&mut nodes, node)?
            .listeners
            .push((event.to_string(), handler));
        Ok(())
    }

    fn set_inner_markup(&self, node: NodeId, markup: &[Markup]) -> Result<(), SurfaceError> {
        let mut nodes = self.nodes.borrow_mut();
        let previous = std::mem::take(&mut lookup_mut(&mut nodes, node)?.children);
        for child in previous {
            nodes[child.index()].parent = None;
        }
        for fragment in markup {
            let built = build(&mut nodes, fragment);
            link(&mut nodes, node, built);
        }
        Ok(())
    }
}

fn lookup(nodes: &[NodeData], node: NodeId) -> Result<&NodeData, SurfaceError> {
    nodes.get(node.index()).ok_or(SurfaceError::UnknownNode(node))
}

fn lookup_mut(nodes: &mut [NodeData], node: NodeId) -> Result<&mut NodeData, SurfaceError> {
    nodes
        .get_mut(node.index())
        .ok_or(SurfaceError::UnknownNode(node))
}

fn insert(nodes: &mut Vec<NodeData>, data: NodeData) -> NodeId {
    nodes.push(data);
    NodeId::new(nodes.len() - 1)
}

fn link(nodes: &mut [NodeData], parent: NodeId, child: NodeId) {
    if let Some(old_parent) = nodes[child.index()].parent.take() {
        nodes[old_parent.index()].children.retain(|c| *c != child);
    }
    nodes[parent.index()].children.push(child);
    nodes[child.index()].parent = Some(parent);
}

/// True when `ancestor` is `node` itself or one of its ancestors.
fn is_inclusive_ancestor(nodes: &[NodeData], ancestor: NodeId, node: NodeId) -> bool {
    let mut current = Some(node);
    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        current = nodes[id.index()].parent;
    }
    false
}

/// Pre-order descendants of `node`, excluding `node`.
fn descendants(nodes: &[NodeData], node: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = nodes[node.index()].children.iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        out.push(id);
        stack.extend(nodes[id.index()].children.iter().rev());
    }
    out
}

fn build(nodes: &mut Vec<NodeData>, markup: &Markup) -> NodeId {
    match markup {
        Markup::Text(content) => insert(nodes, NodeData::text(content)),
        Markup::Element {
            tag,
            attributes,
            children,
        } => {
            let mut data = NodeData::element(tag);
            data.attributes = attributes.clone();
            let id = insert(nodes, data);
            for child in children {
                let built = build(nodes, child);
                link(nodes, id, built);
            }
            id
        }
    }
}

fn collect_text(nodes: &[NodeData], node: NodeId, out: &mut String) {
    let data = &nodes[node.index()];
    if let NodeKind::Text(content) = &data.kind {
        out.push_str(content);
    }
    for child in &data.children {
        collect_text(nodes, *child, out);
    }
}

fn write_html(nodes: &[NodeData], node: NodeId, out: &mut String) {
    let data = &nodes[node.index()];
    let tag = match &data.kind {
        NodeKind::Text(content) => {
            out.push_str(&escape(content, false));
            return;
        }
        NodeKind::Element(tag) => tag,
    };

    out.push('<');
    out.push_str(tag);
    for attribute in &data.attributes {
        out.push_str(&format!(
            " {}=\"{}\"",
            attribute.name,
            escape(&attribute.value, true)
        ));
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&tag.as_str()) {
        return;
    }
    for child in &data.children {
        write_html(nodes, *child, out);
    }
    out.push_str(&format!("</{tag}>"));
}

fn escape(raw: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Default, PartialEq)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    fn parse(raw: &str) -> Self {
        let mut selector = Selector::default();
        let raw = raw.trim();

        let tag_end = raw.find(['.', '#']).unwrap_or(raw.len());
        if tag_end > 0 {
            selector.tag = Some(raw[..tag_end].to_ascii_lowercase());
        }

        let mut rest = &raw[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[marker.len_utf8()..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];
            if !name.is_empty() {
                match marker {
                    '#' => selector.id = Some(name.to_string()),
                    _ => selector.classes.push(name.to_string()),
                }
            }
            rest = &body[end..];
        }
        selector
    }

    fn matches(&self, node: &NodeData) -> bool {
        let Some(tag) = node.tag() else {
            return false;
        };
        if self.tag.as_deref().is_some_and(|wanted| wanted != tag) {
            return false;
        }
        if let Some(id) = &self.id {
            if node.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        let classes: Vec<&str> = node
            .attribute("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default();
        self.classes.iter().all(|wanted| classes.contains(&wanted.as_str()))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
