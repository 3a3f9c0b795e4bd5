//! # Host Document Values
//!
//! Types that cross the boundary between components and the host surface.
//!
//! * [`NodeId`]: an opaque handle to a node owned by a host surface.
//! * [`ElementAttribute`]: a name/value pair applied to an element.
//! * [`Markup`]: a typed fragment, the structured stand-in for raw HTML text.

use std::fmt;

/// Handle to a node living inside a host surface.
///
/// A handle is only meaningful for the surface that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementAttribute {
    pub name: String,
    pub value: String,
}

impl ElementAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A fragment of content a component writes into a node.
///
/// Built with a small chaining API:
///
/// ```rust
/// use shopfront_common::dom::Markup;
///
/// let card = Markup::element("div")
///     .class("product-item__content")
///     .child(Markup::element("h2").child(Markup::text("A Product 1")))
///     .child(Markup::element("button").child(Markup::text("Add to Cart")));
/// assert_eq!(card.tag(), Some("div"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Element {
        tag: String,
        attributes: Vec<ElementAttribute>,
        children: Vec<Markup>,
    },
    Text(String),
}

impl Markup {
    pub fn element(tag: impl Into<String>) -> Self {
        Markup::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Markup::Text(content.into())
    }

    /// Sets an attribute, replacing an earlier value with the same name.
    /// Has no effect on text.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Markup::Element { attributes, .. } = &mut self {
            let attribute = ElementAttribute::new(name, value);
            match attributes.iter_mut().find(|a| a.name == attribute.name) {
                Some(existing) => existing.value = attribute.value,
                None => attributes.push(attribute),
            }
        }
        self
    }

    pub fn class(self, classes: impl Into<String>) -> Self {
        self.attr("class", classes)
    }

    /// Appends a child. Has no effect on text.
    pub fn child(mut self, child: Markup) -> Self {
        if let Markup::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = Markup>) -> Self {
        children.into_iter().fold(self, Markup::child)
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Markup::Element { tag, .. } => Some(tag),
            Markup::Text(_) => None,
        }
    }
}
