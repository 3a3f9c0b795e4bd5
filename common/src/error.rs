use thiserror::Error;

use crate::dom::NodeId;

/// Failures raised by a host surface.
///
/// None of these are transient. They point at a misconfigured mount point or
/// a component using a handle it does not own.
#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("no element with id `{0}` is attached to the host surface")]
    MissingElement(String),

    #[error("node {0} does not belong to this host surface")]
    UnknownNode(NodeId),

    #[error("no descendant of node {node} matches `{selector}`")]
    NoMatch { node: NodeId, selector: String },

    #[error("node {child} cannot be appended under its own descendant {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

#[derive(Debug, Error, PartialEq)]
pub enum ShopError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("product `{title}` has an invalid price: {price}")]
    InvalidPrice { title: String, price: f64 },

    #[error("product source failed: {0}")]
    Source(String),

    #[error("the cart route was used before the application was initialized")]
    NotInitialized,

    #[error("the application has already been initialized")]
    AlreadyInitialized,
}
