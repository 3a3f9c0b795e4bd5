use std::rc::Rc;

use shopfront_common::dom::{Markup, NodeId};
use shopfront_common::error::{ShopError, SurfaceError};

/// Callback attached to an interaction event on a node.
pub type EventHandler = Rc<dyn Fn() -> Result<(), ShopError>>;

/// The mutable document tree components render into.
///
/// Every method takes `&self`: a surface is shared by all components of a
/// shop and handles its own interior mutability.
pub trait HostSurface {
    /// Creates a detached element of the given kind.
    fn create_element(&self, tag: &str) -> NodeId;

    /// Looks up an element attached to the document by its `id` attribute.
    ///
    /// # Errors
    /// * [`SurfaceError::MissingElement`] - No attached element carries `id`.
    fn element_by_id(&self, id: &str) -> Result<NodeId, SurfaceError>;

    /// Appends `child` as the last child of `parent`, moving it if it already has a parent.
    fn append(&self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError>;

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) -> Result<(), SurfaceError>;

    /// Returns the first descendant of `node`, in document order, matching `selector`.
    ///
    /// # Errors
    /// * [`SurfaceError::NoMatch`] - Nothing under `node` matches.
    fn query_selector(&self, node: NodeId, selector: &str) -> Result<NodeId, SurfaceError>;

    fn add_event_listener(
        &self,
        node: NodeId,
        event: &str,
        handler: EventHandler,
    ) -> Result<(), SurfaceError>;

    /// Replaces every child of `node` with nodes built from `markup`.
    fn set_inner_markup(&self, node: NodeId, markup: &[Markup]) -> Result<(), SurfaceError>;
}
