use std::cell::Cell;
use std::ops::Deref;
use std::rc::Rc;

use shopfront_common::dom::{ElementAttribute, NodeId};
use shopfront_common::error::{ShopError, SurfaceError};
use tracing::debug;

use crate::ports::outbound::host_surface::HostSurface;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Mount while the component is being constructed.
    #[default]
    Immediate,
    /// Leave mounting to the constructor, after its own fields are settled.
    Deferred,
}

/// The part every component shares: where it mounts, and what it created there.
///
/// A unit refers to its mount point by identifier only. It never owns the
/// surface's tree, and it defines no teardown: its nodes live as long as the
/// surrounding subtree does.
pub struct RenderUnit {
    hook_id: String,
    surface: Rc<dyn HostSurface>,
    root: Cell<Option<NodeId>>,
}

impl RenderUnit {
    pub fn new(hook_id: impl Into<String>, surface: Rc<dyn HostSurface>) -> Self {
        Self {
            hook_id: hook_id.into(),
            surface,
            root: Cell::new(None),
        }
    }

    pub fn hook_id(&self) -> &str {
        &self.hook_id
    }

    pub fn surface(&self) -> &Rc<dyn HostSurface> {
        &self.surface
    }

    /// The element created by the last [`RenderUnit::create_root_element`] call.
    pub fn root(&self) -> Option<NodeId> {
        self.root.get()
    }

    /// Creates a `tag` element, applies classes and attributes, and appends it
    /// under the mount point.
    ///
    /// # Errors
    /// * [`SurfaceError::MissingElement`] - The mount point is not in the surface.
    ///   Nothing is created and no fallback element is substituted.
    pub fn create_root_element(
        &self,
        tag: &str,
        css_classes: Option<&str>,
        attributes: &[ElementAttribute],
    ) -> Result<NodeId, SurfaceError> {
        let mount = self.surface.element_by_id(&self.hook_id)?;
        let element = self.surface.create_element(tag);

        if let Some(classes) = css_classes.filter(|c| !c.is_empty()) {
            self.surface.set_attribute(element, "class", classes)?;
        }
        for attribute in attributes {
            self.surface
                .set_attribute(element, &attribute.name, &attribute.value)?;
        }

        self.surface.append(mount, element)?;
        self.root.set(Some(element));
        debug!(mount = %self.hook_id, tag, %element, "attached root element");
        Ok(element)
    }
}

/// A component that can materialize itself into a host surface.
pub trait Renderable {
    fn unit(&self) -> &RenderUnit;

    /// Renders the component's fragment under its mount point.
    fn mount(&self) -> Result<(), ShopError>;

    fn root(&self) -> Option<NodeId> {
        self.unit().root()
    }
}

/// Finishes constructing a component, mounting it right away in
/// [`RenderMode::Immediate`].
///
/// After an immediate construction returns `Ok`, the component's fragment is
/// already attached to the surface.
pub fn construct<R>(component: R, mode: RenderMode) -> Result<R, ShopError>
where
    R: Deref,
    R::Target: Renderable,
{
    if mode == RenderMode::Immediate {
        component.mount()?;
    }
    Ok(component)
}
