//! Host Platform Interface
//!
//! Everything the navigator needs from the embedding platform: the list of
//! focusable elements, their placement, and the side effects of focusing.

use std::fmt;

use keynav_geometry::{Rect, Viewport};

/// Embedding platform seen by the focus controller.
///
/// Side-effect hooks default to no-ops; a host only overrides what it can
/// actually do.
pub trait Host {
    /// Opaque element reference. Equality is identity.
    type Handle: Copy + Eq + fmt::Debug;

    /// Elements carrying the focusable marker, in document order.
    fn query_focusable(&self) -> Vec<Self::Handle>;

    /// Current bounding box, or `None` once the element left the scene.
    fn rect(&self, handle: Self::Handle) -> Option<Rect>;

    /// Current visible area.
    fn viewport(&self) -> Viewport;

    /// Whether the element currently shows at least one pixel.
    fn is_visible(&self, handle: Self::Handle) -> bool {
        self.rect(handle)
            .is_some_and(|rect| self.viewport().is_visible(&rect))
    }

    /// Mark the element as focused (e.g. a marker class).
    fn apply_focus_visual(&mut self, _handle: Self::Handle) {}

    /// Remove the focused marker.
    fn clear_focus_visual(&mut self, _handle: Self::Handle) {}

    fn native_focus(&mut self, _handle: Self::Handle) {}

    fn native_blur(&mut self, _handle: Self::Handle) {}

    /// Run the platform activation. Returns true if the element handled it.
    fn native_click(&mut self, _handle: Self::Handle) -> bool {
        false
    }

    /// Link target carried by the element, if any.
    fn link_target(&self, _handle: Self::Handle) -> Option<String> {
        None
    }

    /// Follow a link target.
    fn navigate(&mut self, _target: &str) {}

    /// Synthetic pointer enter/leave. Best effort.
    fn notify_hover(&mut self, _handle: Self::Handle, _entering: bool) {}
}
