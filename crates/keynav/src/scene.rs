//! In-Memory Scene
//!
//! A self-contained `Host` that keeps elements in a flat list with document
//! coordinates and a scroll offset. Side effects are recorded as
//! `HostEvent`s so embedders and tests can observe what the controller did.

use std::fmt;

use keynav_geometry::{Rect, Viewport};

use crate::Host;

/// Element identifier (index into the scene, stable across removals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element stored in a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    /// Placement in document coordinates
    pub rect: Rect,
    /// Carries the focusable marker
    pub focusable: bool,
    /// Hidden by the host regardless of placement
    pub hidden: bool,
    /// Has a native activation handler
    pub clickable: bool,
    pub link: Option<String>,
    pub label: Option<String>,
}

impl SceneElement {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            focusable: true,
            hidden: false,
            clickable: false,
            link: None,
            label: None,
        }
    }

    pub fn link(mut self, target: &str) -> Self {
        self.link = Some(target.to_string());
        self
    }

    pub fn clickable(mut self) -> Self {
        self.clickable = true;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn not_focusable(mut self) -> Self {
        self.focusable = false;
        self
    }
}

/// Side effect requested by the focus controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    MarkFocused(ElementId),
    UnmarkFocused(ElementId),
    Focus(ElementId),
    Blur(ElementId),
    Hover { id: ElementId, entering: bool },
    Click(ElementId),
    Navigate(String),
}

/// Flat in-memory scene
#[derive(Debug, Clone)]
pub struct Scene {
    viewport: Viewport,
    elements: Vec<(ElementId, SceneElement)>,
    next_id: u32,
    scroll_x: f64,
    scroll_y: f64,
    marked: Option<ElementId>,
    events: Vec<HostEvent>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
            next_id: 0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            marked: None,
            events: Vec::new(),
        }
    }

    /// Append a focusable element with the given placement
    pub fn add(&mut self, rect: Rect) -> ElementId {
        self.add_element(SceneElement::new(rect))
    }

    /// Append an element in document order
    pub fn add_element(&mut self, element: SceneElement) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.push((id, element));
        id
    }

    pub fn remove(&mut self, id: ElementId) -> Option<SceneElement> {
        let pos = self.elements.iter().position(|(eid, _)| *eid == id)?;
        if self.marked == Some(id) {
            self.marked = None;
        }
        Some(self.elements.remove(pos).1)
    }

    pub fn element(&self, id: ElementId) -> Option<&SceneElement> {
        self.elements.iter().find(|(eid, _)| *eid == id).map(|(_, el)| el)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut SceneElement> {
        self.elements.iter_mut().find(|(eid, _)| *eid == id).map(|(_, el)| el)
    }

    /// Hide or show an element without touching its placement
    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.hidden = hidden;
                true
            }
            None => false,
        }
    }

    /// Move an element to a new document placement
    pub fn set_rect(&mut self, id: ElementId, rect: Rect) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.rect = rect;
                true
            }
            None => false,
        }
    }

    /// Scroll the viewport by an offset
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.scroll_x += dx;
        self.scroll_y += dy;
    }

    /// Element currently carrying the focused marker
    pub fn marked(&self) -> Option<ElementId> {
        self.marked
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Take recorded events
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Host for Scene {
    type Handle = ElementId;

    fn query_focusable(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, el)| el.focusable)
            .map(|(id, _)| *id)
            .collect()
    }

    fn rect(&self, handle: ElementId) -> Option<Rect> {
        self.element(handle)
            .map(|el| el.rect.translate(-self.scroll_x, -self.scroll_y))
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn is_visible(&self, handle: ElementId) -> bool {
        match self.element(handle) {
            Some(el) if !el.hidden => {
                let rect = el.rect.translate(-self.scroll_x, -self.scroll_y);
                self.viewport.is_visible(&rect)
            }
            _ => false,
        }
    }

    fn apply_focus_visual(&mut self, handle: ElementId) {
        self.marked = Some(handle);
        self.events.push(HostEvent::MarkFocused(handle));
    }

    fn clear_focus_visual(&mut self, handle: ElementId) {
        if self.marked == Some(handle) {
            self.marked = None;
        }
        self.events.push(HostEvent::UnmarkFocused(handle));
    }

    fn native_focus(&mut self, handle: ElementId) {
        self.events.push(HostEvent::Focus(handle));
    }

    fn native_blur(&mut self, handle: ElementId) {
        self.events.push(HostEvent::Blur(handle));
    }

    fn native_click(&mut self, handle: ElementId) -> bool {
        let handled = self.element(handle).is_some_and(|el| el.clickable);
        if handled {
            self.events.push(HostEvent::Click(handle));
        }
        handled
    }

    fn link_target(&self, handle: ElementId) -> Option<String> {
        self.element(handle).and_then(|el| el.link.clone())
    }

    fn navigate(&mut self, target: &str) {
        self.events.push(HostEvent::Navigate(target.to_string()));
    }

    fn notify_hover(&mut self, handle: ElementId, entering: bool) {
        self.events.push(HostEvent::Hover { id: handle, entering });
    }
}
