//! Candidate Index
//!
//! The ordered list of focusable elements as last reported by the host.

use std::fmt;

use keynav_geometry::Rect;

use crate::{Host, PlacementMode};

/// An indexed element with its placement at snapshot time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<K> {
    pub handle: K,
    pub rect: Rect,
    pub visible: bool,
}

/// Focusable elements in document order
#[derive(Debug, Clone)]
pub struct CandidateIndex<K> {
    handles: Vec<K>,
    mode: PlacementMode,
    // Only filled in `PlacementMode::Cached`, parallel to `handles`
    cached: Vec<Option<Rect>>,
}

impl<K: Copy + Eq + fmt::Debug> CandidateIndex<K> {
    /// Create an empty index. Call `refresh` to fill it.
    pub fn new(mode: PlacementMode) -> Self {
        Self {
            handles: Vec::new(),
            mode,
            cached: Vec::new(),
        }
    }

    /// Re-run the host query, replacing the previous contents.
    pub fn refresh<H: Host<Handle = K>>(&mut self, host: &H) {
        self.handles = host.query_focusable();
        self.cached = match self.mode {
            PlacementMode::Live => Vec::new(),
            PlacementMode::Cached => self.handles.iter().map(|&h| host.rect(h)).collect(),
        };
        tracing::debug!("Candidate index refreshed: {} elements", self.handles.len());
    }

    pub fn handles(&self) -> &[K] {
        &self.handles
    }

    pub fn contains(&self, handle: K) -> bool {
        self.handles.contains(&handle)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    fn position(&self, handle: K) -> Option<usize> {
        self.handles.iter().position(|&h| h == handle)
    }

    /// Placement and visibility of a single element.
    ///
    /// Elements outside the index keep their placement but are reported as
    /// not visible, so they can anchor a move without being a target.
    /// Cached placements are only visible while the host still shows the
    /// element.
    /// Returns `None` when the element has no known placement.
    pub fn candidate<H: Host<Handle = K>>(&self, host: &H, handle: K) -> Option<Candidate<K>> {
        match (self.mode, self.position(handle)) {
            (PlacementMode::Cached, Some(pos)) => {
                let rect = self.cached.get(pos).copied().flatten()?;
                Some(Candidate {
                    handle,
                    rect,
                    visible: host.viewport().is_visible(&rect) && host.is_visible(handle),
                })
            }
            (_, pos) => {
                let rect = host.rect(handle)?;
                Some(Candidate {
                    handle,
                    rect,
                    visible: pos.is_some() && host.is_visible(handle),
                })
            }
        }
    }

    /// Every indexed element with a known placement, in index order.
    pub fn snapshot<H: Host<Handle = K>>(&self, host: &H) -> Vec<Candidate<K>> {
        match self.mode {
            PlacementMode::Live => self
                .handles
                .iter()
                .filter_map(|&handle| {
                    let rect = host.rect(handle)?;
                    Some(Candidate {
                        handle,
                        rect,
                        visible: host.is_visible(handle),
                    })
                })
                .collect(),
            PlacementMode::Cached => {
                let viewport = host.viewport();
                self.handles
                    .iter()
                    .zip(&self.cached)
                    .filter_map(|(&handle, rect)| {
                        let rect = (*rect)?;
                        Some(Candidate {
                            handle,
                            rect,
                            visible: viewport.is_visible(&rect) && host.is_visible(handle),
                        })
                    })
                    .collect()
            }
        }
    }
}
