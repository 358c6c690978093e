//! Viewport
//!
//! The visible area of the host surface. Rect coordinates are relative to
//! its top-left corner, so only the size matters.

use crate::Rect;

/// Visible area, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// At least one pixel of `rect` lies inside the viewport.
    ///
    /// Zero-area rects are never visible, which also removes them from
    /// navigation.
    #[inline]
    pub fn is_visible(&self, rect: &Rect) -> bool {
        if rect.is_empty() {
            return false;
        }
        rect.right > 0.0
            && rect.bottom > 0.0
            && rect.left < self.width
            && rect.top < self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_inside() {
        let vp = Viewport::new(100.0, 100.0);
        assert!(vp.is_visible(&Rect::from_xywh(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_partially_visible() {
        let vp = Viewport::new(100.0, 100.0);
        let rect = Rect::from_xywh(-10.0, 90.0, 11.0, 50.0);
        assert!(vp.is_visible(&rect));
    }

    #[test]
    fn test_edges_are_exclusive() {
        let vp = Viewport::new(100.0, 100.0);
        // Touching the edge is not one pixel inside
        assert!(!vp.is_visible(&Rect::from_xywh(-10.0, 0.0, 10.0, 10.0)));
        assert!(!vp.is_visible(&Rect::from_xywh(0.0, -10.0, 10.0, 10.0)));
        assert!(!vp.is_visible(&Rect::from_xywh(100.0, 0.0, 10.0, 10.0)));
        assert!(!vp.is_visible(&Rect::from_xywh(0.0, 100.0, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_area_not_visible() {
        let vp = Viewport::new(100.0, 100.0);
        assert!(!vp.is_visible(&Rect::from_xywh(10.0, 10.0, 0.0, 0.0)));
    }
}
