//! Axis Tests and Directional Distance
//!
//! `within_x_axis` means the two rects share a row (their vertical extents
//! overlap); `within_y_axis` means they share a column.

use crate::{Direction, Point, Rect};

/// Vertical extents overlap: `a` and `b` sit on a common horizontal band.
#[inline]
pub fn within_x_axis(a: &Rect, b: &Rect) -> bool {
    a.bottom > b.top && a.top < b.bottom
}

/// Horizontal extents overlap: `a` and `b` sit on a common vertical band.
#[inline]
pub fn within_y_axis(a: &Rect, b: &Rect) -> bool {
    a.right > b.left && a.left < b.right
}

/// Clamp `value` onto the span `[lo, hi]` the way edge-to-edge distance
/// expects: the near edge when the span lies past `value`, `value` itself
/// when the span straddles it, the far edge otherwise.
#[inline]
fn clamp_onto(value: f64, lo: f64, hi: f64) -> f64 {
    if lo < value {
        if hi > value { value } else { hi }
    } else {
        lo
    }
}

/// Edge-to-edge distance from `from` towards `to` when moving in `direction`.
///
/// The start point sits on the middle of the leading edge of `from`; the end
/// point sits on the facing edge of `to`, slid along that edge as close to
/// the start point as the edge allows.
pub fn distance(direction: Direction, from: &Rect, to: &Rect) -> f64 {
    let (start, end) = match direction {
        Direction::Down => {
            let start = Point::new(from.center_x(), from.bottom);
            let end = Point::new(clamp_onto(start.x, to.left, to.right), to.top);
            (start, end)
        }
        Direction::Up => {
            let start = Point::new(from.center_x(), from.top);
            let end = Point::new(clamp_onto(start.x, to.left, to.right), to.bottom);
            (start, end)
        }
        Direction::Right => {
            let start = Point::new(from.right, from.center_y());
            let end = Point::new(to.left, clamp_onto(start.y, to.top, to.bottom));
            (start, end)
        }
        Direction::Left => {
            let start = Point::new(from.left, from.center_y());
            let end = Point::new(to.right, clamp_onto(start.y, to.top, to.bottom));
            (start, end)
        }
    };
    start.distance_to(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_xywh(x, y, w, h)
    }

    #[test]
    fn test_within_axes() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let same_row = rect(50.0, 5.0, 10.0, 10.0);
        let same_column = rect(5.0, 50.0, 10.0, 10.0);

        assert!(within_x_axis(&a, &same_row));
        assert!(!within_y_axis(&a, &same_row));
        assert!(within_y_axis(&a, &same_column));
        assert!(!within_x_axis(&a, &same_column));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!within_x_axis(&a, &rect(20.0, 10.0, 10.0, 10.0)));
        assert!(!within_y_axis(&a, &rect(10.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_distance_down_straight() {
        // Start (5, 10); target straddles x=5 so the end point is (5, 30)
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(0.0, 30.0, 10.0, 10.0);
        assert_eq!(distance(Direction::Down, &a, &b), 20.0);
    }

    #[test]
    fn test_distance_down_clamps_to_near_edge() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Entirely right of start.x: end x is b.left
        let right = rect(8.0, 14.0, 10.0, 10.0);
        assert_eq!(distance(Direction::Down, &a, &right), 5.0);
        // Entirely left of start.x: end x is b.right
        let left = rect(-12.0, 14.0, 10.0, 10.0);
        assert_eq!(distance(Direction::Down, &a, &left), (49.0f64 + 16.0).sqrt());
    }

    #[test]
    fn test_distance_edge_alignment() {
        // b.left == start.x takes the b.left branch
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 20.0, 10.0, 10.0);
        assert_eq!(distance(Direction::Down, &a, &b), 10.0);
    }

    #[test]
    fn test_distance_up() {
        let a = rect(0.0, 50.0, 10.0, 10.0);
        let b = rect(0.0, 0.0, 10.0, 20.0);
        assert_eq!(distance(Direction::Up, &a, &b), 30.0);
    }

    #[test]
    fn test_distance_horizontal() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(30.0, 0.0, 10.0, 10.0);
        assert_eq!(distance(Direction::Right, &a, &b), 20.0);
        assert_eq!(distance(Direction::Left, &b, &a), 20.0);

        // Target below start.y: end y is b.top
        let low = rect(13.0, 9.0, 10.0, 10.0);
        assert_eq!(distance(Direction::Right, &a, &low), 5.0);
    }
}
