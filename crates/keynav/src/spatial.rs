//! Spatial Navigation
//!
//! Picks the next element to focus for a direction, from a snapshot of the
//! candidate index.
//!
//! A candidate is admissible when it starts past the focused element's
//! trailing edge (its left edge when moving right) and does not sit purely
//! in the focused element's perpendicular band. Candidates sharing the
//! focused element's band along the motion axis (the direct lane) always beat
//! off-lane ones. Within a pool the winner is chosen by position: the nearest
//! leading edge, then the upper/left-most one, then the shorter distance,
//! then document order.

use std::cmp::Ordering;
use std::fmt;

use keynav_geometry::{distance, within_x_axis, within_y_axis, Direction, Rect};

use crate::Candidate;

/// Spatial navigator over one snapshot
#[derive(Debug, Clone, Copy)]
pub struct SpatialNavigator<'a, K> {
    candidates: &'a [Candidate<K>],
}

/// Admissible candidate with its ranking data
#[derive(Debug)]
struct Scored<'a, K> {
    candidate: &'a Candidate<K>,
    in_lane: bool,
    distance: f64,
}

impl<K> Scored<'_, K> {
    fn beats(&self, other: &Self, direction: Direction) -> bool {
        if self.in_lane != other.in_lane {
            return self.in_lane;
        }
        position_order(direction, &self.candidate.rect, &other.candidate.rect)
            .then(self.distance.total_cmp(&other.distance))
            == Ordering::Less
    }
}

/// Candidate lies ahead of `focused` and is not stacked purely across the
/// motion axis.
fn admissible(direction: Direction, focused: &Rect, rect: &Rect) -> bool {
    match direction {
        Direction::Right => {
            (within_x_axis(focused, rect) || !within_y_axis(focused, rect))
                && rect.left > focused.left
        }
        Direction::Left => {
            (within_x_axis(focused, rect) || !within_y_axis(focused, rect))
                && rect.right < focused.right
        }
        Direction::Down => {
            (within_y_axis(focused, rect) || !within_x_axis(focused, rect))
                && rect.top > focused.top
        }
        Direction::Up => {
            (within_y_axis(focused, rect) || !within_x_axis(focused, rect))
                && rect.bottom < focused.bottom
        }
    }
}

/// Shares the focused element's row (horizontal moves) or column (vertical).
fn in_lane(direction: Direction, focused: &Rect, rect: &Rect) -> bool {
    if direction.is_horizontal() {
        within_x_axis(focused, rect)
    } else {
        within_y_axis(focused, rect)
    }
}

/// `Less` when `a` is positioned to win over `b`.
fn position_order(direction: Direction, a: &Rect, b: &Rect) -> Ordering {
    match direction {
        Direction::Right => a.left.total_cmp(&b.left).then(a.top.total_cmp(&b.top)),
        Direction::Left => b.right.total_cmp(&a.right).then(a.top.total_cmp(&b.top)),
        Direction::Down => a.top.total_cmp(&b.top).then(a.left.total_cmp(&b.left)),
        Direction::Up => b.bottom.total_cmp(&a.bottom).then(a.left.total_cmp(&b.left)),
    }
}

impl<'a, K: Copy + Eq + fmt::Debug> SpatialNavigator<'a, K> {
    pub fn new(candidates: &'a [Candidate<K>]) -> Self {
        Self { candidates }
    }

    /// First visible candidate in index order
    pub fn first(&self) -> Option<K> {
        self.candidates.iter().find(|c| c.visible).map(|c| c.handle)
    }

    fn find(&self, handle: K) -> Option<&'a Candidate<K>> {
        self.candidates.iter().find(|c| c.handle == handle)
    }

    /// Next element from `focused` towards `direction`.
    ///
    /// Without a focus this is `first`. When nothing is admissible the
    /// focused element is kept if it is still visible.
    pub fn next(&self, direction: Direction, focused: Option<&Candidate<K>>) -> Option<K> {
        let Some(focused) = focused else {
            return self.first();
        };

        let mut best: Option<Scored<'a, K>> = None;
        for candidate in self.candidates {
            if candidate.handle == focused.handle || !candidate.visible {
                continue;
            }
            if !admissible(direction, &focused.rect, &candidate.rect) {
                continue;
            }
            let scored = Scored {
                candidate,
                in_lane: in_lane(direction, &focused.rect, &candidate.rect),
                distance: distance(direction, &focused.rect, &candidate.rect),
            };
            if best.as_ref().is_none_or(|b| scored.beats(b, direction)) {
                best = Some(scored);
            }
        }

        match best {
            Some(best) => {
                tracing::trace!(
                    "{} from {:?}: {:?} (in lane: {}, distance: {:.1})",
                    direction,
                    focused.handle,
                    best.candidate.handle,
                    best.in_lane,
                    best.distance,
                );
                Some(best.candidate.handle)
            }
            None => focused.visible.then_some(focused.handle),
        }
    }

    /// Nearest of the four directional picks, by directional distance.
    pub fn closest(&self, focused: Option<&Candidate<K>>) -> Option<K> {
        let Some(focused) = focused else {
            return self.first();
        };

        let mut best: Option<(K, f64)> = None;
        for direction in Direction::ALL {
            let Some(handle) = self.next(direction, Some(focused)) else {
                continue;
            };
            if handle == focused.handle {
                continue;
            }
            let Some(target) = self.find(handle) else {
                continue;
            };
            let d = distance(direction, &focused.rect, &target.rect);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((handle, d));
            }
        }

        best.map(|(handle, _)| handle)
            .or_else(|| focused.visible.then_some(focused.handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(id: u32, x: f64, y: f64, w: f64, h: f64) -> Candidate<u32> {
        Candidate { handle: id, rect: Rect::from_xywh(x, y, w, h), visible: true }
    }

    fn hidden(mut candidate: Candidate<u32>) -> Candidate<u32> {
        candidate.visible = false;
        candidate
    }

    #[test]
    fn test_first_skips_invisible() {
        let all = [hidden(c(1, 0.0, 0.0, 10.0, 10.0)), c(2, 20.0, 0.0, 10.0, 10.0), c(3, 40.0, 0.0, 10.0, 10.0)];
        let nav = SpatialNavigator::new(&all);
        assert_eq!(nav.first(), Some(2));
        assert_eq!(nav.first(), Some(2));
        assert_eq!(nav.next(Direction::Right, None), Some(2));
    }

    #[test]
    fn test_empty_snapshot() {
        let nav = SpatialNavigator::<u32>::new(&[]);
        assert_eq!(nav.first(), None);
        assert_eq!(nav.next(Direction::Down, None), None);
        assert_eq!(nav.closest(None), None);
    }

    #[test]
    fn test_symmetry() {
        let all = [c(1, 0.0, 0.0, 10.0, 10.0), c(2, 20.0, 0.0, 10.0, 10.0)];
        let nav = SpatialNavigator::new(&all);
        assert_eq!(nav.next(Direction::Right, Some(&all[0])), Some(2));
        assert_eq!(nav.next(Direction::Left, Some(&all[1])), Some(1));

        let column = [c(1, 0.0, 0.0, 10.0, 10.0), c(2, 0.0, 20.0, 10.0, 10.0)];
        let nav = SpatialNavigator::new(&column);
        assert_eq!(nav.next(Direction::Down, Some(&column[0])), Some(2));
        assert_eq!(nav.next(Direction::Up, Some(&column[1])), Some(1));
    }

    #[test]
    fn test_stays_when_nothing_ahead() {
        let all = [c(1, 0.0, 0.0, 10.0, 10.0), c(2, 20.0, 0.0, 10.0, 10.0)];
        let nav = SpatialNavigator::new(&all);
        assert_eq!(nav.next(Direction::Right, Some(&all[1])), Some(2));
        assert_eq!(nav.next(Direction::Up, Some(&all[0])), Some(1));

        let gone = hidden(all[1]);
        assert_eq!(nav.next(Direction::Right, Some(&gone)), None);
    }

    #[test]
    fn test_direct_lane_beats_closer_off_lane() {
        let focused = c(1, 0.0, 0.0, 10.0, 10.0);
        let off_lane = c(2, 12.0, 20.0, 10.0, 10.0);
        let direct = c(3, 100.0, 0.0, 10.0, 10.0);

        let without = [focused, off_lane];
        assert_eq!(SpatialNavigator::new(&without).next(Direction::Right, Some(&focused)), Some(2));

        let with = [focused, off_lane, direct];
        assert_eq!(SpatialNavigator::new(&with).next(Direction::Right, Some(&focused)), Some(3));

        // Order in the index does not matter
        let reversed = [direct, off_lane, focused];
        assert_eq!(SpatialNavigator::new(&reversed).next(Direction::Right, Some(&focused)), Some(3));
    }

    #[test]
    fn test_same_column_is_not_a_horizontal_target() {
        // Below and sharing the column: only reachable vertically
        let focused = c(1, 0.0, 0.0, 20.0, 10.0);
        let below = c(2, 5.0, 30.0, 20.0, 10.0);
        let all = [focused, below];
        let nav = SpatialNavigator::new(&all);
        assert_eq!(nav.next(Direction::Right, Some(&focused)), Some(1));
        assert_eq!(nav.next(Direction::Down, Some(&focused)), Some(2));
    }

    #[test]
    fn test_partial_overlap_is_admissible() {
        // Starts right of focused.left but before focused.right
        let focused = c(1, 0.0, 0.0, 20.0, 10.0);
        let overlapping = c(2, 15.0, 0.0, 20.0, 10.0);
        let all = [focused, overlapping];
        let nav = SpatialNavigator::new(&all);
        assert_eq!(nav.next(Direction::Right, Some(&focused)), Some(2));
        assert_eq!(nav.next(Direction::Left, Some(&overlapping)), Some(1));
    }

    #[test]
    fn test_tie_break_by_position() {
        let focused = c(1, 0.0, 20.0, 10.0, 30.0);
        // Both in lane; the smaller left wins even though it is farther away
        let near_far_row = c(2, 30.0, 48.0, 10.0, 10.0);
        let far_near_row = c(3, 32.0, 30.0, 10.0, 10.0);
        let all = [focused, far_near_row, near_far_row];
        let nav = SpatialNavigator::new(&all);
        assert_eq!(nav.next(Direction::Right, Some(&focused)), Some(2));

        // Same left: the upper one wins
        let upper = c(4, 30.0, 20.0, 10.0, 10.0);
        let all = [focused, near_far_row, upper];
        let nav = SpatialNavigator::new(&all);
        assert_eq!(nav.next(Direction::Right, Some(&focused)), Some(4));
    }

    #[test]
    fn test_left_prefers_larger_right_edge() {
        let focused = c(1, 100.0, 0.0, 10.0, 10.0);
        let far = c(2, 0.0, 0.0, 10.0, 10.0);
        let near = c(3, 50.0, 0.0, 10.0, 10.0);
        let all = [focused, far, near];
        assert_eq!(SpatialNavigator::new(&all).next(Direction::Left, Some(&focused)), Some(3));
    }

    #[test]
    fn test_vertical_tie_break() {
        let focused = c(1, 20.0, 0.0, 10.0, 10.0);
        let right = c(2, 25.0, 30.0, 10.0, 10.0);
        let left = c(3, 15.0, 30.0, 10.0, 10.0);
        let all = [focused, right, left];
        let nav = SpatialNavigator::new(&all);
        assert_eq!(nav.next(Direction::Down, Some(&focused)), Some(3));

        let above = [c(1, 20.0, 50.0, 10.0, 10.0), c(2, 20.0, 0.0, 10.0, 10.0), c(3, 20.0, 20.0, 10.0, 10.0)];
        let nav = SpatialNavigator::new(&above);
        assert_eq!(nav.next(Direction::Up, Some(&above[0])), Some(3));
    }

    #[test]
    fn test_invisible_candidates_ignored() {
        let focused = c(1, 0.0, 0.0, 10.0, 10.0);
        let all = [focused, hidden(c(2, 20.0, 0.0, 10.0, 10.0)), c(3, 40.0, 0.0, 10.0, 10.0)];
        assert_eq!(SpatialNavigator::new(&all).next(Direction::Right, Some(&focused)), Some(3));
    }

    #[test]
    fn test_closest_picks_smallest_distance() {
        let focused = c(1, 50.0, 50.0, 10.0, 10.0);
        let right = c(2, 80.0, 50.0, 10.0, 10.0);
        let down = c(3, 50.0, 65.0, 10.0, 10.0);
        let all = [focused, right, down];
        assert_eq!(SpatialNavigator::new(&all).closest(Some(&focused)), Some(3));
    }

    #[test]
    fn test_closest_falls_back_to_focused() {
        let focused = c(1, 0.0, 0.0, 10.0, 10.0);
        let all = [focused];
        let nav = SpatialNavigator::new(&all);
        assert_eq!(nav.closest(Some(&focused)), Some(1));
        assert_eq!(nav.closest(Some(&hidden(focused))), None);
        assert_eq!(nav.closest(None), Some(1));
    }

    #[test]
    fn test_closest_from_hidden_focus() {
        let focused = hidden(c(1, 0.0, 0.0, 10.0, 10.0));
        let all = [focused, c(2, 20.0, 0.0, 10.0, 10.0)];
        assert_eq!(SpatialNavigator::new(&all).closest(Some(&focused)), Some(2));
    }
}
