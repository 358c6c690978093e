//! keynav Geometry
//!
//! Pure geometry helpers used by spatial navigation.
//!
//! - `Rect` / `Point` - axis-aligned placement snapshots
//! - `Viewport` - visibility test against the visible area
//! - `Direction` - the four navigation directions
//! - Axis-overlap tests and directional edge-to-edge distance

mod rect;
mod viewport;
mod direction;
mod axis;

pub use rect::{Rect, Point};
pub use viewport::Viewport;
pub use direction::{Direction, ParseDirectionError};
pub use axis::{within_x_axis, within_y_axis, distance};
