//! keynav
//!
//! Directional keyboard navigation across focusable on-screen regions.
//! Arrow keys move a single logical focus to the nearest element in that
//! direction, without tab order or pointer input.
//!
//! Features:
//! - Spatial navigator with direct-lane preference and positional tie-breaks
//! - Focus controller state machine (activate, deactivate, move, click)
//! - Focus recovery after scene changes or scrolling
//! - Live or cached element placement
//! - Key bindings for arrow keys and Enter
//! - In-memory scene host for headless use and tests
//!
//! # Example
//! ```rust
//! use keynav::{FocusController, NavConfig, Scene};
//! use keynav::geometry::{Rect, Viewport};
//!
//! let mut scene = Scene::new(Viewport::new(800.0, 600.0));
//! let a = scene.add(Rect::from_xywh(0.0, 0.0, 100.0, 40.0));
//! let b = scene.add(Rect::from_xywh(120.0, 0.0, 100.0, 40.0));
//!
//! let mut nav = FocusController::new(scene, NavConfig::default());
//! assert_eq!(nav.focused(), Some(a));
//! nav.move_right();
//! assert_eq!(nav.focused(), Some(b));
//! ```

pub mod host;
pub mod config;
pub mod candidates;
pub mod spatial;
pub mod focus;
pub mod recovery;
pub mod keyboard_nav;
pub mod scene;

pub use host::Host;
pub use config::{NavConfig, PlacementMode};
pub use candidates::{CandidateIndex, Candidate};
pub use spatial::SpatialNavigator;
pub use focus::{FocusController, FocusState, ClickOutcome};
pub use keyboard_nav::{KeyMap, KeyInput, NavAction};
pub use scene::{Scene, SceneElement, ElementId, HostEvent};

pub use keynav_geometry as geometry;
pub use keynav_geometry::{Direction, ParseDirectionError};

/// Navigation boundary error
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error(transparent)]
    UnknownDirection(#[from] ParseDirectionError),

    #[error("unknown navigation action: {0:?}")]
    UnknownAction(String),
}
