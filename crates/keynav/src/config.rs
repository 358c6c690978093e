//! Navigator Configuration

/// Where element placement comes from during navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlacementMode {
    /// Ask the host for every element's rect on each move.
    #[default]
    Live,
    /// Capture rects on refresh and reuse them until the next refresh.
    Cached,
}

/// Focus controller configuration options
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Start in the deactivated state
    pub start_deactivated: bool,

    /// Ignore key input; the embedder calls the move operations itself
    pub manual: bool,

    /// Placement source
    pub placement: PlacementMode,
}

impl NavConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deactivated(mut self) -> Self {
        self.start_deactivated = true;
        self
    }

    pub fn manual(mut self) -> Self {
        self.manual = true;
        self
    }

    pub fn with_placement(mut self, placement: PlacementMode) -> Self {
        self.placement = placement;
        self
    }
}
