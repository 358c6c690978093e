//! Focus Management
//!
//! The focus controller owns the single focused element and the activation
//! flag, applies enter/exit side effects through the host, and exposes the
//! move/click operations.

use keynav_geometry::Direction;

use crate::{Candidate, CandidateIndex, Host, KeyInput, KeyMap, NavAction, NavConfig, SpatialNavigator};

/// Focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState<K> {
    Deactivated,
    ActivatedNoFocus,
    Focused(K),
}

/// What `click` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Deactivated, nothing focused, or nothing to activate
    Ignored,
    /// The host ran its own activation
    Native,
    /// The host was asked to follow the element's link target
    Navigated(String),
}

/// Focus controller
#[derive(Debug)]
pub struct FocusController<H: Host> {
    host: H,
    config: NavConfig,
    candidates: CandidateIndex<H::Handle>,
    state: FocusState<H::Handle>,
    keymap: KeyMap,
}

impl<H: Host> FocusController<H> {
    /// Build a controller and focus the first element (unless configured to
    /// start deactivated).
    pub fn new(host: H, config: NavConfig) -> Self {
        Self::build(host, config, None)
    }

    /// Build a controller focusing `initial` if it can take focus, the first
    /// element otherwise.
    pub fn with_initial_focus(host: H, config: NavConfig, initial: H::Handle) -> Self {
        Self::build(host, config, Some(initial))
    }

    fn build(host: H, config: NavConfig, initial: Option<H::Handle>) -> Self {
        let mut candidates = CandidateIndex::new(config.placement);
        candidates.refresh(&host);
        let state = if config.start_deactivated {
            FocusState::Deactivated
        } else {
            FocusState::ActivatedNoFocus
        };

        let mut controller = Self {
            host,
            config,
            candidates,
            state,
            keymap: KeyMap::new(),
        };
        let focused = initial.is_some_and(|handle| controller.focus(handle));
        if !focused {
            controller.focus_first();
        }
        controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host. Call `on_structure_changed` afterwards if
    /// the scene changed.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn state(&self) -> FocusState<H::Handle> {
        self.state
    }

    pub fn candidates(&self) -> &CandidateIndex<H::Handle> {
        &self.candidates
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    /// Enable navigation and focus the first element.
    pub fn activate(&mut self) {
        if self.state == FocusState::Deactivated {
            self.state = FocusState::ActivatedNoFocus;
            tracing::debug!("Navigation activated");
        }
        self.focus_first();
    }

    /// Drop any focus and ignore further moves until `activate`.
    pub fn deactivate(&mut self) {
        self.remove_focus();
        self.state = FocusState::Deactivated;
        tracing::debug!("Navigation deactivated");
    }

    pub fn is_activated(&self) -> bool {
        self.state != FocusState::Deactivated
    }

    pub fn focused(&self) -> Option<H::Handle> {
        match self.state {
            FocusState::Focused(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn is_focused(&self, handle: H::Handle) -> bool {
        self.focused() == Some(handle)
    }

    /// Indexed and currently visible
    pub fn is_focusable(&self, handle: H::Handle) -> bool {
        self.placement(handle).is_some_and(|c| c.visible)
    }

    fn placement(&self, handle: H::Handle) -> Option<Candidate<H::Handle>> {
        self.candidates.candidate(&self.host, handle)
    }

    /// Focus `handle`. Returns whether it is focused afterwards.
    ///
    /// Refocusing the current element does nothing. Otherwise the current
    /// focus is released first, so a rejected element leaves nothing focused.
    pub fn focus(&mut self, handle: H::Handle) -> bool {
        match self.state {
            FocusState::Deactivated => return false,
            FocusState::Focused(current) if current == handle && self.is_focusable(handle) => {
                return true;
            }
            _ => {}
        }

        self.remove_focus();
        if !self.is_focusable(handle) {
            tracing::debug!("Ignoring focus on {:?}: not focusable", handle);
            return false;
        }

        self.state = FocusState::Focused(handle);
        self.host.apply_focus_visual(handle);
        self.host.native_focus(handle);
        self.host.notify_hover(handle, true);
        tracing::debug!("Focused {:?}", handle);
        true
    }

    /// Release the current focus, keeping the activation state.
    pub fn remove_focus(&mut self) {
        let FocusState::Focused(handle) = self.state else {
            return;
        };
        self.host.clear_focus_visual(handle);
        self.host.native_blur(handle);
        self.host.notify_hover(handle, false);
        self.state = FocusState::ActivatedNoFocus;
        tracing::debug!("Released focus on {:?}", handle);
    }

    /// Focus the first visible element in index order.
    pub fn focus_first(&mut self) -> bool {
        if !self.is_activated() {
            return false;
        }
        let snapshot = self.candidates.snapshot(&self.host);
        match SpatialNavigator::new(&snapshot).first() {
            Some(first) => self.focus(first),
            None => {
                self.remove_focus();
                false
            }
        }
    }

    /// Move focus towards `direction`. Returns the focused element afterwards.
    pub fn move_direction(&mut self, direction: Direction) -> Option<H::Handle> {
        self.move_with(|nav, focused| nav.next(direction, Some(focused)))
    }

    pub fn move_left(&mut self) -> Option<H::Handle> {
        self.move_direction(Direction::Left)
    }

    pub fn move_right(&mut self) -> Option<H::Handle> {
        self.move_direction(Direction::Right)
    }

    pub fn move_up(&mut self) -> Option<H::Handle> {
        self.move_direction(Direction::Up)
    }

    pub fn move_down(&mut self) -> Option<H::Handle> {
        self.move_direction(Direction::Down)
    }

    /// Move focus to the nearest element in any direction.
    pub fn move_closest(&mut self) -> Option<H::Handle> {
        self.move_with(|nav, focused| nav.closest(Some(focused)))
    }

    fn move_with<F>(&mut self, pick: F) -> Option<H::Handle>
    where
        F: FnOnce(&SpatialNavigator<'_, H::Handle>, &Candidate<H::Handle>) -> Option<H::Handle>,
    {
        let FocusState::Focused(current) = self.state else {
            self.focus_first();
            return self.focused();
        };

        let snapshot = self.candidates.snapshot(&self.host);
        let next = self
            .placement(current)
            .and_then(|focused| pick(&SpatialNavigator::new(&snapshot), &focused));
        match next {
            Some(next) => {
                self.focus(next);
            }
            None => {
                self.focus_first();
            }
        }
        self.focused()
    }

    /// Activate the focused element: natively if the host handles it,
    /// otherwise by following its link target.
    ///
    /// A focused element that can no longer hold focus is not activated;
    /// focus is recovered instead.
    pub fn click(&mut self) -> ClickOutcome {
        let FocusState::Focused(handle) = self.state else {
            return ClickOutcome::Ignored;
        };
        if !self.is_focusable(handle) {
            self.recover();
            return ClickOutcome::Ignored;
        }
        if self.host.native_click(handle) {
            return ClickOutcome::Native;
        }
        match self.host.link_target(handle) {
            Some(target) => {
                tracing::debug!("Following link target of {:?}: {}", handle, target);
                self.host.navigate(&target);
                ClickOutcome::Navigated(target)
            }
            None => ClickOutcome::Ignored,
        }
    }

    /// Pointer entered an element: focus follows the pointer.
    pub fn pointer_enter(&mut self, handle: H::Handle) -> bool {
        if !self.is_activated() || !self.is_focusable(handle) {
            return false;
        }
        self.focus(handle)
    }

    /// Re-query the host's focusable elements. Focus is left untouched.
    pub fn refresh_list(&mut self) {
        self.candidates.refresh(&self.host);
    }

    /// Run a navigation action
    pub fn perform(&mut self, action: NavAction) {
        if let Some(direction) = action.direction() {
            self.move_direction(direction);
            return;
        }
        match action {
            NavAction::MoveClosest => {
                self.move_closest();
            }
            NavAction::Activate => {
                self.click();
            }
            _ => {}
        }
    }

    /// Dispatch a key press through the key map. Manual controllers ignore
    /// keys entirely.
    pub fn handle_key(&mut self, key: &KeyInput) -> Option<NavAction> {
        if self.config.manual {
            return None;
        }
        let action = self.keymap.action_for(key)?;
        tracing::trace!("Key {} -> {}", key.display(), action);
        self.perform(action);
        Some(action)
    }
}
