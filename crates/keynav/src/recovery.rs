//! Focus Recovery
//!
//! Re-anchors focus after the scene changed under the controller.

use crate::{FocusController, FocusState, Host};

impl<H: Host> FocusController<H> {
    /// Repair focus: focus the first element when nothing is focused, or the
    /// closest substitute when the focused element is gone or off-screen.
    pub fn recover(&mut self) {
        match self.state() {
            FocusState::Deactivated => {}
            FocusState::ActivatedNoFocus => {
                self.focus_first();
            }
            FocusState::Focused(handle) => {
                if !self.is_focusable(handle) {
                    tracing::debug!("Focused element {:?} lost, recovering", handle);
                    self.move_closest();
                }
            }
        }
    }

    /// The host's scene changed (elements added, removed, moved, scrolled).
    pub fn on_structure_changed(&mut self) {
        self.refresh_list();
        self.recover();
    }
}
