//! Hover/pin state machine for text annotation popups.
//!
//! A text annotation shows its note in a popup. Hovering the icon shows the
//! popup for as long as the pointer stays on it; clicking the icon pins it
//! open (or unpins and hides it); clicking the popup itself always dismisses
//! it. While visible, the annotation container is raised one step in the
//! stacking order so the popup is drawn above neighbouring annotations.
//!
//! ```text
//!             enter                     click
//!   Hidden ─────────────▶ Visible ─────────────▶ Pinned
//!     ▲  ◀─────────────────┘                       │
//!     │        leave                               │
//!     └────────────── click / content click ───────┘
//! ```

use serde::Serialize;

/// Visibility state of a popup. `Pinned` implies visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PopupState {
    /// Hidden and not pinned
    #[default]
    Hidden,
    /// Shown because the pointer is over the icon
    Visible,
    /// Shown until explicitly dismissed
    Pinned,
}

impl PopupState {
    /// Whether the popup is shown.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether the popup is pinned open.
    pub fn is_pinned(&self) -> bool {
        matches!(self, Self::Pinned)
    }
}

/// Operations a pointer listener can trigger on a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PopupAction {
    /// Show without pinning (pointer entered the icon)
    Show,
    /// Hide unless pinned (pointer left the icon)
    Hide,
    /// Pin and show, or unpin and hide (icon clicked)
    Toggle,
    /// Unpin and hide (popup body clicked)
    Dismiss,
}

/// A state change made by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State before the operation
    pub from: PopupState,
    /// State after the operation
    pub to: PopupState,
    /// Stacking order change: `+1` when the popup became visible, `-1` when
    /// it became hidden, `0` otherwise
    pub stacking_delta: i32,
}

impl Transition {
    /// Whether visibility changed.
    pub fn visibility_changed(&self) -> bool {
        self.stacking_delta != 0
    }
}

/// Owns one popup's state and its container's stacking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupController {
    state: PopupState,
    z_index: i32,
}

impl Default for PopupController {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PopupController {
    /// Create a hidden, unpinned popup whose container starts at `base_z_index`.
    pub fn new(base_z_index: i32) -> Self {
        Self {
            state: PopupState::Hidden,
            z_index: base_z_index,
        }
    }

    /// Current state.
    pub fn state(&self) -> PopupState {
        self.state
    }

    /// Whether the popup is shown.
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Whether the popup is pinned.
    pub fn is_pinned(&self) -> bool {
        self.state.is_pinned()
    }

    /// Current stacking order of the container.
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Pointer entered the icon.
    pub fn pointer_enter(&mut self) -> Option<Transition> {
        self.show(false)
    }

    /// Pointer left the icon.
    pub fn pointer_leave(&mut self) -> Option<Transition> {
        self.hide(false)
    }

    /// Icon clicked.
    pub fn click(&mut self) -> Option<Transition> {
        if self.state.is_pinned() {
            self.hide(true)
        } else {
            self.show(true)
        }
    }

    /// Popup body clicked.
    pub fn content_click(&mut self) -> Option<Transition> {
        self.hide(true)
    }

    /// Run the operation a listener is bound to.
    pub fn apply(&mut self, action: PopupAction) -> Option<Transition> {
        match action {
            PopupAction::Show => self.pointer_enter(),
            PopupAction::Hide => self.pointer_leave(),
            PopupAction::Toggle => self.click(),
            PopupAction::Dismiss => self.content_click(),
        }
    }

    fn show(&mut self, pin: bool) -> Option<Transition> {
        let from = self.state;
        let delta = if from.is_visible() { 0 } else { 1 };
        let to = if pin || from.is_pinned() {
            PopupState::Pinned
        } else {
            PopupState::Visible
        };
        self.commit(from, to, delta)
    }

    fn hide(&mut self, unpin: bool) -> Option<Transition> {
        let from = self.state;
        if from.is_pinned() && !unpin {
            return None;
        }
        let delta = if from.is_visible() { -1 } else { 0 };
        self.commit(from, PopupState::Hidden, delta)
    }

    fn commit(&mut self, from: PopupState, to: PopupState, delta: i32) -> Option<Transition> {
        if from == to {
            return None;
        }
        self.state = to;
        self.z_index += delta;
        log::debug!("Popup {:?} -> {:?} (z-index {})", from, to, self.z_index);
        Some(Transition {
            from,
            to,
            stacking_delta: delta,
        })
    }
}
