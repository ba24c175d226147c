//! Login popup visibility state machine.
//!
//! The element's `display` property is the only storage for the state, so
//! the markup decides the initial state and nothing can drift out of sync
//! with what the user sees. Every `Open -> Closed` transition bumps a close
//! generation that in-flight login requests compare against.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::host::{ClickTarget, PopupView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Open,
    Closed,
}

pub struct Popup {
    view: Rc<dyn PopupView>,
    generation: Cell<u64>,
}

impl Popup {
    pub fn new(view: Rc<dyn PopupView>) -> Self {
        Self { view, generation: Cell::new(0) }
    }

    #[must_use]
    pub fn state(&self) -> PopupState {
        if self.view.is_visible() { PopupState::Open } else { PopupState::Closed }
    }

    /// Number of close transitions so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn open(&self) {
        if self.state() == PopupState::Closed {
            self.view.set_visible(true);
        }
    }

    /// Close the popup. Returns whether a transition happened.
    pub fn close(&self) -> bool {
        if self.state() == PopupState::Closed {
            return false;
        }
        self.view.set_visible(false);
        self.generation.set(self.generation.get() + 1);
        true
    }

    /// Page-wide click: only a click on the backdrop itself closes.
    pub fn on_click(&self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::Other => false,
        }
    }
}
