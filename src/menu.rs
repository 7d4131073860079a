//! Mobile navigation menu: a two-state machine.
//!
//! The panel visibility and the button glyph are always emitted together, so
//! the menu can never be open while showing the closed-state icon.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::action::{Action, Target};
use crate::consts::{ICON_ATTR, MENU_ACTIVE_CLASS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Why the menu is being closed; only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    OutsideClick,
    Resize,
    NavLink,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Glyph on the menu button for this state.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Closed => "menu",
            Self::Open => "x",
        }
    }

    /// Menu button click: flip between open and closed.
    pub fn toggle(&mut self) -> Vec<Action> {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
        log::debug!("mobile menu {:?}", self);
        self.render()
    }

    /// Close if open; a closed menu stays closed and emits nothing.
    pub fn close(&mut self, reason: CloseReason) -> Vec<Action> {
        if !self.is_open() {
            return Vec::new();
        }
        *self = Self::Closed;
        log::debug!("mobile menu closed ({reason:?})");
        self.render()
    }

    fn render(self) -> Vec<Action> {
        vec![
            Action::SetClass { target: Target::MobileMenu, class: MENU_ACTIVE_CLASS, on: self.is_open() },
            Action::SetAttribute { target: Target::MenuIcon, name: ICON_ATTR, value: self.icon().to_owned() },
            Action::RefreshIcons,
        ]
    }
}
