//! Light/dark theme resolution and toggling.
//!
//! The stored preference wins over the platform's ambient color scheme; the
//! ambient signal is only consulted when nothing usable was stored. Exactly
//! one of the two themes is active at any time.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::action::{Action, Target};
use crate::consts::{DARK_CLASS, ICON_ATTR};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Pick the initial theme from a stored value and the ambient preference.
    ///
    /// `"dark"` selects dark, any other non-empty value selects light, and a
    /// missing or empty value defers to `prefers_dark`.
    #[must_use]
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved {
            Some("dark") => Self::Dark,
            Some(value) if !value.is_empty() => Self::Light,
            _ if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle: the theme you would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "moon",
            Self::Dark => "sun",
        }
    }

    /// Actions that make this theme visible: body class and toggle icon.
    #[must_use]
    pub fn render(self) -> Vec<Action> {
        vec![
            Action::SetClass { target: Target::Body, class: DARK_CLASS, on: self.is_dark() },
            Action::SetAttribute { target: Target::ThemeIcon, name: ICON_ATTR, value: self.icon().to_owned() },
            Action::RefreshIcons,
        ]
    }
}
