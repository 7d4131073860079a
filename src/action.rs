//! DOM mutations produced by the page controller.
//!
//! Handlers on [`crate::controller::PageCore`] return `Vec<Action>` instead of
//! touching the document, so the full behavior can be exercised natively. The
//! browser host resolves each [`Target`] to the element it looked up at boot
//! and applies the action; targets that were absent are skipped.

/// A page element an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The `<body>` element.
    Body,
    /// The top navigation bar.
    Navbar,
    /// Icon inside the theme toggle.
    ThemeIcon,
    /// The mobile navigation panel.
    MobileMenu,
    /// Icon inside the mobile menu button.
    MenuIcon,
    /// First hero background layer.
    HeroFront,
    /// Second hero background layer.
    HeroBack,
    /// Hero subtitle receiving the typing caption.
    HeroSubtitle,
    /// Contact form submit button.
    SubmitButton,
    /// Idle label inside the submit button.
    SubmitLabel,
    /// Loading indicator inside the submit button.
    SubmitLoading,
    /// Entrance-animated block, by document order.
    Reveal(usize),
    /// Tilt card, by document order.
    Card(usize),
    /// Hover tag, by document order.
    Tag(usize),
}

/// A single DOM mutation for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add (`on`) or remove a class.
    SetClass { target: Target, class: &'static str, on: bool },
    /// Set an attribute value.
    SetAttribute { target: Target, name: &'static str, value: String },
    /// Set an inline style property.
    SetStyle { target: Target, property: &'static str, value: String },
    /// Replace text content.
    SetText { target: Target, text: String },
    /// Enable or disable a form control.
    SetDisabled { target: Target, disabled: bool },
    /// Smoothly scroll the element with this id to the top of the viewport.
    ScrollIntoView { id: String },
    /// Write a preference to durable storage.
    Persist { key: String, value: String },
    /// Re-render icon placeholders after a glyph change.
    RefreshIcons,
    /// Show a blocking notice to the user.
    Notify(String),
    /// Clear every field of the contact form.
    ResetForm,
    /// Stop watching a revealed block for intersections.
    Unobserve(Target),
}

impl Action {
    pub(crate) fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }
}

/// Format a CSS length or angle, without a negative zero.
#[must_use]
pub fn css_number(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{}", value + 0.0)
}
