//! Decorative effects: card tilt, tag hover, typing caption, page fade-in.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::action::{Action, Target, css_number};
use crate::consts::{FADE_IN_TRANSITION, TAG_HOVER, TAG_REST, TILT_DIVISOR, TILT_NEUTRAL, TILT_PERSPECTIVE_PX, TILT_SCALE};

// =============================================================
// Card tilt
// =============================================================

/// Pointer position relative to a card's bounding box, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPointer {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CardPointer {
    /// Rotation about the X and Y axes, in degrees.
    #[must_use]
    pub fn angles(self) -> (f64, f64) {
        let rotate_x = (self.y - self.height / 2.0) / TILT_DIVISOR;
        let rotate_y = (self.width / 2.0 - self.x) / TILT_DIVISOR;
        (rotate_x, rotate_y)
    }
}

/// Transform string for a card under the pointer.
#[must_use]
pub fn tilt_transform(pointer: CardPointer) -> String {
    let (rotate_x, rotate_y) = pointer.angles();
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
        css_number(TILT_PERSPECTIVE_PX),
        css_number(rotate_x),
        css_number(rotate_y),
        s = css_number(TILT_SCALE),
    )
}

#[must_use]
pub fn tilt(index: usize, pointer: CardPointer) -> Action {
    Action::style(Target::Card(index), "transform", tilt_transform(pointer))
}

/// Pointer left the card: back to the exact neutral transform.
#[must_use]
pub fn untilt(index: usize) -> Action {
    Action::style(Target::Card(index), "transform", TILT_NEUTRAL)
}

// =============================================================
// Tag hover
// =============================================================

#[must_use]
pub fn tag_hover(index: usize, hovering: bool) -> Action {
    let transform = if hovering { TAG_HOVER } else { TAG_REST };
    Action::style(Target::Tag(index), "transform", transform)
}

// =============================================================
// Typing caption
// =============================================================

/// Reveals a caption one character at a time.
///
/// Runs once: after the last character, [`Typewriter::advance`] keeps
/// returning `None`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), shown: 0 }
    }

    /// Clears the caption before typing starts.
    #[must_use]
    pub fn start(&self) -> Action {
        Action::SetText { target: Target::HeroSubtitle, text: String::new() }
    }

    /// Reveal the next character; `None` once the caption is complete.
    pub fn advance(&mut self) -> Option<Action> {
        let rest = &self.text[self.shown..];
        let next = rest.chars().next()?;
        self.shown += next.len_utf8();
        Some(Action::SetText { target: Target::HeroSubtitle, text: self.text[..self.shown].to_owned() })
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown == self.text.len()
    }
}

// =============================================================
// Page fade-in
// =============================================================

/// On load: make the page transparent and arm the opacity transition.
#[must_use]
pub fn fade_in_start() -> Vec<Action> {
    vec![
        Action::style(Target::Body, "opacity", "0"),
        Action::style(Target::Body, "transition", FADE_IN_TRANSITION),
    ]
}

/// After the fade-in delay: fully opaque.
#[must_use]
pub fn fade_in_finish() -> Action {
    Action::style(Target::Body, "opacity", "1")
}
