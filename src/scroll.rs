//! Scroll-driven effects: entrance reveals, navbar shading, hero parallax.
//!
//! Navbar and parallax output is a pure function of the current scroll offset
//! (and theme), so handlers can run on every scroll event without throttling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::action::{Action, Target, css_number};
use crate::consts::{PARALLAX_RATE_BACK, PARALLAX_RATE_FRONT, REVEAL_OFFSET_PX, REVEAL_TRANSITION};
use crate::theme::Theme;

// =============================================================
// Navbar
// =============================================================

/// Navbar background for a scroll offset; solid once past `threshold_px`.
#[must_use]
pub fn navbar_style(scroll_y: f64, threshold_px: f64, theme: Theme) -> Vec<Action> {
    let solid = scroll_y > threshold_px;
    let background = match (theme, solid) {
        (Theme::Dark, true) => "rgba(17, 24, 39, 0.95)",
        (Theme::Dark, false) => "rgba(17, 24, 39, 0.8)",
        (Theme::Light, true) => "rgba(255, 255, 255, 0.95)",
        (Theme::Light, false) => "rgba(255, 255, 255, 0.8)",
    };
    let blur = if solid { "blur(20px)" } else { "blur(12px)" };
    vec![
        Action::style(Target::Navbar, "background", background),
        Action::style(Target::Navbar, "backdrop-filter", blur),
    ]
}

// =============================================================
// Parallax
// =============================================================

/// Translate both hero layers at their fixed fractions of the scroll offset.
#[must_use]
pub fn parallax(scroll_y: f64) -> Vec<Action> {
    vec![
        Action::style(Target::HeroFront, "transform", translate_y(scroll_y * PARALLAX_RATE_FRONT)),
        Action::style(Target::HeroBack, "transform", translate_y(scroll_y * PARALLAX_RATE_BACK)),
    ]
}

fn translate_y(px: f64) -> String {
    format!("translateY({}px)", css_number(px))
}

// =============================================================
// Entrance reveals
// =============================================================

/// One-shot reveal bookkeeping for the entrance-animated blocks.
///
/// Once a block has been revealed it never returns to the hidden style.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Hide `count` blocks and start tracking them.
    pub fn prepare(&mut self, count: usize) -> Vec<Action> {
        self.revealed = vec![false; count];
        (0..count)
            .flat_map(|i| {
                let target = Target::Reveal(i);
                [
                    Action::style(target, "opacity", "0"),
                    Action::style(target, "transform", translate_y(REVEAL_OFFSET_PX)),
                    Action::style(target, "transition", REVEAL_TRANSITION),
                ]
            })
            .collect()
    }

    /// An intersection update for block `index`.
    ///
    /// Only the first intersecting update produces actions; later updates,
    /// including the block leaving the viewport, are ignored.
    pub fn on_intersect(&mut self, index: usize, intersecting: bool) -> Vec<Action> {
        if !intersecting {
            return Vec::new();
        }
        let Some(done) = self.revealed.get_mut(index) else {
            return Vec::new();
        };
        if *done {
            return Vec::new();
        }
        *done = true;
        let target = Target::Reveal(index);
        vec![
            Action::style(target, "opacity", "1"),
            Action::style(target, "transform", "translateY(0)"),
            Action::Unobserve(target),
        ]
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
