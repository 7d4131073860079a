//! Page controller state and event handlers.
//!
//! `PageCore` owns the theme, the menu state, reveal bookkeeping and the
//! contact form lock. Every handler returns the [`Action`]s the browser host
//! must apply. Separated from the host so it can be tested without a browser.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use crate::action::Action;
use crate::config::PageConfig;
use crate::contact::{ContactForm, ContactMessage, ContactTransport};
use crate::effects::Typewriter;
use crate::menu::{CloseReason, MenuState};
use crate::scroll::{self, RevealTracker};
use crate::theme::Theme;

/// Where a document-level click landed relative to the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// The click landed inside the mobile menu panel.
    pub in_menu: bool,
    /// The click landed on (or inside) the menu button.
    pub in_menu_button: bool,
}

#[derive(Debug)]
pub struct PageCore {
    pub config: PageConfig,
    pub theme: Theme,
    pub menu: MenuState,
    pub reveal: RevealTracker,
    pub contact: ContactForm,
    /// Hero parallax runs only when both background layers exist.
    pub parallax: bool,
    /// Last scroll offset seen, once any scroll event arrived.
    scroll_y: Option<f64>,
}

impl Default for PageCore {
    fn default() -> Self {
        Self {
            config: PageConfig::default(),
            theme: Theme::default(),
            menu: MenuState::default(),
            reveal: RevealTracker::default(),
            contact: ContactForm::default(),
            parallax: true,
            scroll_y: None,
        }
    }
}

impl PageCore {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Theme ---

    /// Resolve the starting theme and render it.
    pub fn init_theme(&mut self, saved: Option<&str>, prefers_dark: bool) -> Vec<Action> {
        self.theme = Theme::resolve(saved, prefers_dark);
        log::debug!("initial theme {:?} (saved {saved:?}, prefers dark {prefers_dark})", self.theme);
        self.theme.render()
    }

    /// Theme toggle click: flip, persist, re-render.
    pub fn toggle_theme(&mut self) -> Vec<Action> {
        self.theme = self.theme.toggled();
        log::info!("theme switched to {}", self.theme.as_str());
        let mut actions = self.theme.render();
        actions.push(Action::Persist { key: self.config.theme_key.clone(), value: self.theme.as_str().to_owned() });
        if let Some(y) = self.scroll_y {
            actions.extend(scroll::navbar_style(y, self.config.navbar_threshold_px, self.theme));
        }
        actions
    }

    // --- Menu ---

    pub fn on_menu_button(&mut self) -> Vec<Action> {
        self.menu.toggle()
    }

    /// Any click on the document; closes the menu when it landed outside it.
    pub fn on_document_click(&mut self, click: ClickTarget) -> Vec<Action> {
        if click.in_menu || click.in_menu_button {
            return Vec::new();
        }
        self.menu.close(CloseReason::OutsideClick)
    }

    pub fn on_resize(&mut self, viewport_width: f64) -> Vec<Action> {
        if viewport_width < self.config.menu_breakpoint_px {
            return Vec::new();
        }
        self.menu.close(CloseReason::Resize)
    }

    /// In-page link click: scroll to the fragment target, then close the menu.
    pub fn on_nav_link(&mut self, href: &str) -> Vec<Action> {
        self.scroll_to_section(fragment_id(href).unwrap_or_default())
    }

    /// Scroll to the section with element id `id`, then close the menu.
    /// An empty id only closes the menu.
    pub fn scroll_to_section(&mut self, id: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        if !id.is_empty() {
            actions.push(Action::ScrollIntoView { id: id.to_owned() });
        }
        actions.extend(self.menu.close(CloseReason::NavLink));
        actions
    }

    // --- Scroll ---

    pub fn prepare_reveals(&mut self, count: usize) -> Vec<Action> {
        self.reveal.prepare(count)
    }

    pub fn on_reveal(&mut self, index: usize, intersecting: bool) -> Vec<Action> {
        self.reveal.on_intersect(index, intersecting)
    }

    /// Scroll event: navbar shading and hero parallax for offset `y`.
    pub fn on_scroll(&mut self, y: f64) -> Vec<Action> {
        self.scroll_y = Some(y);
        let mut actions = scroll::navbar_style(y, self.config.navbar_threshold_px, self.theme);
        if self.parallax {
            actions.extend(scroll::parallax(y));
        }
        actions
    }

    // --- Effects ---

    #[must_use]
    pub fn typewriter(&self) -> Typewriter {
        Typewriter::new(self.config.typing_text.clone())
    }
}

/// Run one contact submission end to end.
///
/// The core is only borrowed around the synchronous steps, never across the
/// transport await, so other handlers keep running while the request is in
/// flight. Returns `false` if a submission was already running.
pub async fn submit_contact<T: ContactTransport>(
    core: &RefCell<PageCore>,
    transport: &T,
    message: ContactMessage,
    mut apply: impl FnMut(&[Action]),
) -> bool {
    let Some(actions) = core.borrow_mut().contact.begin() else {
        return false;
    };
    apply(&actions);

    let outcome = transport.send(&message).await;

    let actions = core.borrow_mut().contact.finish(&outcome);
    apply(&actions);
    true
}

/// The element id an in-page `href` points at, if any.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
