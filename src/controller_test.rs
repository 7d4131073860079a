use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::action::Target;
use crate::error::PageError;

// =============================================================
// Helpers
// =============================================================

fn core() -> PageCore {
    PageCore::new(PageConfig::default())
}

fn persisted(actions: &[Action]) -> Option<&str> {
    actions.iter().find_map(|action| match action {
        Action::Persist { value, .. } => Some(value.as_str()),
        _ => None,
    })
}

fn body_dark(actions: &[Action]) -> Option<bool> {
    actions.iter().find_map(|action| match action {
        Action::SetClass { target: Target::Body, on, .. } => Some(*on),
        _ => None,
    })
}

fn menu_icon(actions: &[Action]) -> Option<&str> {
    actions.iter().find_map(|action| match action {
        Action::SetAttribute { target: Target::MenuIcon, value, .. } => Some(value.as_str()),
        _ => None,
    })
}

fn submit_disabled(actions: &[Action]) -> Option<bool> {
    actions.iter().find_map(|action| match action {
        Action::SetDisabled { target: Target::SubmitButton, disabled } => Some(*disabled),
        _ => None,
    })
}

fn filled_message() -> ContactMessage {
    ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello".into(),
        message: "Hi".into(),
    }
}

/// Transport that records what the host had applied when `send` ran.
struct RecordingTransport {
    log: Rc<RefCell<Vec<Action>>>,
    seen_disabled: RefCell<Option<bool>>,
    fail: bool,
}

impl ContactTransport for RecordingTransport {
    async fn send(&self, _message: &ContactMessage) -> Result<(), PageError> {
        *self.seen_disabled.borrow_mut() = submit_disabled(&self.log.borrow());
        if self.fail { Err(PageError::Submit("network down".into())) } else { Ok(()) }
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn init_theme_follows_ambient_without_saved_value() {
    let mut page = core();
    let actions = page.init_theme(None, true);
    assert_eq!(page.theme, Theme::Dark);
    assert_eq!(body_dark(&actions), Some(true));

    let mut page = core();
    page.init_theme(None, false);
    assert_eq!(page.theme, Theme::Light);
}

#[test]
fn init_theme_saved_value_wins() {
    let mut page = core();
    page.init_theme(Some("light"), true);
    assert_eq!(page.theme, Theme::Light);

    let mut page = core();
    page.init_theme(Some("dark"), false);
    assert_eq!(page.theme, Theme::Dark);
}

#[test]
fn init_theme_does_not_persist() {
    let mut page = core();
    assert_eq!(persisted(&page.init_theme(None, true)), None);
}

#[test]
fn toggle_theme_persists_under_configured_key() {
    let mut page = core();
    page.init_theme(None, false);
    let actions = page.toggle_theme();
    assert!(actions.contains(&Action::Persist { key: "theme".into(), value: "dark".into() }));
    assert_eq!(body_dark(&actions), Some(true));
}

#[test]
fn toggle_theme_twice_restores_original() {
    for start in [Theme::Light, Theme::Dark] {
        let mut page = core();
        page.init_theme(Some(start.as_str()), false);
        page.toggle_theme();
        let actions = page.toggle_theme();
        assert_eq!(page.theme, start);
        assert_eq!(persisted(&actions), Some(start.as_str()));
        assert_eq!(body_dark(&actions), Some(start.is_dark()));
    }
}

#[test]
fn toggle_theme_reshades_navbar_after_scrolling() {
    let mut page = core();
    page.init_theme(None, false);
    assert!(!page.toggle_theme().iter().any(|a| matches!(a, Action::SetStyle { target: Target::Navbar, .. })));

    page.on_scroll(300.0);
    let actions = page.toggle_theme();
    assert!(actions.contains(&Action::SetStyle {
        target: Target::Navbar,
        property: "background",
        value: "rgba(255, 255, 255, 0.95)".into(),
    }));
}

// =============================================================
// Menu
// =============================================================

#[test]
fn outside_click_closes_open_menu() {
    let mut page = core();
    page.on_menu_button();
    assert!(page.menu.is_open());
    let actions = page.on_document_click(ClickTarget::default());
    assert!(!page.menu.is_open());
    assert_eq!(menu_icon(&actions), Some("menu"));
}

#[test]
fn clicks_inside_menu_or_button_keep_it_open() {
    let mut page = core();
    page.on_menu_button();
    assert!(page.on_document_click(ClickTarget { in_menu: true, in_menu_button: false }).is_empty());
    assert!(page.on_document_click(ClickTarget { in_menu: false, in_menu_button: true }).is_empty());
    assert!(page.menu.is_open());
}

#[test]
fn resize_past_breakpoint_closes_menu() {
    let mut page = core();
    page.on_menu_button();
    assert!(page.on_resize(767.0).is_empty());
    assert!(page.menu.is_open());
    page.on_resize(768.0);
    assert!(!page.menu.is_open());
}

#[test]
fn resize_with_closed_menu_does_nothing() {
    let mut page = core();
    assert!(page.on_resize(1200.0).is_empty());
}

#[test]
fn nav_link_scrolls_then_closes() {
    let mut page = core();
    page.on_menu_button();
    let actions = page.on_nav_link("#projects");
    assert_eq!(actions.first(), Some(&Action::ScrollIntoView { id: "projects".into() }));
    assert_eq!(menu_icon(&actions), Some("menu"));
    assert!(!page.menu.is_open());
}

#[test]
fn nav_link_with_closed_menu_only_scrolls() {
    let mut page = core();
    assert_eq!(page.on_nav_link("#about"), vec![Action::ScrollIntoView { id: "about".into() }]);
}

#[test]
fn scroll_to_section_by_id_scrolls_then_closes() {
    let mut page = core();
    page.on_menu_button();
    let actions = page.scroll_to_section("projects");
    assert_eq!(actions.first(), Some(&Action::ScrollIntoView { id: "projects".into() }));
    assert_eq!(menu_icon(&actions), Some("menu"));
    assert!(!page.menu.is_open());
}

#[test]
fn scroll_to_section_with_empty_id_only_closes_menu() {
    let mut page = core();
    page.on_menu_button();
    let actions = page.scroll_to_section("");
    assert!(!actions.iter().any(|a| matches!(a, Action::ScrollIntoView { .. })));
    assert!(!page.menu.is_open());
}

#[test]
fn fragment_id_rejects_empty_and_external() {
    assert_eq!(fragment_id("#contact"), Some("contact"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("https://example.com"), None);
}

// =============================================================
// Scroll / reveal
// =============================================================

#[test]
fn on_scroll_emits_navbar_and_parallax() {
    let mut page = core();
    let actions = page.on_scroll(50.0);
    assert!(actions.iter().any(|a| matches!(a, Action::SetStyle { target: Target::Navbar, .. })));
    assert!(actions.contains(&Action::SetStyle {
        target: Target::HeroFront,
        property: "transform",
        value: "translateY(-25px)".into(),
    }));
    assert!(actions.contains(&Action::SetStyle {
        target: Target::HeroBack,
        property: "transform",
        value: "translateY(-15px)".into(),
    }));
}

#[test]
fn on_scroll_skips_parallax_without_both_layers() {
    let mut page = core();
    page.parallax = false;
    let actions = page.on_scroll(50.0);
    assert!(actions.iter().any(|a| matches!(a, Action::SetStyle { target: Target::Navbar, .. })));
    assert!(!actions.iter().any(|a| matches!(a, Action::SetStyle { target: Target::HeroFront | Target::HeroBack, .. })));
}

#[test]
fn revealed_block_stays_visible() {
    let mut page = core();
    page.prepare_reveals(2);
    assert!(!page.on_reveal(0, true).is_empty());
    assert!(page.on_reveal(0, false).is_empty());
    assert!(page.reveal.is_revealed(0));
}

#[test]
fn typewriter_uses_configured_caption() {
    let page = PageCore::new(PageConfig { typing_text: "Rustacean".into(), ..PageConfig::default() });
    let mut typer = page.typewriter();
    while typer.advance().is_some() {}
    assert!(typer.is_done());
}

// =============================================================
// Contact submission
// =============================================================

#[test]
fn submit_disables_during_send_and_restores_after() {
    let cell = RefCell::new(core());
    let log = Rc::new(RefCell::new(Vec::new()));
    let transport = RecordingTransport { log: Rc::clone(&log), seen_disabled: RefCell::new(None), fail: false };

    let ran = block_on(submit_contact(&cell, &transport, filled_message(), |actions| {
        log.borrow_mut().extend_from_slice(actions);
    }));

    assert!(ran);
    assert_eq!(*transport.seen_disabled.borrow(), Some(true));
    let applied = log.borrow();
    let notify = applied.iter().position(|a| matches!(a, Action::Notify(_))).unwrap();
    let reset = applied.iter().position(|a| *a == Action::ResetForm).unwrap();
    let enabled = applied
        .iter()
        .rposition(|a| *a == Action::SetDisabled { target: Target::SubmitButton, disabled: false })
        .unwrap();
    assert!(notify < reset);
    assert!(reset < enabled);
    assert!(!cell.borrow().contact.in_flight());
}

#[test]
fn failed_submit_still_restores_button() {
    let cell = RefCell::new(core());
    let log = Rc::new(RefCell::new(Vec::new()));
    let transport = RecordingTransport { log: Rc::clone(&log), seen_disabled: RefCell::new(None), fail: true };

    block_on(submit_contact(&cell, &transport, filled_message(), |actions| {
        log.borrow_mut().extend_from_slice(actions);
    }));

    let applied = log.borrow();
    assert!(applied.contains(&Action::Notify(crate::consts::SUBMIT_FAILURE_NOTICE.into())));
    assert!(!applied.contains(&Action::ResetForm));
    assert_eq!(applied.last(), Some(&Action::style(Target::SubmitLoading, "display", "none")));
    assert!(!cell.borrow().contact.in_flight());
}

#[test]
fn submit_while_in_flight_is_ignored() {
    let cell = RefCell::new(core());
    cell.borrow_mut().contact.begin();
    let transport =
        RecordingTransport { log: Rc::new(RefCell::new(Vec::new())), seen_disabled: RefCell::new(None), fail: false };

    let mut applied = 0;
    let ran = block_on(submit_contact(&cell, &transport, filled_message(), |_| applied += 1));

    assert!(!ran);
    assert_eq!(applied, 0);
    assert_eq!(*transport.seen_disabled.borrow(), None);
}
