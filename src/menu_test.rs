use super::*;

fn panel_visible(actions: &[Action]) -> Option<bool> {
    actions.iter().find_map(|action| match action {
        Action::SetClass { target: Target::MobileMenu, on, .. } => Some(*on),
        _ => None,
    })
}

fn icon(actions: &[Action]) -> Option<&str> {
    actions.iter().find_map(|action| match action {
        Action::SetAttribute { target: Target::MenuIcon, value, .. } => Some(value.as_str()),
        _ => None,
    })
}

#[test]
fn default_is_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let mut menu = MenuState::Closed;

    let opened = menu.toggle();
    assert!(menu.is_open());
    assert_eq!(panel_visible(&opened), Some(true));
    assert_eq!(icon(&opened), Some("x"));

    let closed = menu.toggle();
    assert!(!menu.is_open());
    assert_eq!(panel_visible(&closed), Some(false));
    assert_eq!(icon(&closed), Some("menu"));
}

#[test]
fn close_from_open_emits_closed_render() {
    for reason in [CloseReason::OutsideClick, CloseReason::Resize, CloseReason::NavLink] {
        let mut menu = MenuState::Open;
        let actions = menu.close(reason);
        assert_eq!(menu, MenuState::Closed);
        assert_eq!(panel_visible(&actions), Some(false));
        assert_eq!(icon(&actions), Some("menu"));
    }
}

#[test]
fn close_when_already_closed_is_a_noop() {
    let mut menu = MenuState::Closed;
    assert!(menu.close(CloseReason::OutsideClick).is_empty());
    assert_eq!(menu, MenuState::Closed);
}

#[test]
fn icon_always_matches_state() {
    let mut menu = MenuState::Closed;
    for _ in 0..5 {
        let actions = menu.toggle();
        assert_eq!(icon(&actions), Some(menu.icon()));
        assert_eq!(panel_visible(&actions), Some(menu.is_open()));
    }
}
