#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn dataset(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_match_page_constants() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.theme_key, "theme");
    assert_eq!(cfg.menu_breakpoint_px, 768.0);
    assert_eq!(cfg.navbar_threshold_px, 100.0);
    assert_eq!(cfg.typing_text, "Aspiring AI/ML Engineer");
    assert_eq!(cfg.typing_start_delay_ms, 1000);
    assert_eq!(cfg.typing_interval_ms, 100);
    assert_eq!(cfg.submit_delay_ms, 2000);
}

#[test]
fn empty_dataset_yields_defaults() {
    assert_eq!(PageConfig::from_dataset(dataset(&[])), PageConfig::default());
}

#[test]
fn dataset_overrides_are_applied() {
    let cfg = PageConfig::from_dataset(dataset(&[
        ("themeKey", "site-theme"),
        ("menuBreakpoint", "1024"),
        ("navbarThreshold", " 60.5 "),
        ("typingText", "Systems Engineer"),
        ("typingDelay", "0"),
        ("typingInterval", "40"),
        ("submitDelay", "500"),
    ]));
    assert_eq!(cfg.theme_key, "site-theme");
    assert_eq!(cfg.menu_breakpoint_px, 1024.0);
    assert_eq!(cfg.navbar_threshold_px, 60.5);
    assert_eq!(cfg.typing_text, "Systems Engineer");
    assert_eq!(cfg.typing_start_delay_ms, 0);
    assert_eq!(cfg.typing_interval_ms, 40);
    assert_eq!(cfg.submit_delay_ms, 500);
}

#[test]
fn unparsable_numbers_fall_back_to_defaults() {
    let cfg = PageConfig::from_dataset(dataset(&[("menuBreakpoint", "wide"), ("submitDelay", "-5")]));
    assert_eq!(cfg.menu_breakpoint_px, 768.0);
    assert_eq!(cfg.submit_delay_ms, 2000);
}

#[test]
fn blank_strings_fall_back_to_defaults() {
    let cfg = PageConfig::from_dataset(dataset(&[("themeKey", "  "), ("typingText", "")]));
    assert_eq!(cfg.theme_key, "theme");
    assert_eq!(cfg.typing_text, "Aspiring AI/ML Engineer");
}

#[test]
fn non_finite_lengths_fall_back_to_defaults() {
    let cfg = PageConfig::from_dataset(dataset(&[("menuBreakpoint", "NaN"), ("navbarThreshold", "-inf")]));
    assert_eq!(cfg.menu_breakpoint_px, 768.0);
    assert_eq!(cfg.navbar_threshold_px, 100.0);
}

#[test]
fn nan_breakpoint_does_not_close_menu_on_narrow_resize() {
    let cfg = PageConfig::from_dataset(dataset(&[("menuBreakpoint", "nan")]));
    let mut page = crate::controller::PageCore::new(cfg);
    page.on_menu_button();
    page.on_resize(320.0);
    assert!(page.menu.is_open());
}
