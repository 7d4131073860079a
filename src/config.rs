//! Page tunables with optional overrides from `<body data-*>` attributes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    MENU_BREAKPOINT_PX, NAVBAR_SOLID_AFTER_PX, SUBMIT_DELAY_MS, THEME_STORAGE_KEY, TYPING_INTERVAL_MS,
    TYPING_START_DELAY_MS, TYPING_TEXT,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Storage key for the theme preference.
    pub theme_key: String,
    /// Width at which an open mobile menu closes itself.
    pub menu_breakpoint_px: f64,
    /// Scroll offset past which the navbar turns solid.
    pub navbar_threshold_px: f64,
    /// Caption revealed by the typing animation.
    pub typing_text: String,
    pub typing_start_delay_ms: u32,
    pub typing_interval_ms: u32,
    /// Latency of the simulated contact submission.
    pub submit_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_key: THEME_STORAGE_KEY.to_owned(),
            menu_breakpoint_px: MENU_BREAKPOINT_PX,
            navbar_threshold_px: NAVBAR_SOLID_AFTER_PX,
            typing_text: TYPING_TEXT.to_owned(),
            typing_start_delay_ms: TYPING_START_DELAY_MS,
            typing_interval_ms: TYPING_INTERVAL_MS,
            submit_delay_ms: SUBMIT_DELAY_MS,
        }
    }
}

impl PageConfig {
    /// Build config from a dataset lookup (camelCase keys, as `DOMStringMap`
    /// exposes them).
    ///
    /// Optional:
    /// - `themeKey` (`data-theme-key`): default `"theme"`
    /// - `menuBreakpoint` (`data-menu-breakpoint`): default 768
    /// - `navbarThreshold` (`data-navbar-threshold`): default 100
    /// - `typingText` (`data-typing-text`): default caption
    /// - `typingDelay` (`data-typing-delay`): default 1000
    /// - `typingInterval` (`data-typing-interval`): default 100
    /// - `submitDelay` (`data-submit-delay`): default 2000
    pub fn from_dataset(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            theme_key: non_empty(lookup("themeKey")).unwrap_or(defaults.theme_key),
            menu_breakpoint_px: dataset_px(&lookup, "menuBreakpoint", defaults.menu_breakpoint_px),
            navbar_threshold_px: dataset_px(&lookup, "navbarThreshold", defaults.navbar_threshold_px),
            typing_text: non_empty(lookup("typingText")).unwrap_or(defaults.typing_text),
            typing_start_delay_ms: dataset_parse(&lookup, "typingDelay", defaults.typing_start_delay_ms),
            typing_interval_ms: dataset_parse(&lookup, "typingInterval", defaults.typing_interval_ms),
            submit_delay_ms: dataset_parse(&lookup, "submitDelay", defaults.submit_delay_ms),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn dataset_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("ignoring unparsable data-{key} value {raw:?}");
            default
        }
    }
}

/// Like [`dataset_parse`], but `NaN` and infinities also fall back.
fn dataset_px(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> f64 {
    let value = dataset_parse(lookup, key, default);
    if value.is_finite() {
        value
    } else {
        log::warn!("ignoring non-finite data-{key} value {value}");
        default
    }
}
