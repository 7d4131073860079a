//! Page controller for the static portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser once the
//! page markup has loaded. It owns the small amount of interactive state the
//! page has (the light/dark theme and the mobile menu) and drives every
//! decorative effect: entrance reveals, navbar shading, hero parallax, card
//! tilt, tag hover, the typing caption, and the load fade-in. The contact form
//! is intercepted and handed to a [`contact::ContactTransport`].
//!
//! All behavior lives in [`controller::PageCore`], which turns input events
//! into [`action::Action`] lists and never touches the DOM. The `hydrate`
//! feature adds the browser host that resolves elements, applies actions,
//! and wires listeners.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Testable [`controller::PageCore`] and its event handlers |
//! | [`action`] | DOM mutation descriptions and element targets |
//! | [`theme`] | Light/dark theme resolution and toggling |
//! | [`menu`] | Mobile navigation open/closed state machine |
//! | [`scroll`] | Entrance reveals, navbar shading, parallax |
//! | [`effects`] | Tilt, tag hover, typing caption, fade-in |
//! | [`contact`] | Contact form submission flow |
//! | [`config`] | Tunables with `data-*` overrides |
//! | [`consts`] | Shared numeric and string constants |
//! | [`error`] | Crate error type |

pub mod action;
pub mod config;
pub mod consts;
pub mod contact;
pub mod controller;
pub mod effects;
pub mod error;
pub mod menu;
pub mod scroll;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod page;

/// WASM entry point: install logging and the page controller.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    page::boot();
}
