//! Listener wiring for the page controller.
//!
//! ARCHITECTURE
//! ============
//! `boot` waits for the document structure, then builds one [`Dom`] host and
//! one [`PageCore`] and registers every listener against them. Listeners live
//! as long as the page, so their closures are leaked with `forget`. Each
//! listener borrows the core only while computing actions, never while the
//! host applies them or while a timer is pending.

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, MouseEvent, Node, Window};

use crate::action::Action;
use crate::config::PageConfig;
use crate::consts::{FADE_IN_DELAY_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::contact::{ContactMessage, SimulatedTransport};
use crate::controller::{ClickTarget, PageCore, submit_contact};
use crate::dom::Dom;
use crate::effects::{self, CardPointer};
use crate::error::PageError;

type Core = Rc<RefCell<PageCore>>;

thread_local! {
    /// Host and core of the installed controller, for exported entry points.
    static INSTALLED: OnceCell<(Rc<Dom>, Core)> = const { OnceCell::new() };
}

/// Install the controller once the document structure is ready.
pub fn boot() {
    let Some(window) = web_sys::window() else {
        log::warn!("no window; page controller not installed");
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("no document; page controller not installed");
        return;
    };

    let state = document.ready_state();
    // The load event has already fired on a complete document.
    let fade = state != "complete";
    if state == "loading" {
        let (win, doc) = (window.clone(), document.clone());
        listen::<Event>(&document, "DOMContentLoaded", move |_| install(win.clone(), doc.clone(), fade));
    } else {
        install(window, document, fade);
    }
}

fn install(window: Window, document: Document, fade: bool) {
    let dom = Rc::new(Dom::new(window, document));
    let mut config = PageConfig::from_dataset(|key| dom.body_data(key));
    if let Some(caption) = dom.subtitle_caption() {
        config.typing_text = caption;
    }
    let mut page = PageCore::new(config);
    page.parallax = dom.elements.hero_front.is_some() && dom.elements.hero_back.is_some();
    let core: Core = Rc::new(RefCell::new(page));

    dom.apply_all(&[Action::RefreshIcons]);
    let saved = dom.saved_preference(&core.borrow().config.theme_key);
    let actions = core.borrow_mut().init_theme(saved.as_deref(), dom.prefers_dark());
    dom.apply_all(&actions);

    wire_theme_toggle(&dom, &core);
    wire_menu(&dom, &core);
    wire_nav_links(&dom, &core);
    wire_contact_form(&dom, &core);
    wire_reveals(&dom, &core);
    wire_scroll(&dom, &core);
    wire_hover_effects(&dom);
    start_typing(&dom, &core);
    if fade {
        wire_fade_in(&dom);
    }
    INSTALLED.with(|installed| {
        if installed.set((Rc::clone(&dom), Rc::clone(&core))).is_err() {
            log::warn!("page controller installed twice; scrollToSection keeps the first");
        }
    });
    log::info!("page controller installed");
}

/// `scrollToSection(id)` for inline handlers in the page markup.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) {
    INSTALLED.with(|installed| match installed.get() {
        Some((dom, core)) => dispatch(dom, core, |page| page.scroll_to_section(id)),
        None => log::warn!("scrollToSection({id}) before the page controller was installed"),
    });
}

// =============================================================================
// LISTENERS
// =============================================================================

/// Register a page-lifetime listener, casting the event to `E`.
fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let name = event.to_owned();
    let cb = Closure::wrap(Box::new(move |raw: Event| match raw.dyn_into::<E>() {
        Ok(event) => handler(event),
        Err(_) => log::warn!("unexpected event type for {name}"),
    }) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("could not listen for {event}: {}", PageError::from(err));
    }
    cb.forget();
}

/// Run a core handler and apply what it returns.
fn dispatch(dom: &Dom, core: &Core, handler: impl FnOnce(&mut PageCore) -> Vec<Action>) {
    let actions = handler(&mut *core.borrow_mut());
    dom.apply_all(&actions);
}

fn wire_theme_toggle(dom: &Rc<Dom>, core: &Core) {
    let Some(toggle) = &dom.elements.theme_toggle else {
        return;
    };
    let (dom_cb, core_cb) = (Rc::clone(dom), Rc::clone(core));
    listen::<Event>(toggle, "click", move |_| dispatch(&dom_cb, &core_cb, PageCore::toggle_theme));
}

fn wire_menu(dom: &Rc<Dom>, core: &Core) {
    if let Some(button) = &dom.elements.menu_button {
        let (dom_cb, core_cb) = (Rc::clone(dom), Rc::clone(core));
        listen::<Event>(button, "click", move |_| dispatch(&dom_cb, &core_cb, PageCore::on_menu_button));
    }

    let (dom_cb, core_cb) = (Rc::clone(dom), Rc::clone(core));
    listen::<MouseEvent>(&dom.document, "click", move |event| {
        let node = event_node(&event);
        let click = ClickTarget {
            in_menu: Dom::contains(dom_cb.elements.mobile_menu.as_ref(), node.as_ref()),
            in_menu_button: Dom::contains(dom_cb.elements.menu_button.as_ref(), node.as_ref()),
        };
        dispatch(&dom_cb, &core_cb, |page| page.on_document_click(click));
    });

    let (dom_cb, core_cb) = (Rc::clone(dom), Rc::clone(core));
    listen::<Event>(&dom.window, "resize", move |_| {
        if let Some(width) = dom_cb.viewport_width() {
            dispatch(&dom_cb, &core_cb, |page| page.on_resize(width));
        }
    });
}

fn event_node(event: &Event) -> Option<Node> {
    let target = event.target()?;
    match target.dyn_into::<Node>() {
        Ok(node) => Some(node),
        Err(_) => None,
    }
}

fn wire_nav_links(dom: &Rc<Dom>, core: &Core) {
    for link in &dom.elements.nav_links {
        let (dom_cb, core_cb, link_cb) = (Rc::clone(dom), Rc::clone(core), link.clone());
        listen::<MouseEvent>(link, "click", move |event| {
            event.prevent_default();
            let href = link_cb.get_attribute("href").unwrap_or_default();
            dispatch(&dom_cb, &core_cb, |page| page.on_nav_link(&href));
        });
    }
}

fn wire_contact_form(dom: &Rc<Dom>, core: &Core) {
    let Some(form) = &dom.elements.contact_form else {
        return;
    };
    let (dom_cb, core_cb) = (Rc::clone(dom), Rc::clone(core));
    listen::<Event>(form, "submit", move |event| {
        event.prevent_default();
        let data = dom_cb.form_data();
        let message = ContactMessage::from_fields(|field| data.as_ref().and_then(|d| d.get(field).as_string()));
        let transport = SimulatedTransport { delay_ms: core_cb.borrow().config.submit_delay_ms };
        let (dom_task, core_task) = (Rc::clone(&dom_cb), Rc::clone(&core_cb));
        wasm_bindgen_futures::spawn_local(async move {
            let apply = |actions: &[Action]| dom_task.apply_all(actions);
            submit_contact(&core_task, &transport, message, apply).await;
        });
    });
}

fn wire_reveals(dom: &Rc<Dom>, core: &Core) {
    if dom.elements.reveals.is_empty() {
        return;
    }
    let (dom_cb, core_cb) = (Rc::clone(dom), Rc::clone(core));
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target: Node = entry.target().into();
            let Some(index) = dom_cb.elements.reveals.iter().position(|el| el.is_same_node(Some(&target))) else {
                continue;
            };
            let intersecting = entry.is_intersecting();
            dispatch(&dom_cb, &core_cb, |page| page.on_reveal(index, intersecting));
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&REVEAL_THRESHOLD.into());
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            // Blocks are only hidden once an observer exists to reveal them.
            log::warn!("entrance animations disabled: {}", PageError::from(err));
            return;
        }
    };
    cb.forget();

    let count = dom.elements.reveals.len();
    dispatch(dom, core, |page| page.prepare_reveals(count));
    for el in &dom.elements.reveals {
        observer.observe(el);
    }
    dom.set_observer(observer);
}

fn wire_scroll(dom: &Rc<Dom>, core: &Core) {
    let (dom_cb, core_cb) = (Rc::clone(dom), Rc::clone(core));
    listen::<Event>(&dom.window, "scroll", move |_| {
        let y = dom_cb.scroll_y();
        dispatch(&dom_cb, &core_cb, |page| page.on_scroll(y));
    });
}

fn wire_hover_effects(dom: &Rc<Dom>) {
    for (index, tag) in dom.elements.tags.iter().enumerate() {
        let dom_cb = Rc::clone(dom);
        listen::<Event>(tag, "mouseenter", move |_| dom_cb.apply_all(&[effects::tag_hover(index, true)]));
        let dom_cb = Rc::clone(dom);
        listen::<Event>(tag, "mouseleave", move |_| dom_cb.apply_all(&[effects::tag_hover(index, false)]));
    }

    for (index, card) in dom.elements.cards.iter().enumerate() {
        let (dom_cb, card_cb) = (Rc::clone(dom), card.clone());
        listen::<MouseEvent>(card, "mousemove", move |event| {
            let rect = card_cb.get_bounding_client_rect();
            let pointer = CardPointer {
                x: f64::from(event.client_x()) - rect.left(),
                y: f64::from(event.client_y()) - rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            dom_cb.apply_all(&[effects::tilt(index, pointer)]);
        });
        let dom_cb = Rc::clone(dom);
        listen::<Event>(card, "mouseleave", move |_| dom_cb.apply_all(&[effects::untilt(index)]));
    }
}

// =============================================================================
// TIMERS
// =============================================================================

fn start_typing(dom: &Rc<Dom>, core: &Core) {
    if dom.elements.hero_subtitle.is_none() {
        return;
    }
    let (mut typer, delay_ms, interval_ms) = {
        let page = core.borrow();
        (page.typewriter(), page.config.typing_start_delay_ms, page.config.typing_interval_ms)
    };
    dom.apply_all(&[typer.start()]);

    let dom_task = Rc::clone(dom);
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        while let Some(frame) = typer.advance() {
            dom_task.apply_all(&[frame]);
            TimeoutFuture::new(interval_ms).await;
        }
    });
}

fn wire_fade_in(dom: &Rc<Dom>) {
    let dom_cb = Rc::clone(dom);
    listen::<Event>(&dom.window, "load", move |_| {
        dom_cb.apply_all(&effects::fade_in_start());
        let finish = Rc::clone(&dom_cb);
        Timeout::new(FADE_IN_DELAY_MS, move || finish.apply_all(&[effects::fade_in_finish()])).forget();
    });
}
