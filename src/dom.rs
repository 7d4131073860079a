//! Browser host: element lookup and action application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every element the controller can touch is looked up once at boot. Lookups
//! are null-safe: a missing element disables the features that need it and
//! the actions aimed at it are skipped. A failing DOM call is logged and the
//! remaining actions of the same handler still run.

use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, IntersectionObserver, Node,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage, Window,
};

use crate::action::{Action, Target};
use crate::consts::PREFERS_DARK_QUERY;
use crate::error::PageError;

// =============================================================================
// SELECTORS
// =============================================================================

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MENU_BUTTON_ID: &str = "mobile-menu-btn";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";

const THEME_ICON: &str = ".theme-icon";
const MENU_ICON: &str = ".menu-icon";
const NAVBAR: &str = ".navbar";
const HERO_FRONT: &str = ".hero-bg-1";
const HERO_BACK: &str = ".hero-bg-2";
const HERO_SUBTITLE: &str = ".hero-subtitle";
const SUBMIT_LABEL: &str = ".submit-text";
const SUBMIT_LOADING: &str = ".submit-loading";
const REVEAL_BLOCKS: &str = ".education-card, .skill-category, .project-card, .soft-skill";
const TILT_CARDS: &str = ".project-card";
const HOVER_TAGS: &str = ".skill-tag, .tech-badge";
pub const NAV_LINKS: &str = "a[href^=\"#\"]";

// =============================================================================
// ELEMENTS
// =============================================================================

/// Every element the page controller works with, looked up once.
pub struct Elements {
    pub body: Option<HtmlElement>,
    pub navbar: Option<HtmlElement>,
    pub theme_toggle: Option<HtmlElement>,
    pub theme_icon: Option<HtmlElement>,
    pub mobile_menu: Option<HtmlElement>,
    pub menu_button: Option<HtmlElement>,
    pub menu_icon: Option<HtmlElement>,
    pub hero_front: Option<HtmlElement>,
    pub hero_back: Option<HtmlElement>,
    pub hero_subtitle: Option<HtmlElement>,
    pub contact_form: Option<HtmlFormElement>,
    pub submit_button: Option<HtmlButtonElement>,
    pub submit_label: Option<HtmlElement>,
    pub submit_loading: Option<HtmlElement>,
    pub reveals: Vec<HtmlElement>,
    pub cards: Vec<HtmlElement>,
    pub tags: Vec<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
}

impl Elements {
    #[must_use]
    pub fn lookup(document: &Document) -> Self {
        let elements = Self {
            body: document.body(),
            navbar: query(document, NAVBAR),
            theme_toggle: by_id(document, THEME_TOGGLE_ID),
            theme_icon: query(document, THEME_ICON),
            mobile_menu: by_id(document, MOBILE_MENU_ID),
            menu_button: by_id(document, MENU_BUTTON_ID),
            menu_icon: query(document, MENU_ICON),
            hero_front: query(document, HERO_FRONT),
            hero_back: query(document, HERO_BACK),
            hero_subtitle: query(document, HERO_SUBTITLE),
            contact_form: by_id(document, CONTACT_FORM_ID),
            submit_button: by_id(document, SUBMIT_BUTTON_ID),
            submit_label: query(document, SUBMIT_LABEL),
            submit_loading: query(document, SUBMIT_LOADING),
            reveals: query_all(document, REVEAL_BLOCKS),
            cards: query_all(document, TILT_CARDS),
            tags: query_all(document, HOVER_TAGS),
            nav_links: query_all(document, NAV_LINKS),
        };
        log::debug!(
            "page elements: {} reveal blocks, {} cards, {} tags, {} nav links",
            elements.reveals.len(),
            elements.cards.len(),
            elements.tags.len(),
            elements.nav_links.len()
        );
        elements
    }

    fn resolve(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::Body => self.body.as_ref(),
            Target::Navbar => self.navbar.as_ref(),
            Target::ThemeIcon => self.theme_icon.as_ref(),
            Target::MobileMenu => self.mobile_menu.as_ref(),
            Target::MenuIcon => self.menu_icon.as_ref(),
            Target::HeroFront => self.hero_front.as_ref(),
            Target::HeroBack => self.hero_back.as_ref(),
            Target::HeroSubtitle => self.hero_subtitle.as_ref(),
            Target::SubmitButton => self.submit_button.as_deref(),
            Target::SubmitLabel => self.submit_label.as_ref(),
            Target::SubmitLoading => self.submit_loading.as_ref(),
            Target::Reveal(i) => self.reveals.get(i),
            Target::Card(i) => self.cards.get(i),
            Target::Tag(i) => self.tags.get(i),
        }
    }
}

fn cast<T: JsCast>(element: Element, what: &str) -> Option<T> {
    match element.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(_) => {
            log::warn!("{what} has an unexpected element type");
            None
        }
    }
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let Some(element) = document.get_element_by_id(id) else {
        log::debug!("{}", PageError::MissingElement { selector: format!("#{id}") });
        return None;
    };
    cast(element, id)
}

fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    match document.query_selector(selector) {
        Ok(Some(element)) => cast(element, selector),
        Ok(None) => {
            log::debug!("{}", PageError::MissingElement { selector: selector.to_owned() });
            None
        }
        Err(err) => {
            log::warn!("bad selector {selector}: {}", PageError::from(err));
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", PageError::from(err));
            return Vec::new();
        }
    };
    let mut elements = Vec::new();
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(el) = node.dyn_into::<HtmlElement>()
        {
            elements.push(el);
        }
    }
    elements
}

// =============================================================================
// DOM HOST
// =============================================================================

pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub elements: Elements,
    observer: RefCell<Option<IntersectionObserver>>,
}

impl Dom {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        let elements = Elements::lookup(&document);
        Self { window, document, elements, observer: RefCell::new(None) }
    }

    /// Apply actions in order; failures are logged and skipped.
    pub fn apply_all(&self, actions: &[Action]) {
        for action in actions {
            if let Err(err) = self.apply(action) {
                log::warn!("failed to apply {action:?}: {err}");
            }
        }
    }

    fn apply(&self, action: &Action) -> Result<(), PageError> {
        match action {
            Action::SetClass { target, class, on } => {
                if let Some(el) = self.elements.resolve(*target) {
                    el.class_list().toggle_with_force(class, *on)?;
                }
            }
            Action::SetAttribute { target, name, value } => {
                if let Some(el) = self.elements.resolve(*target) {
                    el.set_attribute(name, value)?;
                }
            }
            Action::SetStyle { target, property, value } => {
                if let Some(el) = self.elements.resolve(*target) {
                    el.style().set_property(property, value)?;
                }
            }
            Action::SetText { target, text } => {
                if let Some(el) = self.elements.resolve(*target) {
                    el.set_text_content(Some(text.as_str()));
                }
            }
            Action::SetDisabled { target, disabled } => {
                if *target == Target::SubmitButton
                    && let Some(button) = &self.elements.submit_button
                {
                    button.set_disabled(*disabled);
                }
            }
            Action::ScrollIntoView { id } => {
                if let Some(el) = self.document.get_element_by_id(id) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            Action::Persist { key, value } => {
                self.storage()?.set_item(key, value)?;
            }
            Action::RefreshIcons => refresh_icons()?,
            Action::Notify(message) => self.window.alert_with_message(message)?,
            Action::ResetForm => {
                if let Some(form) = &self.elements.contact_form {
                    form.reset();
                }
            }
            Action::Unobserve(target) => {
                if let (Some(observer), Some(el)) = (self.observer.borrow().as_ref(), self.elements.resolve(*target)) {
                    observer.unobserve(el);
                }
            }
        }
        Ok(())
    }

    pub fn set_observer(&self, observer: IntersectionObserver) {
        *self.observer.borrow_mut() = Some(observer);
    }

    // --- Environment reads ---

    fn storage(&self) -> Result<Storage, PageError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(PageError::StorageUnavailable),
            Err(err) => Err(err.into()),
        }
    }

    /// Stored preference under `key`, if storage is reachable and set.
    #[must_use]
    pub fn saved_preference(&self, key: &str) -> Option<String> {
        match self.storage().and_then(|s| s.get_item(key).map_err(PageError::from)) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("could not read {key}: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn prefers_dark(&self) -> bool {
        match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }

    /// `data-*` attribute on `<body>`, by camelCase dataset key.
    #[must_use]
    pub fn body_data(&self, key: &str) -> Option<String> {
        self.elements.body.as_ref().and_then(|body| body.dataset().get(key))
    }

    /// Caption override from the subtitle's `data-text` attribute.
    #[must_use]
    pub fn subtitle_caption(&self) -> Option<String> {
        self.elements
            .hero_subtitle
            .as_ref()
            .and_then(|el| el.get_attribute("data-text"))
            .filter(|text| !text.trim().is_empty())
    }

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    #[must_use]
    pub fn viewport_width(&self) -> Option<f64> {
        match self.window.inner_width() {
            Ok(width) => width.as_f64(),
            Err(_) => None,
        }
    }

    /// Whether `node` sits inside `container` (or is it).
    #[must_use]
    pub fn contains(container: Option<&HtmlElement>, node: Option<&Node>) -> bool {
        node.is_some() && container.is_some_and(|el| el.contains(node))
    }

    /// Current values of the contact form fields.
    #[must_use]
    pub fn form_data(&self) -> Option<FormData> {
        let form = self.elements.contact_form.as_ref()?;
        match FormData::new_with_form(form) {
            Ok(data) => Some(data),
            Err(err) => {
                log::warn!("could not read contact form: {}", PageError::from(err));
                None
            }
        }
    }
}

/// Call the page's `lucide.createIcons()` when the icon library is loaded.
fn refresh_icons() -> Result<(), PageError> {
    let lucide = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("lucide"))?;
    if lucide.is_undefined() || lucide.is_null() {
        return Ok(());
    }
    let create = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons"))?;
    let Some(create) = create.dyn_ref::<js_sys::Function>() else {
        return Ok(());
    };
    create.call0(&lucide)?;
    Ok(())
}
