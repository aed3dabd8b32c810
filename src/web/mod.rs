//! Web - Browser Entry Point
//!
//! Implements the host seams over web-sys and wires DOM events to the
//! [`PageController`]. Only compiled with the `web` feature.

mod dom;
mod storage;
mod timer;

use std::rc::Rc;

use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

pub use dom::{WebBrowser, WebDom};
pub use storage::LocalStorage;
pub use timer::TimeoutScheduler;

use crate::app::application::PageController;
use crate::constants::{AOS_ROOT_MARGIN, AOS_THRESHOLD, SITE_CONFIG_ID};
use crate::dom::{Dom, IntersectionEntry, Selector};
use crate::domain::config::SiteConfig;
use crate::features::faq::faq_questions;
use crate::features::lazy_images::lazy_images;
use crate::features::navigation::nav_links;
use crate::features::scroll::{animated_elements, fragment_links};

/// The controller as wired in the browser
pub type WebPage = PageController<WebDom, WebBrowser, LocalStorage, TimeoutScheduler>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::logging::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        let deferred = Closure::once_into_js(move || {
            if let Err(e) = mount(window, document) {
                warn!(error = ?e, "Failed to mount page");
            }
        });
        target.add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref())?;
        Ok(())
    } else {
        mount(window, document)
    }
}

/// Read configuration embedded in the page, falling back to defaults
fn site_config(document: &Document) -> SiteConfig {
    let Some(json) = document.get_element_by_id(SITE_CONFIG_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&json) {
        Ok(config) => {
            debug!("Loaded embedded site configuration");
            config
        }
        Err(e) => {
            warn!(error = %e, "Ignoring invalid site configuration");
            SiteConfig::default()
        }
    }
}

/// One independent piece of page wiring
type WireStep<'a, E> = (&'static str, Box<dyn FnOnce() -> Result<(), E> + 'a>);

fn step<'a, E>(name: &'static str, run: impl FnOnce() -> Result<(), E> + 'a) -> WireStep<'a, E> {
    (name, Box::new(run))
}

/// Run every step; a failed step is logged and the remaining steps still run.
/// Returns the names of the steps that failed.
fn wire_each<E: std::fmt::Debug>(steps: Vec<WireStep<'_, E>>) -> Vec<&'static str> {
    let mut failed = Vec::new();
    for (name, step) in steps {
        if let Err(e) = step() {
            warn!(feature = name, error = ?e, "Feature wiring failed, feature disabled");
            failed.push(name);
        }
    }
    failed
}

fn mount(window: Window, document: Document) -> Result<(), JsValue> {
    let config = site_config(&document);
    let page = PageController::init(
        WebDom::new(document.clone()),
        WebBrowser::new(window.clone()),
        LocalStorage::new(window.clone()),
        TimeoutScheduler,
        config,
    );

    let failed = wire_each(vec![
        step("language toggle", || bind_language_toggle(&page, &document)),
        step("mobile menu", || bind_mobile_menu(&page, &document)),
        step("smooth scroll", || bind_anchors(&page)),
        step("faq", || bind_faq(&page)),
        step("case cards", || bind_case_cards(&page)),
        step("contact form", || bind_contact_form(&page)),
        step("scroll effects", || listen_page(&page, &window, "scroll", |page, _| page.on_scroll())),
        step("load marker", || listen_page(&page, &window, "load", |page, _| page.on_load())),
        step("lazy images", || observe_lazy_images(&page)),
        step("entrance animations", || observe_entrances(&page)),
    ]);

    info!(failed = failed.len(), "Page ready");
    Ok(())
}

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Handlers live as long as the page
    closure.forget();
    Ok(())
}

fn listen_page(page: &Rc<WebPage>, target: &EventTarget, kind: &str, handler: fn(&WebPage, &Event)) -> Result<(), JsValue> {
    let page = Rc::clone(page);
    listen(target, kind, move |event| handler(&page, &event))
}

fn listen_all(page: &Rc<WebPage>, selector: &Selector, kind: &str, handler: fn(&WebPage, &Element, &Event)) -> Result<(), JsValue> {
    for element in page.context().dom().query_all(selector) {
        let page = Rc::clone(page);
        let target = element.clone();
        listen(&element, kind, move |event| handler(&page, &target, &event))?;
    }
    Ok(())
}

fn bind_language_toggle(page: &Rc<WebPage>, document: &Document) -> Result<(), JsValue> {
    match document.get_element_by_id(&page.context().config().elements.lang_toggle) {
        Some(toggle) => listen_page(page, &toggle, "click", |page, _| {
            page.on_language_toggle();
        }),
        None => Ok(()),
    }
}

fn bind_mobile_menu(page: &Rc<WebPage>, document: &Document) -> Result<(), JsValue> {
    let Some(nav) = page.navigation() else {
        return Ok(());
    };
    listen_page(page, nav.toggle_button(), "click", |page, _| page.on_menu_toggle())?;
    listen_all(page, &nav_links(), "click", |page, _, _| page.on_nav_link_click())?;
    listen_page(page, document, "click", |page, event| {
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            page.on_document_click(&target);
        }
    })
}

fn bind_anchors(page: &Rc<WebPage>) -> Result<(), JsValue> {
    listen_all(page, &fragment_links(), "click", |page, link, event| {
        let href = link.get_attribute("href").unwrap_or_default();
        if page.on_anchor_click(&href) {
            event.prevent_default();
        }
    })
}

fn bind_faq(page: &Rc<WebPage>) -> Result<(), JsValue> {
    listen_all(page, &faq_questions(), "click", |page, question, _| {
        page.on_faq_question_click(question)
    })
}

fn bind_case_cards(page: &Rc<WebPage>) -> Result<(), JsValue> {
    listen_all(page, &Selector::class("case-card"), "click", |page, card, _| {
        page.on_case_card_click(card)
    })
}

fn bind_contact_form(page: &Rc<WebPage>) -> Result<(), JsValue> {
    match page.contact_form() {
        Some(form) => listen_page(page, form.form(), "submit", |page, event| {
            event.prevent_default();
            page.on_contact_submit();
        }),
        None => Ok(()),
    }
}

fn intersection_entries(entries: &js_sys::Array) -> Vec<IntersectionEntry<Element>> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| IntersectionEntry::new(entry.target(), entry.is_intersecting()))
        .collect()
}

fn observer_callback(
    handler: impl FnMut(js_sys::Array, IntersectionObserver) + 'static,
) -> Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> {
    Closure::wrap(Box::new(handler) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
}

fn observe_lazy_images(page: &Rc<WebPage>) -> Result<(), JsValue> {
    let images = page.context().dom().query_all(&lazy_images());
    if images.is_empty() {
        return Ok(());
    }

    let callback = {
        let page = Rc::clone(page);
        observer_callback(move |entries, observer| {
            for img in page.on_lazy_images_intersect(&intersection_entries(&entries)) {
                observer.unobserve(&img);
            }
        })
    };
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for img in &images {
        observer.observe(img);
    }
    Ok(())
}

fn observe_entrances(page: &Rc<WebPage>) -> Result<(), JsValue> {
    let elements = page.context().dom().query_all(&animated_elements());
    if elements.is_empty() {
        return Ok(());
    }

    let callback = {
        let page = Rc::clone(page);
        observer_callback(move |entries, _| page.on_entrance_intersect(&intersection_entries(&entries)))
    };
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(AOS_THRESHOLD));
    options.set_root_margin(AOS_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    Ok(())
}
