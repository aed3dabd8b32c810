//! Browser-backed [`Dom`] and [`Browser`]

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, NodeList, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::dom::{Browser, Dom, Rect, Selector};

fn node_list_to_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The live document
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn document_element(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &Selector) -> Vec<Element> {
        self.document
            .query_selector_all(&selector.to_string())
            .map(|list| node_list_to_elements(&list))
            .unwrap_or_default()
    }

    fn query(&self, selector: &Selector) -> Option<Element> {
        self.document.query_selector(&selector.to_string()).ok().flatten()
    }

    fn query_within(&self, element: &Element, selector: &Selector) -> Option<Element> {
        element.query_selector(&selector.to_string()).ok().flatten()
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(&**node))
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        if let Err(e) = element.set_attribute(name, value) {
            warn!(name, error = ?e, "Failed to set attribute");
        }
    }

    fn has_attribute(&self, element: &Element, name: &str) -> bool {
        element.has_attribute(name)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn text(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(el) = element.dyn_ref::<HtmlElement>()
            && let Err(e) = el.style().set_property(property, value)
        {
            warn!(property, error = ?e, "Failed to set style");
        }
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, element: &Element) -> f64 {
        element.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn bounding_rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.top(), rect.bottom())
    }

    fn field_value(&self, element: &Element) -> String {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }
}

/// The live window
#[derive(Clone)]
pub struct WebBrowser {
    window: Window,
}

impl WebBrowser {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Browser for WebBrowser {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn inner_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!(error = ?e, "Alert failed");
        }
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            warn!(error = ?e, "Navigation failed");
        }
    }
}
