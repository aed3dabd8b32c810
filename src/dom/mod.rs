//! DOM - Host Document and Window Seams
//!
//! Behaviours never touch web-sys directly. They talk to a [`Dom`] (the
//! document) and a [`Browser`] (the window), which the `web` feature
//! implements over web-sys and [`memory`] implements for native tests.
//!
//! All methods take `&self`: the environment is single-threaded and the
//! document is shared by every behaviour.

pub mod memory;
mod selector;

use std::fmt::Debug;

pub use selector::Selector;

/// Vertical extent of an element relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether any part of the rect is inside a viewport of `height`
    pub fn intersects_viewport(&self, height: f64) -> bool {
        self.top < height && self.bottom > 0.0
    }
}

/// One viewport-intersection notification
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
}

impl<E> IntersectionEntry<E> {
    pub fn new(target: E, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }
}

/// The page document
pub trait Dom {
    /// Element handle; cheap to clone, compared by identity
    type Element: Clone + PartialEq + Debug;

    /// The `<html>` element
    fn document_element(&self) -> Option<Self::Element>;
    /// The `<body>` element
    fn body(&self) -> Option<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// All matching elements in document order
    fn query_all(&self, selector: &Selector) -> Vec<Self::Element>;
    /// First matching element
    fn query(&self, selector: &Selector) -> Option<Self::Element> {
        self.query_all(selector).into_iter().next()
    }
    /// First matching descendant of `element`
    fn query_within(&self, element: &Self::Element, selector: &Selector) -> Option<Self::Element>;
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;
    /// Whether `node` is `ancestor` or one of its descendants
    fn contains(&self, ancestor: &Self::Element, node: &Self::Element) -> bool;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);
    fn has_attribute(&self, element: &Self::Element, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn add_class(&self, element: &Self::Element, class: &str);
    fn remove_class(&self, element: &Self::Element, class: &str);

    fn text(&self, element: &Self::Element) -> String;
    fn set_text(&self, element: &Self::Element, text: &str);
    /// Set an inline style property
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// `offsetTop` / `offsetHeight`
    fn offset_top(&self, element: &Self::Element) -> f64;
    fn offset_height(&self, element: &Self::Element) -> f64;
    /// `getBoundingClientRect()`
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Current value of an input or textarea
    fn field_value(&self, element: &Self::Element) -> String;
    /// Restore a form's fields to their initial values
    fn reset_form(&self, form: &Self::Element);

    fn title(&self) -> String;
    fn set_title(&self, title: &str);
}

/// The browser window
pub trait Browser {
    /// Vertical scroll offset
    fn scroll_y(&self) -> f64;
    /// Viewport height
    fn inner_height(&self) -> f64;
    /// Smooth-scroll the window to `top`
    fn scroll_to(&self, top: f64);
    /// Blocking modal alert
    fn alert(&self, message: &str);
    /// Point the window at `url`
    fn navigate(&self, url: &str);
}
