//! LazyImageLoader - Deferred Image Loading
//!
//! Images marked `loading="lazy"` carry their real URL in `data-src`. The
//! first time such an image intersects the viewport its `src` is set, it
//! gains the `loaded` class and is reported back so the host observer can
//! stop watching it.

use std::cell::RefCell;

use tracing::debug;

use crate::app::context::PageContext;
use crate::constants::LOADED_CLASS;
use crate::dom::{Browser, Dom, IntersectionEntry, Selector};

pub fn lazy_images() -> Selector {
    Selector::tag("img").attr_eq("loading", "lazy")
}

/// One-shot loader over the page's lazy images
pub struct LazyImageLoader<E> {
    watched: RefCell<Vec<E>>,
}

impl<E: Clone + PartialEq> LazyImageLoader<E> {
    /// Collect every lazy image once
    pub fn collect<D: Dom<Element = E>, B: Browser>(ctx: &PageContext<D, B>) -> Self {
        let mut watched: Vec<E> = Vec::new();
        for img in ctx.dom().query_all(&lazy_images()) {
            if !watched.contains(&img) {
                watched.push(img);
            }
        }
        debug!(count = watched.len(), "Watching lazy images");
        Self {
            watched: RefCell::new(watched),
        }
    }

    /// Images still waiting to load
    pub fn watched(&self) -> Vec<E> {
        self.watched.borrow().clone()
    }

    /// Load intersecting images; returns the ones to stop observing
    pub fn handle_intersections<D: Dom<Element = E>, B: Browser>(
        &self,
        ctx: &PageContext<D, B>,
        entries: &[IntersectionEntry<E>],
    ) -> Vec<E> {
        let dom = ctx.dom();
        let mut loaded = Vec::new();

        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let img = &entry.target;
            if !self.watched.borrow().contains(img) {
                continue;
            }
            let Some(src) = dom.attribute(img, "data-src") else {
                continue;
            };
            dom.set_attribute(img, "src", &src);
            dom.add_class(img, LOADED_CLASS);
            self.watched.borrow_mut().retain(|w| w != img);
            loaded.push(img.clone());
        }
        loaded
    }
}
