//! ScrollEffects - Header Shadow, Anchor Scrolling and Entrance Animations

use tracing::debug;

use crate::app::context::PageContext;
use crate::constants::AOS_ANIMATE_CLASS;
use crate::dom::{Browser, Dom, IntersectionEntry, Selector};

/// Selector for same-page anchors
pub fn fragment_links() -> Selector {
    Selector::tag("a").attr_prefix("href", "#")
}

/// Selector for elements animated by the entrance observer
pub fn animated_elements() -> Selector {
    Selector::attr("data-aos")
}

/// Scroll-driven visual effects
pub struct ScrollEffects<E> {
    header: Option<E>,
}

impl<E: Clone + PartialEq> ScrollEffects<E> {
    /// Bind to the page header; without one, the shadow is skipped and
    /// anchor scrolling assumes a zero-height header
    pub fn bind<D: Dom<Element = E>, B: Browser>(ctx: &PageContext<D, B>) -> Self {
        let header = ctx.dom().element_by_id(&ctx.config().elements.header);
        if header.is_none() {
            debug!("No header element, header shadow disabled");
        }
        Self { header }
    }

    /// Raise or lower the header shadow for the current scroll offset
    pub fn update_header_shadow<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>) {
        let Some(header) = &self.header else {
            return;
        };
        let scroll = &ctx.config().scroll;
        let shadow = if ctx.browser().scroll_y() > scroll.shadow_threshold {
            &scroll.shadow_raised
        } else {
            &scroll.shadow_resting
        };
        ctx.dom().set_style(header, "box-shadow", shadow);
    }

    /// Handle a click on an anchor with `href`
    ///
    /// Returns whether the browser's default jump must be prevented, which is
    /// the case for every fragment longer than `#`. The window only scrolls
    /// when the fragment names an existing element; the target lands just
    /// below the header.
    pub fn smooth_scroll_to<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>, href: &str) -> bool {
        let Some(fragment) = href.strip_prefix('#').filter(|f| !f.is_empty()) else {
            return false;
        };

        let dom = ctx.dom();
        match dom.element_by_id(fragment) {
            Some(target) => {
                let header_height = self.header.as_ref().map_or(0.0, |h| dom.offset_height(h));
                let top = dom.bounding_rect(&target).top + ctx.browser().scroll_y() - header_height;
                debug!(fragment, top, "Smooth scrolling to anchor");
                ctx.browser().scroll_to(top);
            }
            None => debug!(fragment, "Anchor target not found"),
        }
        true
    }

    /// Fade in cards that overlap the viewport; returns how many were revealed
    pub fn reveal_on_scroll<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>) -> usize {
        let dom = ctx.dom();
        let viewport = ctx.browser().inner_height();
        let mut revealed = 0;

        for class in &ctx.config().scroll.reveal_classes {
            for card in dom.query_all(&Selector::class(class)) {
                if dom.bounding_rect(&card).intersects_viewport(viewport) {
                    dom.set_style(&card, "opacity", "1");
                    dom.set_style(&card, "transform", "translateY(0)");
                    revealed += 1;
                }
            }
        }
        revealed
    }

    /// Mark `data-aos` elements entering the viewport as animated
    pub fn animate_entrances<D: Dom<Element = E>, B: Browser>(
        &self,
        ctx: &PageContext<D, B>,
        entries: &[IntersectionEntry<E>],
    ) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            ctx.dom().add_class(&entry.target, AOS_ANIMATE_CLASS);
        }
    }
}
