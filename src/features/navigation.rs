//! NavigationController - Mobile Menu and Active Link
//!
//! The mobile menu's open state is the `active` class, mirrored on the menu
//! container and its toggle button. On scroll, the nav link pointing at the
//! section under the viewport top is highlighted.

use snafu::OptionExt;
use tracing::debug;

use crate::app::context::PageContext;
use crate::constants::ACTIVE_CLASS;
use crate::dom::{Browser, Dom, Selector};
use crate::error::{MissingElementSnafu, Result};

/// Selector for navigation links
pub fn nav_links() -> Selector {
    Selector::class("nav-link")
}

/// Mobile menu and nav link state
pub struct NavigationController<E> {
    menu: E,
    toggle: E,
}

impl<E: Clone + PartialEq> NavigationController<E> {
    /// Bind to the menu container and its toggle button
    pub fn bind<D: Dom<Element = E>, B: Browser>(ctx: &PageContext<D, B>) -> Result<Self> {
        let ids = &ctx.config().elements;
        let dom = ctx.dom();
        let menu = dom.element_by_id(&ids.nav_menu).context(MissingElementSnafu {
            id: ids.nav_menu.clone(),
        })?;
        let toggle = dom.element_by_id(&ids.mobile_toggle).context(MissingElementSnafu {
            id: ids.mobile_toggle.clone(),
        })?;
        Ok(Self { menu, toggle })
    }

    pub fn toggle_button(&self) -> &E {
        &self.toggle
    }

    pub fn is_open<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>) -> bool {
        ctx.dom().has_class(&self.menu, ACTIVE_CLASS)
    }

    /// Flip the menu; returns whether it is now open
    pub fn toggle_menu<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>) -> bool {
        let open = !self.is_open(ctx);
        self.set_open(ctx, open);
        open
    }

    pub fn close_menu<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>) {
        self.set_open(ctx, false);
    }

    /// Close the menu when a click lands outside both the menu and its toggle
    pub fn handle_document_click<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>, target: &E) {
        let dom = ctx.dom();
        let inside = dom.contains(&self.menu, target) || dom.contains(&self.toggle, target);
        if !inside && self.is_open(ctx) {
            debug!("Click outside navigation, closing menu");
            self.close_menu(ctx);
        }
    }

    fn set_open<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>, open: bool) {
        let dom = ctx.dom();
        for el in [&self.menu, &self.toggle] {
            if open {
                dom.add_class(el, ACTIVE_CLASS);
            } else {
                dom.remove_class(el, ACTIVE_CLASS);
            }
        }
    }

    /// Highlight the link of the section containing the scroll offset
    ///
    /// A section `s` claims offsets in `[s.top - lookahead, s.top - lookahead + s.height)`.
    /// When no section claims the offset the current highlight is kept.
    pub fn highlight_active_link<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>) -> Option<E> {
        let dom = ctx.dom();
        let scroll_y = ctx.browser().scroll_y();
        let lookahead = ctx.config().scroll.highlight_offset;

        let mut current = None;
        for section in dom.query_all(&Selector::tag("section").with_attr("id")) {
            let top = dom.offset_top(&section) - lookahead;
            let height = dom.offset_height(&section);
            if scroll_y < top || scroll_y >= top + height {
                continue;
            }
            let Some(id) = dom.attribute(&section, "id") else {
                continue;
            };
            if let Some(link) = dom.query(&nav_links().attr_eq("href", &format!("#{id}"))) {
                current = Some(link);
            }
        }

        let link = current?;
        for other in dom.query_all(&nav_links()) {
            dom.remove_class(&other, ACTIVE_CLASS);
        }
        dom.add_class(&link, ACTIVE_CLASS);
        Some(link)
    }
}
