//! FaqAccordion - Single-Open FAQ List

use crate::app::context::PageContext;
use crate::constants::ACTIVE_CLASS;
use crate::dom::{Browser, Dom, Selector};

pub fn faq_items() -> Selector {
    Selector::class("faq-item")
}

pub fn faq_questions() -> Selector {
    Selector::class("faq-question")
}

/// Accordion over every `.faq-item` on the page; at most one is open
#[derive(Debug, Default)]
pub struct FaqAccordion;

impl FaqAccordion {
    pub fn new() -> Self {
        Self
    }

    /// Open `item` and close the others, or close `item` if it was open
    pub fn toggle<D: Dom, B: Browser>(&self, ctx: &PageContext<D, B>, item: &D::Element) -> bool {
        let dom = ctx.dom();
        let was_open = dom.has_class(item, ACTIVE_CLASS);

        for other in dom.query_all(&faq_items()) {
            dom.remove_class(&other, ACTIVE_CLASS);
        }

        if !was_open {
            dom.add_class(item, ACTIVE_CLASS);
        }
        !was_open
    }

    /// A question was clicked; its parent element is the item
    pub fn handle_question_click<D: Dom, B: Browser>(&self, ctx: &PageContext<D, B>, question: &D::Element) {
        if let Some(item) = ctx.dom().parent(question) {
            self.toggle(ctx, &item);
        }
    }
}
