//! Application - Page Controller
//!
//! [`PageController`] is created once when the document is ready. It binds
//! every behaviour to the page and exposes one `on_*` method per browser
//! event; the host (the `web` module, or a test) forwards events to them.
//! Behaviours whose elements are missing are skipped, the rest keep working.

use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::app::context::PageContext;
use crate::constants::LOADED_CLASS;
use crate::dom::{Browser, Dom, IntersectionEntry, Selector};
use crate::domain::config::SiteConfig;
use crate::features::contact::{ContactFormHandler, ValidationError};
use crate::features::faq::FaqAccordion;
use crate::features::language::LanguageSwitcher;
use crate::features::lazy_images::LazyImageLoader;
use crate::features::navigation::NavigationController;
use crate::features::scroll::ScrollEffects;
use crate::helpers::{Debounce, Scheduler};
use crate::i18n::Language;
use crate::utils::preference_store::PreferenceStore;

/// The page and all of its behaviours
pub struct PageController<D: Dom, B, S, T: Scheduler> {
    ctx: PageContext<D, B>,
    language: LanguageSwitcher<S>,
    navigation: Option<NavigationController<D::Element>>,
    scroll: ScrollEffects<D::Element>,
    faq: FaqAccordion,
    contact: Option<ContactFormHandler<D::Element>>,
    images: LazyImageLoader<D::Element>,
    highlight: Debounce<(), T>,
    reveal: Debounce<(), T>,
}

impl<D, B, S, T> PageController<D, B, S, T>
where
    D: Dom + 'static,
    B: Browser + 'static,
    S: PreferenceStore + 'static,
    T: Scheduler + Clone + 'static,
{
    /// Bind every behaviour, restore the saved language and run the first reveal pass
    pub fn init(dom: D, browser: B, store: S, scheduler: T, config: SiteConfig) -> Rc<Self> {
        let page = Rc::new_cyclic(|weak: &Weak<Self>| {
            let ctx = PageContext::new(dom, browser, config);
            let scroll_config = &ctx.config().scroll;

            let page = weak.clone();
            let highlight = Debounce::new(
                Duration::from_millis(scroll_config.highlight_debounce_ms),
                scheduler.clone(),
                move |()| {
                    if let Some(page) = page.upgrade() {
                        page.highlight_active_link();
                    }
                },
            );

            let page = weak.clone();
            let reveal = Debounce::new(
                Duration::from_millis(scroll_config.reveal_debounce_ms),
                scheduler,
                move |()| {
                    if let Some(page) = page.upgrade() {
                        page.reveal_cards();
                    }
                },
            );

            let navigation = match NavigationController::bind(&ctx) {
                Ok(nav) => Some(nav),
                Err(e) => {
                    warn!(error = %e, "Mobile navigation disabled");
                    None
                }
            };
            let contact = match ContactFormHandler::bind(&ctx) {
                Ok(form) => Some(form),
                Err(e) => {
                    debug!(error = %e, "No contact form on this page");
                    None
                }
            };

            Self {
                language: LanguageSwitcher::new(store),
                navigation,
                scroll: ScrollEffects::bind(&ctx),
                faq: FaqAccordion::new(),
                contact,
                images: LazyImageLoader::collect(&ctx),
                highlight,
                reveal,
                ctx,
            }
        });

        page.start();
        page
    }

    fn start(&self) {
        let language = self.language.restore(&self.ctx);
        self.reveal_cards();
        info!(%language, "Onedigram Website");
        info!("Smart Systems. Simple Growth.");
    }

    pub fn context(&self) -> &PageContext<D, B> {
        &self.ctx
    }

    pub fn language(&self) -> Language {
        self.ctx.language()
    }

    pub fn navigation(&self) -> Option<&NavigationController<D::Element>> {
        self.navigation.as_ref()
    }

    pub fn contact_form(&self) -> Option<&ContactFormHandler<D::Element>> {
        self.contact.as_ref()
    }

    pub fn lazy_images(&self) -> &LazyImageLoader<D::Element> {
        &self.images
    }

    // ==================== Events ====================

    /// Language toggle button clicked
    pub fn on_language_toggle(&self) -> Language {
        self.language.toggle(&self.ctx)
    }

    /// Apply a language without persisting it
    pub fn set_language(&self, language: Language) {
        self.language.set_language(&self.ctx, language);
    }

    /// Mobile menu button clicked
    pub fn on_menu_toggle(&self) {
        if let Some(nav) = &self.navigation {
            nav.toggle_menu(&self.ctx);
        }
    }

    /// A navigation link was followed
    pub fn on_nav_link_click(&self) {
        if let Some(nav) = &self.navigation {
            nav.close_menu(&self.ctx);
        }
    }

    /// Any click in the document, with its target
    pub fn on_document_click(&self, target: &D::Element) {
        if let Some(nav) = &self.navigation {
            nav.handle_document_click(&self.ctx, target);
        }
    }

    /// Raw window scroll; cheap work runs now, the rest is debounced
    pub fn on_scroll(&self) {
        self.scroll.update_header_shadow(&self.ctx);
        self.highlight.call(());
        self.reveal.call(());
    }

    /// Same-page anchor clicked; returns whether to prevent the default jump
    pub fn on_anchor_click(&self, href: &str) -> bool {
        self.scroll.smooth_scroll_to(&self.ctx, href)
    }

    pub fn on_faq_question_click(&self, question: &D::Element) {
        self.faq.handle_question_click(&self.ctx, question);
    }

    /// Contact form submitted; `None` when the page has no form
    pub fn on_contact_submit(&self) -> Option<Result<String, ValidationError>> {
        self.contact.as_ref().map(|form| form.submit(&self.ctx))
    }

    /// Lazy images intersected the viewport; returns images to unobserve
    pub fn on_lazy_images_intersect(&self, entries: &[IntersectionEntry<D::Element>]) -> Vec<D::Element> {
        self.images.handle_intersections(&self.ctx, entries)
    }

    /// `data-aos` elements intersected the viewport
    pub fn on_entrance_intersect(&self, entries: &[IntersectionEntry<D::Element>]) {
        self.scroll.animate_entrances(&self.ctx, entries);
    }

    /// Window finished loading
    pub fn on_load(&self) {
        let dom = self.ctx.dom();
        if let Some(body) = dom.body() {
            dom.add_class(&body, LOADED_CLASS);
        }
    }

    /// Case study card clicked
    pub fn on_case_card_click(&self, card: &D::Element) {
        let dom = self.ctx.dom();
        let title = dom
            .query_within(card, &Selector::tag("h3"))
            .map(|h| dom.text(&h))
            .unwrap_or_default();
        info!(title = %title, "Case study clicked");
    }

    // ==================== Debounced work ====================

    pub fn highlight_active_link(&self) {
        if let Some(nav) = &self.navigation {
            nav.highlight_active_link(&self.ctx);
        }
    }

    pub fn reveal_cards(&self) {
        let revealed = self.scroll.reveal_on_scroll(&self.ctx);
        debug!(revealed, "Reveal pass");
    }
}
