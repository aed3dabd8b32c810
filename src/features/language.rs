//! LanguageSwitcher - Arabic / English Toggle
//!
//! Page copy is authored in Arabic. Translatable elements carry their English
//! text in `data-en`; the first switch to English caches the Arabic text in
//! `data-ar` so switching back restores it exactly.

use tracing::{debug, info, warn};

use crate::app::context::PageContext;
use crate::constants::ACTIVE_CLASS;
use crate::dom::{Browser, Dom, Selector};
use crate::domain::config::TextVariant;
use crate::i18n::Language;
use crate::utils::preference_store::PreferenceStore;

const DATA_EN: &str = "data-en";
const DATA_AR: &str = "data-ar";

/// Language toggle and its persisted preference
pub struct LanguageSwitcher<S> {
    store: S,
}

impl<S: PreferenceStore> LanguageSwitcher<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Apply the stored preference, if any; returns the active language
    pub fn restore<D: Dom, B: Browser>(&self, ctx: &PageContext<D, B>) -> Language {
        let key = &ctx.config().language.storage_key;
        match self.store.load(key) {
            Ok(Some(code)) => match code.parse::<Language>() {
                Ok(language) => {
                    info!(%language, "Restoring saved language");
                    self.set_language(ctx, language);
                }
                Err(e) => warn!(error = %e, "Ignoring stored language preference"),
            },
            Ok(None) => debug!("No saved language, keeping {}", ctx.language()),
            Err(e) => warn!(error = %e, "Failed to read language preference"),
        }
        ctx.language()
    }

    /// Switch to the other language and persist the choice
    pub fn toggle<D: Dom, B: Browser>(&self, ctx: &PageContext<D, B>) -> Language {
        let next = ctx.language().toggled();
        self.set_language(ctx, next);

        let key = &ctx.config().language.storage_key;
        if let Err(e) = self.store.save(key, next.code()) {
            warn!(error = %e, "Failed to persist language preference");
        }
        next
    }

    /// Render the page in `language`
    ///
    /// Applying the same language twice leaves the document unchanged.
    pub fn set_language<D: Dom, B: Browser>(&self, ctx: &PageContext<D, B>, language: Language) {
        ctx.set_language(language);
        let dom = ctx.dom();

        if let Some(root) = dom.document_element() {
            dom.set_attribute(&root, "lang", language.code());
            dom.set_attribute(&root, "dir", language.dir());
        }

        for candidate in [Language::Ar, Language::En] {
            let indicator = Selector::class(&format!("lang-{}", candidate.code()));
            if let Some(el) = dom.query(&indicator) {
                if candidate == language {
                    dom.add_class(&el, ACTIVE_CLASS);
                } else {
                    dom.remove_class(&el, ACTIVE_CLASS);
                }
            }
        }

        match language {
            Language::En => {
                for el in dom.query_all(&Selector::attr(DATA_EN)) {
                    let english = dom.attribute(&el, DATA_EN).unwrap_or_default();
                    if !dom.has_attribute(&el, DATA_AR) {
                        dom.set_attribute(&el, DATA_AR, &dom.text(&el));
                    }
                    dom.set_text(&el, &english);
                }
            }
            Language::Ar => {
                for el in dom.query_all(&Selector::attr(DATA_AR)) {
                    let arabic = dom.attribute(&el, DATA_AR).unwrap_or_default();
                    dom.set_text(&el, &arabic);
                }
            }
        }

        for candidate in [Language::Ar, Language::En] {
            let display = if candidate == language { "block" } else { "none" };
            let sections = Selector::class("lang-section").attr_eq("data-lang", candidate.code());
            for el in dom.query_all(&sections) {
                dom.set_style(&el, "display", display);
            }
        }

        let strings = &ctx.config().language;
        match TextVariant::translate(&strings.titles, &dom.title(), language) {
            Some(title) => dom.set_title(&title),
            None => debug!("Document title has no known {language} counterpart"),
        }

        let meta = Selector::tag("meta").attr_eq("name", "description");
        if let Some(el) = dom.query(&meta) {
            let current = dom.attribute(&el, "content").unwrap_or_default();
            if let Some(description) = TextVariant::translate(&strings.descriptions, &current, language) {
                dom.set_attribute(&el, "content", &description);
            }
        }
    }
}
