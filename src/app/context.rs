//! PageContext - Shared Page Handles
//!
//! Everything behaviours share is collected here: the document, the window,
//! the site configuration and the active language. Behaviours receive the
//! context by reference instead of reaching for globals.

use std::cell::Cell;

use crate::dom::{Browser, Dom};
use crate::domain::config::SiteConfig;
use crate::i18n::Language;

/// Handles passed to every behaviour
pub struct PageContext<D, B> {
    dom: D,
    browser: B,
    config: SiteConfig,
    language: Cell<Language>,
}

impl<D: Dom, B: Browser> PageContext<D, B> {
    /// The page starts out in the language its markup is authored in
    pub fn new(dom: D, browser: B, config: SiteConfig) -> Self {
        Self {
            dom,
            browser,
            config,
            language: Cell::new(Language::default()),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Language currently rendered
    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub(crate) fn set_language(&self, language: Language) {
        self.language.set(language);
    }
}
