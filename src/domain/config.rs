//! Config - Site Configuration
//!
//! Everything the controller needs to know about the page markup. Defaults
//! match the production site; a page may override any field through a JSON
//! block (see [`SiteConfig::from_json`]).

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::Result;
use crate::i18n::Language;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Language preference handling
    pub language: LanguageConfig,
    /// Element ids the page provides
    pub elements: ElementIds,
    /// Scroll-driven effects
    pub scroll: ScrollConfig,
    /// Contact form delivery
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Parse a JSON configuration block; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Language preference configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LanguageConfig {
    /// Storage slot for the preference
    pub storage_key: String,
    /// Known document titles and their counterparts
    pub titles: Vec<TextVariant>,
    /// Known meta descriptions and their counterparts
    pub descriptions: Vec<TextVariant>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            storage_key: LANGUAGE_STORAGE_KEY.to_string(),
            titles: vec![
                TextVariant::new(
                    "أنظمة ذكية",
                    "Onedigram - أنظمة ذكية بنمو بسيط",
                    "Smart Systems",
                    "Onedigram - Smart Systems. Simple Growth.",
                ),
                TextVariant::new(
                    "شروط الخدمة",
                    "شروط الخدمة - Onedigram",
                    "Terms of Service",
                    "Terms of Service - Onedigram",
                ),
                TextVariant::new(
                    "سياسة الإلغاء",
                    "سياسة الإلغاء والاسترداد - Onedigram",
                    "Refund",
                    "Refund & Cancellation Policy - Onedigram",
                ),
                TextVariant::new(
                    "سياسة الخصوصية",
                    "سياسة الخصوصية - Onedigram",
                    "Privacy",
                    "Privacy Policy - Onedigram",
                ),
            ],
            descriptions: vec![TextVariant::new(
                "نبني",
                "Onedigram - نبني أنظمة ذكية بنمو بسيط. حلول SaaS وذكاء اصطناعي بدون فريق تقني داخلي.",
                "deliver SaaS",
                "We deliver SaaS and AI results without an in-house tech team.",
            )],
        }
    }
}

/// A rendered string known in both languages
///
/// The current text is recognised by containing the marker of one language
/// and replaced wholesale by the full text of the other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextVariant {
    pub ar_marker: String,
    pub ar: String,
    pub en_marker: String,
    pub en: String,
}

impl TextVariant {
    pub fn new(ar_marker: &str, ar: &str, en_marker: &str, en: &str) -> Self {
        Self {
            ar_marker: ar_marker.to_string(),
            ar: ar.to_string(),
            en_marker: en_marker.to_string(),
            en: en.to_string(),
        }
    }

    /// Marker identifying text currently rendered in `language`
    pub fn marker(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.ar_marker,
            Language::En => &self.en_marker,
        }
    }

    /// Full text in `language`
    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }

    /// Translate `current` into `target` if it is recognisably in the other language
    pub fn translate(variants: &[TextVariant], current: &str, target: Language) -> Option<String> {
        let source = target.toggled();
        variants
            .iter()
            .find(|v| current.contains(v.marker(source)))
            .map(|v| v.text(target).to_string())
    }
}

/// Element ids
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub lang_toggle: String,
    pub mobile_toggle: String,
    pub nav_menu: String,
    pub header: String,
    pub contact_form: String,
    pub name_field: String,
    pub email_field: String,
    pub message_field: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            lang_toggle: LANG_TOGGLE_ID.to_string(),
            mobile_toggle: MOBILE_TOGGLE_ID.to_string(),
            nav_menu: NAV_MENU_ID.to_string(),
            header: HEADER_ID.to_string(),
            contact_form: CONTACT_FORM_ID.to_string(),
            name_field: NAME_FIELD_ID.to_string(),
            email_field: EMAIL_FIELD_ID.to_string(),
            message_field: MESSAGE_FIELD_ID.to_string(),
        }
    }
}

/// Scroll effect configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset after which the header shadow is raised
    pub shadow_threshold: f64,
    pub shadow_raised: String,
    pub shadow_resting: String,
    /// Lookahead subtracted from section tops
    pub highlight_offset: f64,
    pub highlight_debounce_ms: u64,
    pub reveal_debounce_ms: u64,
    /// Card classes revealed when they enter the viewport
    pub reveal_classes: Vec<String>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            shadow_threshold: HEADER_SHADOW_THRESHOLD,
            shadow_raised: HEADER_SHADOW_RAISED.to_string(),
            shadow_resting: HEADER_SHADOW_RESTING.to_string(),
            highlight_offset: NAV_HIGHLIGHT_OFFSET,
            highlight_debounce_ms: NAV_HIGHLIGHT_DEBOUNCE_MS,
            reveal_debounce_ms: REVEAL_DEBOUNCE_MS,
            reveal_classes: REVEAL_CARD_CLASSES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    /// Address the `mailto:` link is addressed to
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: CONTACT_EMAIL.to_string(),
        }
    }
}
