//! Page Constants
//!
//! Default thresholds, timings and DOM names shared by the behaviours.
//! Every value here can be overridden through [`crate::domain::config::SiteConfig`].

/// Storage slot holding the visitor's language preference
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Recipient of the contact form `mailto:` link
pub const CONTACT_EMAIL: &str = "hello@onedigram.com";

/// Scroll offset (px) after which the header gets its raised shadow
pub const HEADER_SHADOW_THRESHOLD: f64 = 100.0;

/// Lookahead (px) subtracted from section tops when highlighting nav links
pub const NAV_HIGHLIGHT_OFFSET: f64 = 100.0;

/// Debounce windows for scroll-driven work
pub const NAV_HIGHLIGHT_DEBOUNCE_MS: u64 = 100;
pub const REVEAL_DEBOUNCE_MS: u64 = 50;

/// Header shadow styles
pub const HEADER_SHADOW_RAISED: &str = "0 4px 20px rgba(11, 37, 69, 0.15)";
pub const HEADER_SHADOW_RESTING: &str = "0 4px 20px rgba(11, 37, 69, 0.08)";

/// Element ids the page markup provides
pub const LANG_TOGGLE_ID: &str = "langToggle";
pub const MOBILE_TOGGLE_ID: &str = "mobileToggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const HEADER_ID: &str = "header";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const MESSAGE_FIELD_ID: &str = "message";

/// Class toggled on open/active/loaded elements
pub const ACTIVE_CLASS: &str = "active";
pub const LOADED_CLASS: &str = "loaded";
pub const AOS_ANIMATE_CLASS: &str = "aos-animate";

/// Card classes revealed on scroll
pub const REVEAL_CARD_CLASSES: [&str; 4] = ["service-card", "pricing-card", "why-card", "case-card"];

/// Observer settings for `data-aos` entrance animations
pub const AOS_THRESHOLD: f64 = 0.1;
pub const AOS_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// `<script type="application/json">` holding site configuration overrides
pub const SITE_CONFIG_ID: &str = "site-config";
