//! ContactFormHandler - Contact Form to `mailto:`
//!
//! The site has no backend. A valid submission is turned into a `mailto:`
//! link and handed to the visitor's e-mail client; nothing is sent from here.
//! Success therefore means "the client was asked to open", not delivery.

use std::sync::OnceLock;

use regex::Regex;
use snafu::{OptionExt, Snafu};
use tracing::{debug, info};

use crate::app::context::PageContext;
use crate::dom::{Browser, Dom};
use crate::error::{MissingElementSnafu, Result};
use crate::i18n::{Language, t};

/// Rejected contact form input
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ValidationError {
    /// Name, e-mail or message is empty
    #[snafu(display("all fields are required"))]
    MissingFields,

    /// E-mail lacks a local part, a domain with a dot, or contains whitespace
    #[snafu(display("invalid email address {email:?}"))]
    InvalidEmail { email: String },
}

impl ValidationError {
    /// Alert text in `language`
    pub fn message(&self, language: Language) -> &'static str {
        match self {
            ValidationError::MissingFields => t(language, "form-missing-fields"),
            ValidationError::InvalidEmail { .. } => t(language, "form-invalid-email"),
        }
    }
}

// U+FEFF counts as whitespace in browsers but is not Unicode White_Space
fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
    })
}

/// The three fields of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return MissingFieldsSnafu.fail();
        }
        if !email_pattern().is_match(&self.email) {
            return InvalidEmailSnafu {
                email: self.email.clone(),
            }
            .fail();
        }
        Ok(())
    }

    /// Build the `mailto:` link with a subject and body in `language`
    pub fn mailto(&self, recipient: &str, language: Language) -> String {
        let subject = t(language, "mail-subject");
        let body = format!(
            "{}: {}\n{}: {}\n\n{}:\n{}",
            t(language, "mail-name"),
            self.name,
            t(language, "mail-email"),
            self.email,
            t(language, "mail-message"),
            self.message,
        );
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(subject),
            urlencoding::encode(&body)
        )
    }
}

/// Contact form bound to its fields
pub struct ContactFormHandler<E> {
    form: E,
    name: E,
    email: E,
    message: E,
}

impl<E: Clone + PartialEq> ContactFormHandler<E> {
    /// Bind to the form and its three fields
    pub fn bind<D: Dom<Element = E>, B: Browser>(ctx: &PageContext<D, B>) -> Result<Self> {
        let ids = &ctx.config().elements;
        let dom = ctx.dom();
        let lookup = |id: &String| dom.element_by_id(id).context(MissingElementSnafu { id: id.clone() });
        Ok(Self {
            form: lookup(&ids.contact_form)?,
            name: lookup(&ids.name_field)?,
            email: lookup(&ids.email_field)?,
            message: lookup(&ids.message_field)?,
        })
    }

    pub fn form(&self) -> &E {
        &self.form
    }

    /// Read the current field values
    pub fn read<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>) -> ContactSubmission {
        let dom = ctx.dom();
        ContactSubmission {
            name: dom.field_value(&self.name),
            email: dom.field_value(&self.email),
            message: dom.field_value(&self.message),
        }
    }

    /// Validate and hand the message to the e-mail client
    ///
    /// On rejection the visitor is alerted and the form keeps its input. On
    /// success the window is pointed at the returned `mailto:` link, a
    /// confirmation is shown and the form is reset.
    pub fn submit<D: Dom<Element = E>, B: Browser>(&self, ctx: &PageContext<D, B>) -> Result<String, ValidationError> {
        let language = ctx.language();
        let submission = self.read(ctx);

        if let Err(e) = submission.validate() {
            debug!(error = %e, "Contact form rejected");
            ctx.browser().alert(e.message(language));
            return Err(e);
        }

        let link = submission.mailto(&ctx.config().contact.recipient, language);
        info!("Opening e-mail client for contact form");
        ctx.browser().navigate(&link);
        ctx.browser().alert(t(language, "form-sent"));
        ctx.dom().reset_form(&self.form);
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{MemoryBrowser, MemoryDom, NodeId};
    use crate::domain::config::SiteConfig;

    struct Fixture {
        ctx: PageContext<MemoryDom, MemoryBrowser>,
        handler: ContactFormHandler<NodeId>,
        name: NodeId,
        email: NodeId,
        message: NodeId,
    }

    fn fixture(name: &str, email: &str, message: &str) -> Fixture {
        let dom = MemoryDom::new();
        let form = dom.append(dom.root(), "form").with_id("contactForm").node();
        let name_el = dom.append(form, "input").with_id("name").node();
        let email_el = dom.append(form, "input").with_id("email").node();
        let message_el = dom.append(form, "textarea").with_id("message").node();
        dom.set_value(name_el, name);
        dom.set_value(email_el, email);
        dom.set_value(message_el, message);

        let ctx = PageContext::new(dom, MemoryBrowser::default(), SiteConfig::default());
        let handler = ContactFormHandler::bind(&ctx).expect("form present");
        Fixture {
            ctx,
            handler,
            name: name_el,
            email: email_el,
            message: message_el,
        }
    }

    #[test]
    fn test_validation_rules() {
        assert_eq!(
            ContactSubmission::new("A", "a@b.co", "").validate(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            ContactSubmission::new("A", "bad", "hi").validate(),
            Err(ValidationError::InvalidEmail { email: "bad".into() })
        );
        assert!(ContactSubmission::new("A", "a b@c.co", "hi").validate().is_err());
        assert!(ContactSubmission::new("A", "a@bco", "hi").validate().is_err());
        assert!(ContactSubmission::new("A", "a\u{FEFF}b@c.co", "hi").validate().is_err());
        assert!(ContactSubmission::new("A", "a@b.co\u{00A0}", "hi").validate().is_err());
        assert!(ContactSubmission::new("A", "a@b.co", "hi").validate().is_ok());
    }

    #[test]
    fn test_english_mailto() {
        let link = ContactSubmission::new("A", "a@b.co", "hi").mailto("hello@onedigram.com", Language::En);
        assert_eq!(
            link,
            "mailto:hello@onedigram.com?subject=Inquiry%20from%20Onedigram%20Website\
             &body=Name%3A%20A%0AEmail%3A%20a%40b.co%0A%0AMessage%3A%0Ahi"
        );
    }

    #[test]
    fn test_arabic_mailto_is_percent_encoded() {
        let link = ContactSubmission::new("A", "a@b.co", "hi").mailto("hello@onedigram.com", Language::Ar);
        assert!(link.starts_with("mailto:hello@onedigram.com?subject=%D8%A7%D8%B3%D8%AA%D9%81%D8%B3%D8%A7%D8%B1"));
        assert!(link.is_ascii());
        assert!(link.ends_with("%0Ahi"));
    }

    #[test]
    fn test_empty_message_never_navigates() {
        let f = fixture("A", "a@b.co", "");
        assert_eq!(f.handler.submit(&f.ctx), Err(ValidationError::MissingFields));

        let browser = f.ctx.browser();
        assert!(browser.navigations().is_empty());
        assert_eq!(browser.alerts(), vec!["الرجاء ملء جميع الحقول".to_string()]);
        assert_eq!(f.ctx.dom().field_value(&f.name), "A");
    }

    #[test]
    fn test_bad_email_rejected_in_active_language() {
        let f = fixture("A", "bad", "hi");
        f.ctx.set_language(Language::En);
        assert!(f.handler.submit(&f.ctx).is_err());

        assert_eq!(f.ctx.browser().alerts(), vec!["Please enter a valid email address".to_string()]);
        assert_eq!(f.ctx.dom().field_value(&f.email), "bad");
    }

    #[test]
    fn test_valid_submission_opens_client_and_clears_form() {
        let f = fixture("A", "a@b.co", "hi");
        f.ctx.set_language(Language::En);
        let link = f.handler.submit(&f.ctx).expect("valid submission");

        let browser = f.ctx.browser();
        assert!(link.starts_with("mailto:hello@onedigram.com?subject="));
        assert!(link.contains("&body=Name%3A%20A%0A"));
        assert!(link.ends_with("%0Ahi"));
        assert_eq!(browser.navigations(), vec![link]);
        assert_eq!(
            browser.alerts(),
            vec!["Thank you for reaching out! Your email client will open.".to_string()]
        );

        let dom = f.ctx.dom();
        assert_eq!(dom.field_value(&f.name), "");
        assert_eq!(dom.field_value(&f.email), "");
        assert_eq!(dom.field_value(&f.message), "");
    }

    #[test]
    fn test_bind_without_form_fails() {
        let ctx = PageContext::new(MemoryDom::new(), MemoryBrowser::default(), SiteConfig::default());
        assert!(ContactFormHandler::bind(&ctx).is_err());
    }
}
