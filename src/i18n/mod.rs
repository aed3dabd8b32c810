//! i18n - Internationalization Module
//!
//! The site ships in Arabic and English. Page copy lives in the markup
//! (`data-en` attributes); this module only carries the strings the
//! controller produces itself: alerts and the contact e-mail template.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic, the language the markup is authored in
    #[default]
    Ar,
    /// English
    En,
}

impl Language {
    /// Storage / `lang` attribute code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Text direction written to the `dir` attribute
    pub fn dir(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }

    /// The other language
    pub fn toggled(&self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a stored language code is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code {:?}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, ar))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Contact form alerts
    map.insert("form-missing-fields", ("Please fill in all fields", "الرجاء ملء جميع الحقول"));
    map.insert(
        "form-invalid-email",
        ("Please enter a valid email address", "الرجاء إدخال بريد إلكتروني صحيح"),
    );
    map.insert(
        "form-sent",
        (
            "Thank you for reaching out! Your email client will open.",
            "شكرًا لتواصلك! سيتم فتح برنامج البريد الإلكتروني الخاص بك.",
        ),
    );

    // Contact e-mail template
    map.insert("mail-subject", ("Inquiry from Onedigram Website", "استفسار من موقع Onedigram"));
    map.insert("mail-name", ("Name", "الاسم"));
    map.insert("mail-email", ("Email", "البريد الإلكتروني"));
    map.insert("mail-message", ("Message", "الرسالة"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
///
/// Unknown keys fall back to the key itself.
pub fn t<'a>(language: Language, key: &'a str) -> &'a str {
    match translations().get(key) {
        Some(&(en, ar)) => match language {
            Language::En => en,
            Language::Ar => ar,
        },
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("ar".parse::<Language>(), Ok(Language::Ar));
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
        assert!("EN".parse::<Language>().is_err());
    }

    #[test]
    fn test_direction_follows_language() {
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::Ar.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_translate_and_fallback() {
        assert_eq!(t(Language::En, "mail-name"), "Name");
        assert_eq!(t(Language::Ar, "mail-name"), "الاسم");
        assert_eq!(t(Language::En, "no-such-key"), "no-such-key");
    }

    #[test]
    fn test_serde_lowercase() {
        let lang: Language = serde_json::from_str("\"en\"").expect("parse");
        assert_eq!(lang, Language::En);
        assert_eq!(serde_json::to_string(&Language::Ar).expect("serialize"), "\"ar\"");
    }
}
