//! Selector - Typed CSS Selectors
//!
//! The controller only needs compound selectors (`tag.class[attr...]`).
//! A [`Selector`] renders to CSS for `querySelectorAll` and can also be
//! matched directly against element data for the in-memory document.

use std::fmt;

/// Attribute condition within a selector
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrFilter {
    /// `[name]`
    Present(String),
    /// `[name="value"]`
    Equals(String, String),
    /// `[name^="value"]`
    Prefix(String, String),
}

impl AttrFilter {
    fn name(&self) -> &str {
        match self {
            AttrFilter::Present(name) | AttrFilter::Equals(name, _) | AttrFilter::Prefix(name, _) => name,
        }
    }

    fn accepts(&self, value: &str) -> bool {
        match self {
            AttrFilter::Present(_) => true,
            AttrFilter::Equals(_, expected) => value == expected,
            AttrFilter::Prefix(_, prefix) => value.starts_with(prefix.as_str()),
        }
    }
}

/// A compound selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrFilter>,
}

impl Selector {
    /// `tag`
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_ascii_lowercase()),
            ..Self::default()
        }
    }

    /// `.class`
    pub fn class(class: &str) -> Self {
        Self::default().and_class(class)
    }

    /// `[name]`
    pub fn attr(name: &str) -> Self {
        Self::default().with_attr(name)
    }

    pub fn and_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str) -> Self {
        self.attrs.push(AttrFilter::Present(name.to_string()));
        self
    }

    pub fn attr_eq(mut self, name: &str, value: &str) -> Self {
        self.attrs.push(AttrFilter::Equals(name.to_string(), value.to_string()));
        self
    }

    pub fn attr_prefix(mut self, name: &str, prefix: &str) -> Self {
        self.attrs.push(AttrFilter::Prefix(name.to_string(), prefix.to_string()));
        self
    }

    /// Check an element described by its tag, classes and attribute lookup
    pub fn matches<'a>(
        &self,
        tag: &str,
        classes: &[String],
        attribute: impl Fn(&str) -> Option<&'a str>,
    ) -> bool {
        if let Some(expected) = &self.tag
            && !expected.eq_ignore_ascii_case(tag)
        {
            return false;
        }

        if !self.classes.iter().all(|c| classes.contains(c)) {
            return false;
        }

        self.attrs
            .iter()
            .all(|filter| attribute(filter.name()).is_some_and(|value| filter.accepts(value)))
    }
}

/// Escape a value for use inside a double-quoted CSS string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for filter in &self.attrs {
            match filter {
                AttrFilter::Present(name) => write!(f, "[{name}]")?,
                AttrFilter::Equals(name, value) => write!(f, "[{name}=\"{}\"]", escape(value))?,
                AttrFilter::Prefix(name, value) => write!(f, "[{name}^=\"{}\"]", escape(value))?,
            }
        }
        if self.tag.is_none() && self.classes.is_empty() && self.attrs.is_empty() {
            f.write_str("*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_css() {
        assert_eq!(Selector::tag("a").attr_prefix("href", "#").to_string(), r##"a[href^="#"]"##);
        assert_eq!(
            Selector::class("lang-section").attr_eq("data-lang", "en").to_string(),
            r#".lang-section[data-lang="en"]"#
        );
        assert_eq!(Selector::tag("section").with_attr("id").to_string(), "section[id]");
        assert_eq!(Selector::default().to_string(), "*");
    }

    #[test]
    fn test_matches_compound() {
        let classes = vec!["nav-link".to_string(), "active".to_string()];
        let href = |name: &str| (name == "href").then_some("#about");

        assert!(Selector::class("nav-link").attr_eq("href", "#about").matches("a", &classes, href));
        assert!(!Selector::class("nav-link").attr_eq("href", "#faq").matches("a", &classes, href));
        assert!(!Selector::tag("img").matches("a", &classes, href));
        assert!(Selector::tag("A").attr_prefix("href", "#").matches("a", &classes, href));
        assert!(!Selector::attr("data-en").matches("a", &classes, href));
    }
}
