//! Onedigram Website Library
//!
//! Client-side behaviour for the Onedigram marketing site: bilingual
//! (Arabic/English) switching, mobile navigation, scroll effects, the FAQ
//! accordion, the `mailto:` contact form and lazy image loading.
//!
//! Behaviours are written against the [`dom::Dom`] and [`dom::Browser`]
//! seams so they run natively under test. The `web` feature adds the
//! web-sys backend and the wasm entry point.

pub mod app;
pub mod constants;
pub mod dom;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod logging;
pub mod utils;

#[cfg(feature = "web")]
pub mod web;

pub use app::application::PageController;
pub use error::{Error, Result};
