//! Features - Page Behaviours
//!
//! One capability object per behaviour. Each method takes the shared
//! [`PageContext`](crate::app::context::PageContext) so it can be driven
//! directly from tests without dispatching browser events.

pub mod contact;
pub mod faq;
pub mod language;
pub mod lazy_images;
pub mod navigation;
pub mod scroll;
