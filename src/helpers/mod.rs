//! Helper Utilities
//!
//! Common utilities used across the behaviours.

mod debounce;

pub use debounce::*;
