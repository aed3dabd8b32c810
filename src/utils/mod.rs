//! Utilities
//!
//! Storage for the visitor's language preference.

pub mod preference_store;
