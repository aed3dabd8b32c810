//! Domain - Pure Data Structures
//!
//! These types don't depend on the browser and describe the site itself.

pub mod config;
