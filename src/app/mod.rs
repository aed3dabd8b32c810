//! Application Layer
//!
//! Contains the page controller and the context shared by every behaviour.

pub mod application;
pub mod context;
