//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and describe what gets displayed.

pub mod config;
pub mod profile;
