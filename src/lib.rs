//! Profile Card Library
//!
//! A GPUI application that composes reusable, stateless profile cards.
//! The workspace owns the roster and passes each attribute bundle down to
//! its own `ProfileCard`; cards never reach back up.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod state;
pub mod theme;
pub mod utils;
