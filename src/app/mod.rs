//! Application Layer
//!
//! Contains app initialization, window management, global entities, and the
//! workspace that composes the profile cards.

pub mod application;
pub mod entities;
pub mod roster;
pub mod workspace;
