//! Composite Components
//!
//! Components assembled from primitives.

pub mod profile_card;
