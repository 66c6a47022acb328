//! Primitive Components
//!
//! Basic building blocks composed by the larger components.

pub mod stat_row;
