//! ProfileCard Component
//!
//! A reusable, stateless card rendering one profile attribute bundle.

pub mod layout;
pub mod profile_card;

pub use layout::{CardLayout, ImageNode, StatRowNode};
pub use profile_card::ProfileCard;
