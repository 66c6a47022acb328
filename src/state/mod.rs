//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state
//! held in a GPUI entity and observed by the views that render it.

pub mod roster_state;
