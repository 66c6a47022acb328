//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access.

use gpui::{App, AppContext, Entity, Global};

use crate::state::roster_state::RosterState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Profiles shown by the workspace
    pub roster: Entity<RosterState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities
    pub fn init(roster: RosterState, cx: &mut App) -> Self {
        Self {
            roster: cx.new(|_| roster),
        }
    }
}
