//! RosterState - The Profiles Shown by the Workspace

use std::path::PathBuf;

use crate::app::roster::ResolvedRoster;
use crate::domain::profile::ProfileAttributes;
use crate::error::Result;

/// Where the current roster came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RosterSource {
    /// Literal data compiled into the binary
    #[default]
    Builtin,
    /// The roster file at this path
    File(PathBuf),
}

/// State for the list of profile bundles
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    /// Profiles in display order
    profiles: Vec<ProfileAttributes>,
    /// Origin of `profiles`
    source: RosterSource,
    /// How many times the roster has been replaced
    generation: u64,
}

impl RosterState {
    /// Create a state holding `profiles`
    pub fn new(profiles: Vec<ProfileAttributes>, source: RosterSource) -> Self {
        Self {
            profiles,
            source,
            generation: 0,
        }
    }

    /// Profiles in display order
    pub fn profiles(&self) -> &[ProfileAttributes] {
        &self.profiles
    }

    /// Origin of the current roster
    pub fn source(&self) -> &RosterSource {
        &self.source
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Discard the current roster in favour of a new one
    pub fn replace(&mut self, profiles: Vec<ProfileAttributes>, source: RosterSource) {
        self.profiles = profiles;
        self.source = source;
        self.generation += 1;
    }

    /// Apply the outcome of re-reading the roster file
    ///
    /// On error the current roster, source and generation are kept.
    /// Returns whether the roster was replaced.
    pub fn apply_reload(&mut self, reloaded: Result<ResolvedRoster>) -> bool {
        match reloaded {
            Ok(resolved) => {
                tracing::info!("Reloaded roster with {} profile(s)", resolved.profiles.len());
                self.replace(resolved.profiles, resolved.source);
                true
            }
            Err(err) => {
                tracing::error!("Failed to reload roster, keeping current profiles: {}", err);
                false
            }
        }
    }
}
