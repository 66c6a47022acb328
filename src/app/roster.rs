//! Roster - The Data the Workspace Composes
//!
//! Built-in demonstration profiles plus resolution of the optional roster
//! file into the initial window settings and profile list.

use std::path::Path;

use crate::domain::config::WindowConfig;
use crate::domain::profile::{ImageRef, ProfileAttributes};
use crate::error::{Error, Result};
use crate::state::roster_state::{RosterSource, RosterState};
use crate::utils::config_store::{config_path, load_config, LoadedConfig};

/// The two demonstration profiles
pub fn builtin_roster() -> Vec<ProfileAttributes> {
    vec![
        ProfileAttributes::new(
            "Victor Crest",
            26,
            "London",
            ImageRef::asset("images/avatar-victor.svg"),
        )
        .with_stat("Followers", "80K")
        .with_stat("Likes", "803K")
        .with_stat("Photos", "1.4K"),
        ProfileAttributes::new(
            "Rhoda Korantemaa",
            23,
            "Accra",
            ImageRef::asset("images/avatar-rhoda.svg"),
        )
        .with_stat("Followers", "15K")
        .with_stat("Likes", "40K")
        .with_stat("Photos", "500"),
    ]
}

/// Window settings and roster resolved at startup or reload
#[derive(Debug, Clone)]
pub struct ResolvedRoster {
    pub window: WindowConfig,
    pub profiles: Vec<ProfileAttributes>,
    pub source: RosterSource,
}

impl ResolvedRoster {
    /// Default window with the built-in profiles
    pub fn builtin() -> Self {
        Self {
            window: WindowConfig::default(),
            profiles: builtin_roster(),
            source: RosterSource::Builtin,
        }
    }

    /// Combine a (possibly absent) roster file with the built-in fallbacks
    pub fn from_loaded(path: &Path, loaded: Option<LoadedConfig>) -> Self {
        let Some(loaded) = loaded else {
            return Self::builtin();
        };

        if !loaded.rejected.is_empty() {
            tracing::warn!(
                "{} profile(s) in {} were rejected",
                loaded.rejected.len(),
                path.display()
            );
        }

        match loaded.config.profiles {
            Some(profiles) => Self {
                window: loaded.config.window,
                profiles,
                source: RosterSource::File(path.to_path_buf()),
            },
            None => Self {
                window: loaded.config.window,
                ..Self::builtin()
            },
        }
    }

    /// Turn into the entity state
    pub fn into_state(self) -> RosterState {
        RosterState::new(self.profiles, self.source)
    }
}

/// Read the roster file from the platform config directory
pub fn read_roster() -> Result<ResolvedRoster> {
    let path = config_path().ok_or_else(|| Error::Invalid {
        message: "could not determine the config directory".to_string(),
    })?;
    let loaded = load_config(&path)?;
    let resolved = ResolvedRoster::from_loaded(&path, loaded);

    tracing::info!(
        "Roster resolved: {} profile(s) from {:?}",
        resolved.profiles.len(),
        resolved.source
    );
    Ok(resolved)
}
