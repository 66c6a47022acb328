//! ConfigStore - Read-only roster file loading
//!
//! The roster file is optional. Every `[[profiles]]` entry is decoded on its
//! own so one malformed profile cannot take the others down with it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use snafu::ResultExt;

use crate::constants::{APP_NAME, ROSTER_FILE_NAME};
use crate::domain::config::{AppConfig, WindowConfig};
use crate::domain::profile::ProfileAttributes;
use crate::error::{Error, InvalidProfileSnafu, IoSnafu, Result, TomlDeSnafu};

/// Outcome of reading the roster file
#[derive(Debug)]
pub struct LoadedConfig {
    /// Configuration built from the entries that decoded cleanly
    pub config: AppConfig,
    /// One error per rejected profile entry
    pub rejected: Vec<Error>,
}

/// File shape before profiles are decoded individually
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    window: WindowConfig,
    profiles: Option<Vec<toml::Value>>,
}

/// Location of the roster file in the platform config directory
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(ROSTER_FILE_NAME))
}

/// Load the roster file, `Ok(None)` when it does not exist
pub fn load_config(path: &Path) -> Result<Option<LoadedConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("No roster file at {}", path.display());
            return Ok(None);
        }
        Err(err) => return Err(err).context(IoSnafu { path }),
    };

    parse_config(&content, path).map(Some)
}

/// Parse roster file contents; `path` is only used for error reporting
pub fn parse_config(content: &str, path: &Path) -> Result<LoadedConfig> {
    let raw: RawConfig = toml::from_str(content).context(TomlDeSnafu { path })?;

    let Some(entries) = raw.profiles else {
        return Ok(LoadedConfig {
            config: AppConfig {
                window: raw.window,
                profiles: None,
            },
            rejected: Vec::new(),
        });
    };

    let mut profiles = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        match decode_profile(index, entry) {
            Ok(profile) => profiles.push(profile),
            Err(err) => {
                tracing::warn!("Skipping roster entry: {}", err);
                rejected.push(err);
            }
        }
    }

    Ok(LoadedConfig {
        config: AppConfig {
            window: raw.window,
            profiles: Some(profiles),
        },
        rejected,
    })
}

fn decode_profile(index: usize, entry: toml::Value) -> Result<ProfileAttributes> {
    let profile: ProfileAttributes = entry.try_into().map_err(|err: toml::de::Error| {
        InvalidProfileSnafu {
            index,
            message: err.message(),
        }
        .build()
    })?;

    profile.validate().map_err(|err| {
        let message = match err {
            Error::Invalid { message } => message,
            other => other.to_string(),
        };
        InvalidProfileSnafu { index, message }.build()
    })?;

    Ok(profile)
}
