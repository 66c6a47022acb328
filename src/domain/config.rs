//! Config - Application Configuration

use serde::Deserialize;

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE, DEFAULT_WINDOW_WIDTH};
use crate::domain::profile::ProfileAttributes;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Main window settings
    pub window: WindowConfig,
    /// Profiles to show; `None` means the built-in roster
    pub profiles: Option<Vec<ProfileAttributes>>,
}

/// Main window configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in pixels
    pub width: f32,
    /// Initial height in pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}
