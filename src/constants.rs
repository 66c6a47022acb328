//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Application name, also used for the config directory
pub const APP_NAME: &str = "profile-card";

/// Roster file inside the config directory
pub const ROSTER_FILE_NAME: &str = "profiles.toml";

/// Default window dimensions
pub const DEFAULT_WINDOW_TITLE: &str = "Profile Cards";
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Card geometry
pub const CARD_WIDTH: f32 = 350.0;
pub const CARD_BANNER_HEIGHT: f32 = 140.0;
pub const AVATAR_SIZE: f32 = 96.0;
pub const AVATAR_BORDER: f32 = 5.0;

/// Gap between cards in the gallery
pub const GALLERY_GAP: f32 = 32.0;
