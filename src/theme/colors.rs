//! Colors - Profile Card Theme Colors

use gpui::{rgb, Rgba};

/// Card color palette - All colors are accessed via associated functions
pub struct CardColors;

impl CardColors {
    // Background colors
    /// Window background - Dark cyan
    pub fn background() -> Rgba { rgb(0x19a2ae) }
    /// Card surface
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Banner fallback behind the decorative pattern
    pub fn banner_bg() -> Rgba { rgb(0x6ad2d7) }

    // Text colors
    /// Name and stat values - Dark desaturated blue
    pub fn text_primary() -> Rgba { rgb(0x2e3349) }
    /// Age, location and stat labels - Dark grayish blue
    pub fn text_secondary() -> Rgba { rgb(0x6b7082) }
    /// Empty-state text on the window background
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Border colors
    /// Avatar ring
    pub fn avatar_border() -> Rgba { rgb(0xffffff) }
    /// Footer divider
    pub fn divider() -> Rgba { rgb(0xe8e9ec) }
}
