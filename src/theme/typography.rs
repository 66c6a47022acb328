//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_LG: f32 = 18.0;

    // Card roles
    pub const CARD_NAME: f32 = Self::TEXT_LG;
    pub const CARD_LOCATION: f32 = Self::TEXT_SM;
    pub const STAT_VALUE: f32 = Self::TEXT_LG;
    pub const STAT_LABEL: f32 = Self::TEXT_XS;
}
