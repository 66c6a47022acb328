//! Embedded assets for Profile Card
//!
//! Uses rust-embed to bundle the card images at compile time.

use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::roster::builtin_roster;
    use crate::components::composite::profile_card::layout::BACKGROUND_ASSET;
    use crate::domain::profile::ImageRef;

    #[test]
    fn card_images_are_embedded() {
        assert!(Assets.load(BACKGROUND_ASSET).expect("load").is_some());

        for profile in builtin_roster() {
            if let ImageRef::Asset(path) = profile.image() {
                assert!(Assets.load(path).expect("load").is_some(), "{path} missing");
            }
        }
    }

    #[test]
    fn unknown_asset_is_an_error() {
        assert!(Assets.load("images/nope.svg").is_err());
        assert!(matches!(Assets.load(""), Ok(None)));
    }

    #[test]
    fn list_filters_by_prefix() {
        let images = Assets.list("images/").expect("list");
        assert!(images.iter().any(|p| p.as_str() == BACKGROUND_ASSET));
    }
}
