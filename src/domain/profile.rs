//! Profile - The attribute bundle handed to a profile card

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Opaque reference to an image resource
///
/// The card never loads the image itself, it only forwards the reference
/// to the image primitive which resolves it through the asset source or
/// the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRef {
    /// Path of an image embedded in the binary (see `assets.rs`)
    Asset(String),
    /// Image file on disk
    File(PathBuf),
}

impl ImageRef {
    /// Reference an embedded asset
    pub fn asset(path: impl Into<String>) -> Self {
        ImageRef::Asset(path.into())
    }

    /// Reference a file on disk
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageRef::File(path.into())
    }
}

/// A single label/value pair shown in the card footer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    label: String,
    value: String,
}

impl StatEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Everything a profile card displays
///
/// Built once through the consuming `with_*` methods and read-only after
/// that. Stat order is display order; labels may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileAttributes {
    name: String,
    age: u32,
    location: String,
    image: ImageRef,
    stats: Vec<StatEntry>,
}

impl ProfileAttributes {
    /// Create a bundle with no stats
    pub fn new(
        name: impl Into<String>,
        age: u32,
        location: impl Into<String>,
        image: ImageRef,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            location: location.into(),
            image,
            stats: Vec::new(),
        }
    }

    /// Append one stat entry
    pub fn with_stat(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.stats.push(StatEntry::new(label, value));
        self
    }

    /// Append several stat entries, keeping their order
    pub fn with_stats(mut self, stats: impl IntoIterator<Item = StatEntry>) -> Self {
        self.stats.extend(stats);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age is not range-checked; whatever was supplied is displayed.
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn stats(&self) -> &[StatEntry] {
        &self.stats
    }

    /// Check the only constraint the bundle carries: a non-blank name
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Invalid {
                message: "profile name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn victor() -> ProfileAttributes {
        ProfileAttributes::new(
            "Victor Crest",
            26,
            "London",
            ImageRef::asset("images/avatar-victor.svg"),
        )
        .with_stat("Followers", "80K")
        .with_stat("Likes", "803K")
        .with_stat("Photos", "1.4K")
    }

    #[test]
    fn builder_keeps_stat_order() {
        let profile = victor();
        let labels: Vec<_> = profile.stats().iter().map(StatEntry::label).collect();
        assert_eq!(labels, vec!["Followers", "Likes", "Photos"]);
        assert_eq!(profile.stats()[1].value(), "803K");
    }

    #[test]
    fn duplicate_labels_are_kept() {
        let profile = ProfileAttributes::new("A", 1, "B", ImageRef::asset("x.svg"))
            .with_stat("Likes", "1")
            .with_stats([StatEntry::new("Likes", "2")]);
        assert_eq!(profile.stats().len(), 2);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let profile = ProfileAttributes::new("   ", 30, "Paris", ImageRef::asset("x.svg"));
        assert!(profile.validate().is_err());
        assert!(victor().validate().is_ok());
    }

    #[test]
    fn out_of_range_age_is_accepted() {
        let profile =
            ProfileAttributes::new("Old Timer", 4_000, "Nowhere", ImageRef::asset("x.svg"));
        assert!(profile.validate().is_ok());
        assert_eq!(profile.age(), 4_000);
    }

    #[test]
    fn deserialize_from_toml() {
        let profile: ProfileAttributes = toml::from_str(
            r#"
            name = "Rhoda Korantemaa"
            age = 23
            location = "Accra"
            image = { file = "/tmp/rhoda.png" }
            stats = [
                { label = "Followers", value = "15K" },
                { label = "Likes", value = "40K" },
            ]
            "#,
        )
        .expect("valid profile");

        assert_eq!(profile.name(), "Rhoda Korantemaa");
        assert_eq!(profile.image(), &ImageRef::file("/tmp/rhoda.png"));
        assert_eq!(profile.stats()[0], StatEntry::new("Followers", "15K"));
    }

    #[test]
    fn deserialize_rejects_stat_without_value() {
        let result: std::result::Result<ProfileAttributes, _> = toml::from_str(
            r#"
            name = "Broken"
            age = 1
            location = "Here"
            image = { asset = "x.svg" }
            stats = [{ label = "Followers" }]
            "#,
        );
        assert!(result.is_err());
    }
}
