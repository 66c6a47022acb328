//! Card Layout
//!
//! A GPUI-independent description of everything a profile card shows.
//! `ProfileCard` lowers it into elements; tests compare it directly.

use gpui::SharedString;

use crate::domain::profile::{ImageRef, ProfileAttributes};

/// Decorative pattern shown in the card banner
pub const BACKGROUND_ASSET: &str = "images/bg-pattern-card.svg";
/// Alt text of the banner pattern
pub const BACKGROUND_ALT: &str = "Card Background";

/// An image plus the text shown when it cannot be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    pub source: ImageRef,
    pub alt: SharedString,
}

/// One footer row; `index` is its position in the input sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRowNode {
    pub index: usize,
    pub value: SharedString,
    pub label: SharedString,
}

/// The visual tree of one card, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub background: ImageNode,
    pub avatar: ImageNode,
    pub name: SharedString,
    pub age: SharedString,
    pub location: SharedString,
    pub stat_rows: Vec<StatRowNode>,
}

impl CardLayout {
    /// Build the tree in a single pass over the stats
    pub fn from_attributes(attributes: &ProfileAttributes) -> Self {
        let name = SharedString::from(attributes.name().to_string());

        let stat_rows = attributes
            .stats()
            .iter()
            .enumerate()
            .map(|(index, stat)| StatRowNode {
                index,
                value: stat.value().to_string().into(),
                label: stat.label().to_string().into(),
            })
            .collect();

        Self {
            background: ImageNode {
                source: ImageRef::asset(BACKGROUND_ASSET),
                alt: SharedString::from(BACKGROUND_ALT),
            },
            avatar: ImageNode {
                source: attributes.image().clone(),
                alt: name.clone(),
            },
            name,
            age: attributes.age().to_string().into(),
            location: attributes.location().to_string().into(),
            stat_rows,
        }
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

    fn rows(layout: &CardLayout) -> Vec<(usize, &str, &str)> {
        layout
            .stat_rows
            .iter()
            .map(|row| (row.index, row.label.as_str(), row.value.as_str()))
            .collect()
    }

    #[test]
    fn victor_crest_scenario() {
        let layout = CardLayout::from_attributes(&victor());

        assert_eq!(layout.name.as_str(), "Victor Crest");
        assert_eq!(layout.age.as_str(), "26");
        assert_eq!(layout.location.as_str(), "London");
        assert_eq!(
            rows(&layout),
            vec![(0, "Followers", "80K"), (1, "Likes", "803K"), (2, "Photos", "1.4K")]
        );
    }

    #[test]
    fn empty_stats_render_no_rows() {
        let profile = ProfileAttributes::new(
            "Solo",
            40,
            "Lisbon",
            ImageRef::asset("images/avatar-rhoda.svg"),
        );
        let layout = CardLayout::from_attributes(&profile);

        assert!(layout.stat_rows.is_empty());
        assert_eq!(layout.name.as_str(), "Solo");
        assert_eq!(layout.age.as_str(), "40");
        assert_eq!(layout.location.as_str(), "Lisbon");
    }

    #[test]
    fn one_row_per_stat_in_input_order() {
        let labels = ["d", "a", "c", "a", "b", "e", "a"];
        let empty = ProfileAttributes::new("Many", 1, "X", ImageRef::asset("x.svg"));
        let profile = labels
            .iter()
            .enumerate()
            .fold(empty, |p, (i, label)| p.with_stat(*label, i.to_string()));

        let layout = CardLayout::from_attributes(&profile);

        assert_eq!(layout.stat_rows.len(), labels.len());
        for (i, row) in layout.stat_rows.iter().enumerate() {
            assert_eq!(row.index, i);
            assert_eq!(row.label.as_str(), labels[i]);
            assert_eq!(row.value.as_str(), i.to_string());
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let profile = victor();
        let first = CardLayout::from_attributes(&profile);
        for _ in 0..10 {
            assert_eq!(CardLayout::from_attributes(&profile), first);
        }
    }

    #[test]
    fn avatar_alt_is_the_name() {
        let layout = CardLayout::from_attributes(&victor());

        assert_eq!(layout.avatar.alt.as_str(), "Victor Crest");
        assert_eq!(layout.avatar.source, ImageRef::asset("images/avatar-victor.svg"));
        assert_eq!(layout.background.alt.as_str(), BACKGROUND_ALT);
        assert_eq!(layout.background.source, ImageRef::asset(BACKGROUND_ASSET));
    }

    #[test]
    fn age_is_rendered_verbatim() {
        let profile = ProfileAttributes::new("Ancient", 950, "Ur", ImageRef::asset("x.svg"));
        let layout = CardLayout::from_attributes(&profile);
        assert_eq!(layout.age.as_str(), "950");
    }
}
