//! ProfileCard Component
//!
//! Stateless presentational card: banner, avatar, name and age, location,
//! and one footer row per stat entry.

use gpui::{
    div, img, prelude::*, px, AnyElement, App, ElementId, FontWeight, ImageSource, Img,
    IntoElement, ObjectFit, ParentElement, RenderOnce, SharedString, Styled, StyledImage, Window,
};
use gpui_component::{h_flex, v_flex};

use super::layout::{CardLayout, ImageNode};
use crate::components::primitives::stat_row::StatRow;
use crate::constants::{AVATAR_BORDER, AVATAR_SIZE, CARD_BANNER_HEIGHT, CARD_WIDTH};
use crate::domain::profile::{ImageRef, ProfileAttributes};
use crate::theme::colors::CardColors;
use crate::theme::typography::Typography;

/// A profile card holding its own copy of the attribute bundle
#[derive(IntoElement)]
pub struct ProfileCard {
    id: ElementId,
    attributes: ProfileAttributes,
}

impl ProfileCard {
    /// Create a card for `attributes`
    pub fn new(id: impl Into<ElementId>, attributes: &ProfileAttributes) -> Self {
        Self {
            id: id.into(),
            attributes: attributes.clone(),
        }
    }

    /// The bundle this card displays
    pub fn attributes(&self) -> &ProfileAttributes {
        &self.attributes
    }

    /// The pure render pass
    pub fn layout(&self) -> CardLayout {
        CardLayout::from_attributes(&self.attributes)
    }
}

fn image_source(image: &ImageRef) -> ImageSource {
    match image {
        ImageRef::Asset(path) => ImageSource::from(SharedString::from(path.clone())),
        ImageRef::File(path) => ImageSource::from(path.clone()),
    }
}

/// Image element that shows its alt text when loading fails
fn image(node: ImageNode) -> Img {
    let alt = node.alt;
    img(image_source(&node.source)).with_fallback(move || {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(Typography::TEXT_XS))
            .text_color(CardColors::text_secondary())
            .child(alt.clone())
            .into_any_element()
    })
}

impl RenderOnce for ProfileCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let layout = self.layout();
        tracing::trace!(
            "Rendering profile card {} with {} stat rows",
            layout.name,
            layout.stat_rows.len()
        );

        let rows: Vec<AnyElement> = layout
            .stat_rows
            .into_iter()
            .map(|row| {
                StatRow::new(("stat-row", row.index), row.value, row.label).into_any_element()
            })
            .collect();

        let ring = AVATAR_SIZE + AVATAR_BORDER * 2.0;

        v_flex()
            .id(self.id)
            .w(px(CARD_WIDTH))
            .rounded_xl()
            .overflow_hidden()
            .bg(CardColors::card_bg())
            .shadow_lg()
            // Banner with the decorative pattern
            .child(
                div()
                    .w_full()
                    .h(px(CARD_BANNER_HEIGHT))
                    .bg(CardColors::banner_bg())
                    .child(image(layout.background).size_full().object_fit(ObjectFit::Cover)),
            )
            .child(
                v_flex()
                    .items_center()
                    // Avatar overlaps the banner by half its height
                    .child(
                        div()
                            .mt(px(-ring / 2.0))
                            .size(px(ring))
                            .p(px(AVATAR_BORDER))
                            .rounded_full()
                            .bg(CardColors::avatar_border())
                            .child(
                                image(layout.avatar)
                                    .size_full()
                                    .rounded_full()
                                    .object_fit(ObjectFit::Cover),
                            ),
                    )
                    .child(
                        h_flex()
                            .mt_4()
                            .gap_2()
                            .text_size(px(Typography::CARD_NAME))
                            .child(
                                div()
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(CardColors::text_primary())
                                    .child(layout.name),
                            )
                            .child(
                                div()
                                    .text_color(CardColors::text_secondary())
                                    .child(layout.age),
                            ),
                    )
                    .child(
                        div()
                            .mt_1()
                            .text_size(px(Typography::CARD_LOCATION))
                            .text_color(CardColors::text_secondary())
                            .child(layout.location),
                    )
                    // Footer: one row per stat, in input order
                    .child(
                        h_flex()
                            .w_full()
                            .mt_6()
                            .py_5()
                            .justify_around()
                            .border_t_1()
                            .border_color(CardColors::divider())
                            .children(rows),
                    ),
            )
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

    fn rhoda() -> ProfileAttributes {
        ProfileAttributes::new(
            "Rhoda Korantemaa",
            23,
            "Accra",
            ImageRef::asset("images/avatar-rhoda.svg"),
        )
        .with_stat("Followers", "15K")
        .with_stat("Likes", "40K")
        .with_stat("Photos", "500")
    }

    #[test]
    fn card_owns_a_copy_of_its_bundle() {
        let victor_bundle = victor();
        let rhoda_bundle = rhoda();

        let victor_card = ProfileCard::new(("profile-card", 0usize), &victor_bundle);
        let rhoda_card = ProfileCard::new(("profile-card", 1usize), &rhoda_bundle);
        let victor_before = victor_card.layout();
        let rhoda_before = rhoda_card.layout();

        // Rebuild one bundle after both cards exist.
        let victor_bundle = victor_bundle.with_stat("Posts", "12");
        assert_eq!(victor_bundle.stats().len(), 4);

        assert_eq!(victor_card.layout(), victor_before);
        assert_eq!(victor_card.layout().stat_rows.len(), 3);
        assert_eq!(rhoda_card.layout(), rhoda_before);
    }

    #[test]
    fn identical_bundles_give_identical_layouts() {
        let a = ProfileCard::new("a", &victor());
        let b = ProfileCard::new("b", &victor());
        assert_eq!(a.layout(), b.layout());
        assert_ne!(a.layout(), ProfileCard::new("c", &rhoda()).layout());
    }
}
