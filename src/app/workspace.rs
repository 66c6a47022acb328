//! Workspace - The Composer
//!
//! Root view of the window. It owns no display logic of its own: it reads
//! the roster and hands each bundle to its own `ProfileCard`.

use gpui::{
    div, prelude::*, px, AnyElement, Context, IntoElement, ParentElement, Render, Styled,
    Subscription, Window,
};
use gpui_component::{h_flex, v_flex};

use crate::app::entities::AppEntities;
use crate::components::composite::profile_card::ProfileCard;
use crate::constants::GALLERY_GAP;
use crate::domain::profile::ProfileAttributes;
use crate::theme::colors::CardColors;
use crate::theme::typography::Typography;

/// One card per bundle, in roster order
pub fn compose(profiles: &[ProfileAttributes]) -> Vec<ProfileCard> {
    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| ProfileCard::new(("profile-card", index), profile))
        .collect()
}

/// Main workspace containing the card gallery
pub struct Workspace {
    entities: AppEntities,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Re-render wholesale whenever the roster is replaced
        let subscriptions = vec![cx.observe(&entities.roster, |_this, roster, cx| {
            tracing::debug!(
                "Roster changed (generation {}), re-rendering",
                roster.read(cx).generation()
            );
            cx.notify();
        })];

        Self {
            entities,
            _subscriptions: subscriptions,
        }
    }

    fn render_empty(&self) -> AnyElement {
        v_flex()
            .items_center()
            .gap_2()
            .text_color(CardColors::text_light())
            .child(div().text_size(px(Typography::TEXT_LG)).child("No profiles to show"))
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .child("Add [[profiles]] entries to the roster file and press Reload"),
            )
            .into_any_element()
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let cards = compose(self.entities.roster.read(cx).profiles());

        let content = if cards.is_empty() {
            self.render_empty()
        } else {
            h_flex()
                .flex_wrap()
                .items_start()
                .justify_center()
                .gap(px(GALLERY_GAP))
                .children(cards)
                .into_any_element()
        };

        div()
            .id("workspace")
            .size_full()
            .overflow_y_scroll()
            .bg(CardColors::background())
            .flex()
            .justify_center()
            .p_8()
            .child(content)
    }
}
