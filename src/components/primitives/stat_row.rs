//! StatRow Component
//!
//! One footer entry of a profile card: the value on top, its label below.

use gpui::{
    div, prelude::*, px, App, ElementId, FontWeight, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use crate::theme::colors::CardColors;
use crate::theme::typography::Typography;

/// A single label/value display unit
#[derive(IntoElement)]
pub struct StatRow {
    id: ElementId,
    value: SharedString,
    label: SharedString,
}

impl StatRow {
    /// Create a stat row
    pub fn new(
        id: impl Into<ElementId>,
        value: impl Into<SharedString>,
        label: impl Into<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            label: label.into(),
        }
    }
}

impl RenderOnce for StatRow {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .id(self.id)
            .flex()
            .flex_col()
            .items_center()
            .gap_1()
            .child(
                div()
                    .text_size(px(Typography::STAT_VALUE))
                    .font_weight(FontWeight::BOLD)
                    .text_color(CardColors::text_primary())
                    .child(self.value),
            )
            .child(
                div()
                    .text_size(px(Typography::STAT_LABEL))
                    .text_color(CardColors::text_secondary())
                    .child(self.label),
            )
    }
}
