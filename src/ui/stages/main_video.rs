// SPDX-License-Identifier: MPL-2.0
//! Main stage: the feature clip playing once through, with a caption and a
//! slim progress track along the bottom edge.

use super::backdrop;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Column, Container, Space, Stack, Text};
use iced::{alignment, Element, Length, Padding};

/// Context required to render the main video stage.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: Option<&'a image::Handle>,
    /// Completion percentage. The track fill saturates at its full width;
    /// the value itself can exceed 100 when the clip reports no duration.
    pub progress: f64,
}

/// Renders the main video stage.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let caption = Text::new(ctx.i18n.tr("feature-caption"))
        .size(typography::BODY)
        .color(palette::WHITE);

    let fill_ratio = (ctx.progress / 100.0).clamp(0.0, 1.0) as f32;
    let fill = Container::new(
        Space::new()
            .width(Length::Fixed(sizing::PROGRESS_TRACK_WIDTH * fill_ratio))
            .height(Length::Fixed(sizing::PROGRESS_TRACK_HEIGHT)),
    )
    .style(styles::progress_fill);

    let track = Container::new(fill)
        .width(Length::Fixed(sizing::PROGRESS_TRACK_WIDTH))
        .height(Length::Fixed(sizing::PROGRESS_TRACK_HEIGHT))
        .style(styles::progress_track);

    let hud = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(caption)
        .push(track);

    let anchored = Container::new(hud)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            bottom: spacing::XL,
            ..Padding::ZERO
        });

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop(ctx.frame))
        .push(anchored)
        .into()
}
