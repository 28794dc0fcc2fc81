// SPDX-License-Identifier: MPL-2.0
//! Closing stage: a static informational panel over the feature clip
//! looping behind a darkened veil. Entry plays a one-shot fade and rise.

use super::{backdrop, veil};
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Column, Container, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding};
use std::time::Duration;

/// Length of the entry fade/rise transition.
pub const ENTRY: Duration = Duration::from_millis(800);

/// How far the panel rises while the entry transition runs, in pixels.
const ENTRY_RISE: f32 = 20.0;

/// Fixed measure for the description column, so long copy wraps instead of
/// spanning the window.
const BODY_WIDTH: f32 = 384.0;

/// Context required to render the closing overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: Option<&'a image::Handle>,
    /// Eased entry progress in `[0, 1]`; drives the fade and rise.
    pub entry: f32,
}

/// Renders the closing overlay stage.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let entry = ctx.entry.clamp(0.0, 1.0);

    let monogram = Container::new(
        Text::new(ctx.i18n.tr("overlay-monogram")).size(typography::MONOGRAM),
    )
    .width(Length::Fixed(sizing::MONOGRAM))
    .height(Length::Fixed(sizing::MONOGRAM))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::monogram_disc);

    let title = Text::new(ctx.i18n.tr("overlay-title"))
        .size(typography::TITLE_LG)
        .color(Color {
            a: entry,
            ..palette::WHITE
        });

    let body = Text::new(ctx.i18n.tr("overlay-body"))
        .size(typography::BODY_LG)
        .color(Color {
            a: entry,
            ..palette::GRAY_200
        })
        .width(Length::Fixed(BODY_WIDTH))
        .align_x(alignment::Horizontal::Center);

    let panel = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(monogram)
        .push(title)
        .push(body);

    let anchored = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            bottom: spacing::LG + ENTRY_RISE * entry,
            ..Padding::ZERO
        });

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop(ctx.frame))
        .push(veil(opacity::OVERLAY_BACKDROP * entry))
        .push(anchored)
        .into()
}
