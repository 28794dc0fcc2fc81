// SPDX-License-Identifier: MPL-2.0
//! Opening stage: the loader clip looping edge to edge.

use super::backdrop;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{image, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Renders the loader stage.
///
/// A startup notice (clip resolution failure) renders as a caption along
/// the bottom edge; the stage itself keeps running regardless.
pub fn view<'a, M: 'a>(
    frame: Option<&image::Handle>,
    notice: Option<&'a str>,
) -> Element<'a, M> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop(frame));

    if let Some(notice) = notice {
        layers = layers.push(
            Container::new(
                Text::new(notice)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::LG),
        );
    }

    layers.into()
}
