// SPDX-License-Identifier: MPL-2.0
//! Enter prompt stage: the loader clip keeps looping behind a labeled
//! activation control anchored near the bottom edge.
//!
//! Activation immediately starts the fade-out; while it runs, a black veil
//! rises over the whole stage until the flow switches to the feature clip.

use super::{backdrop, veil};
use crate::config::PromptStyle;
use crate::experience;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, image, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Padding};

/// Context required to render the enter prompt.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: Option<&'a image::Handle>,
    /// Fade-out veil alpha in `[0, 1]`; `0.0` before activation.
    pub veil_alpha: f32,
    /// Cosmetic variant of the control; both emit the same activation.
    pub style: PromptStyle,
}

/// Renders the enter prompt stage.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, experience::Message> {
    let label = Text::new(ctx.i18n.tr("enter-button")).size(typography::BODY);

    let control = match ctx.style {
        PromptStyle::Badge => {
            let circle = Container::new(icons::sized(icons::arrow(), sizing::ICON_SM))
                .width(Length::Fixed(sizing::ENTER_BADGE_CIRCLE))
                .height(Length::Fixed(sizing::ENTER_BADGE_CIRCLE))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::badge_circle);

            let content = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(label)
                .push(circle);

            button(content)
                .padding([spacing::XS, spacing::MD])
                .style(styles::enter_badge)
        }
        PromptStyle::Plain => button(label)
            .padding([spacing::SM, spacing::LG])
            .style(styles::enter_plain),
    }
    .on_press(experience::Message::EnterPressed);

    let anchored = Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            bottom: spacing::XXL,
            ..Padding::ZERO
        });

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop(ctx.frame))
        .push(anchored);

    if ctx.veil_alpha > 0.0 {
        layers = layers.push(veil(ctx.veil_alpha));
    }

    layers.into()
}
