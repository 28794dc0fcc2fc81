// SPDX-License-Identifier: MPL-2.0
//! Full-window views, one per presentation stage.

pub mod enter_prompt;
pub mod loader;
pub mod main_video;
pub mod overlay;

use crate::ui::styles;
use iced::widget::{image, Container, Image, Space};
use iced::{ContentFit, Element, Length};

/// Full-window clip frame; plain black until the first frame arrives.
pub fn backdrop<'a, M: 'a>(frame: Option<&image::Handle>) -> Element<'a, M> {
    match frame {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::veil(1.0))
            .into(),
    }
}

/// Full-window black veil at the given alpha, layered over a backdrop.
pub fn veil<'a, M: 'a>(alpha: f32) -> Element<'a, M> {
    Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::veil(alpha))
        .into()
}
