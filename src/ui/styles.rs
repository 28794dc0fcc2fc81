// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for the stage views.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::{button, container};
use iced::{gradient, Background, Border, Color, Radians, Shadow, Theme};

/// Full-window black veil whose alpha tracks a transition curve.
pub fn veil(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Track of the feature progress indicator.
pub fn progress_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_600)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Fill of the feature progress indicator.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Gradient disc behind the overlay monogram letter.
pub fn monogram_disc(_theme: &Theme) -> container::Style {
    let linear = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_4))
        .add_stop(0.0, palette::ACCENT_BLUE)
        .add_stop(1.0, palette::ACCENT_PURPLE);

    container::Style {
        background: Some(Background::Gradient(linear.into())),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Enter control, badge variant: a translucent pill over the clip that
/// brightens on hover.
pub fn enter_badge(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_HOVER,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            color: Color {
                a: 0.35,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Enter control, plain variant: bare label that brightens on hover.
pub fn enter_plain(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::WHITE,
        _ => palette::GRAY_200,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Circle holding the arrow glyph inside the badge variant.
pub fn badge_circle(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.25,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
