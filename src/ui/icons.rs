// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached with `OnceLock` so repeated views reuse the parsed asset.

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Diagonal arrow pointing up-right, used inside the enter badge.
pub fn arrow() -> Svg<'static> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/icons/arrow.svg");
    let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
    Svg::new(handle.clone())
}

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}
