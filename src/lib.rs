// SPDX-License-Identifier: MPL-2.0
//! `iced_overture` is a cinematic onboarding player built with the Iced GUI framework.
//!
//! It sequences a four-stage, full-window video flow: a looping loader clip,
//! an enter prompt, a single-play feature clip with a progress indicator, and
//! a closing informational overlay. Clips are fetched from remote URLs into a
//! local cache and decoded with FFmpeg.

#![doc(html_root_url = "https://docs.rs/iced_overture/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod experience;
pub mod i18n;
pub mod media;
pub mod playback;
pub mod ui;
