// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Dispatches to the stage view matching the active presentation stage and
//! turns transition instants into the opacity values the stages render.

use super::Message;
use crate::config::PromptStyle;
use crate::experience::{self, Stage, ENTER_FADE_OUT};
use crate::i18n::I18n;
use crate::ui::fade;
use crate::ui::stages::{enter_prompt, loader, main_video, overlay};
use iced::widget::image;
use iced::Element;
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub flow: &'a experience::State,
    pub prompt_style: PromptStyle,
    pub background_frame: Option<&'a image::Handle>,
    pub feature_frame: Option<&'a image::Handle>,
    pub fade_started_at: Option<Instant>,
    pub overlay_entered_at: Option<Instant>,
    pub startup_notice: Option<&'a str>,
}

/// Renders the stage view for the current presentation state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.flow.stage() {
        Stage::Loader => loader::view(ctx.background_frame, ctx.startup_notice),
        Stage::EnterPrompt => enter_prompt::view(enter_prompt::ViewContext {
            i18n: ctx.i18n,
            frame: ctx.background_frame,
            veil_alpha: fade::progress(ctx.fade_started_at, ENTER_FADE_OUT),
            style: ctx.prompt_style,
        })
        .map(Message::Flow),
        Stage::MainVideo => main_video::view(main_video::ViewContext {
            i18n: ctx.i18n,
            frame: ctx.feature_frame,
            progress: ctx.flow.progress(),
        }),
        Stage::Overlay => overlay::view(overlay::ViewContext {
            i18n: ctx.i18n,
            frame: ctx.background_frame,
            entry: fade::ease_out(fade::progress(ctx.overlay_entered_at, overlay::ENTRY)),
        }),
    }
}
