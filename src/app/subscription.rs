// SPDX-License-Identifier: MPL-2.0
//! Subscriptions derived from the current presentation state.
//!
//! Everything time- or event-driven about the flow lives here: the two
//! stage timers, keyboard activation, and the playback session for
//! whichever clip the active stage needs. Because each subscription is
//! recomputed from state on every update, a timer or decoder session is
//! owned by exactly the state that needs it - leaving the stage drops the
//! subscription, which is what cancels the underlying timer or decoder.

use super::Message;
use crate::experience::{self, Stage, ENTER_FADE_OUT, LOADER_HOLD};
use crate::media::ResolvedClips;
use crate::playback;
use iced::{event, keyboard, time, Subscription};

/// Session ids for the three playback sessions of a run. The flow is
/// linear, so at most one is live at a time, but the ids must still be
/// distinct for Iced to treat each as a fresh subscription.
mod session {
    /// Loader clip looping behind the loader and enter-prompt stages.
    pub const AMBIENT: u64 = 1;
    /// Feature clip playing once through the main stage.
    pub const FEATURE: u64 = 2;
    /// Feature clip looping behind the closing overlay.
    pub const FINALE: u64 = 3;
}

/// The delayed stage transitions, active only while their source state is.
///
/// `time::every` fires first after its full period, so each subscription
/// behaves as a one-shot: the first tick transitions the flow, which drops
/// the subscription. A duplicate tick racing the teardown is ignored by the
/// flow's stage guards.
pub fn stage_timers(flow: &experience::State) -> Subscription<Message> {
    match flow.stage() {
        Stage::Loader => {
            time::every(LOADER_HOLD).map(|_| Message::Flow(experience::Message::LoaderHoldElapsed))
        }
        Stage::EnterPrompt if flow.fade_out() => {
            time::every(ENTER_FADE_OUT).map(|_| Message::Flow(experience::Message::FadeOutElapsed))
        }
        _ => Subscription::none(),
    }
}

/// Keyboard activation for the enter prompt: Enter or Space, matching the
/// pointer activation of the on-screen control.
pub fn activation_keys(flow: &experience::State) -> Subscription<Message> {
    if flow.stage() != Stage::EnterPrompt {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key:
                    keyboard::Key::Named(
                        keyboard::key::Named::Enter | keyboard::key::Named::Space,
                    ),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::Flow(experience::Message::EnterPressed)),
        _ => None,
    })
}

/// The playback session required by the active stage, if clips are ready.
pub fn stage_playback(
    flow: &experience::State,
    clips: Option<&ResolvedClips>,
) -> Subscription<Message> {
    let Some(clips) = clips else {
        return Subscription::none();
    };

    match flow.stage() {
        Stage::Loader | Stage::EnterPrompt => {
            playback::clip_playback(clips.loader.clone(), session::AMBIENT, true)
                .map(Message::Background)
        }
        Stage::MainVideo => playback::clip_playback(clips.feature.clone(), session::FEATURE, false)
            .map(Message::Feature),
        Stage::Overlay => playback::clip_playback(clips.feature.clone(), session::FINALE, true)
            .map(Message::Background),
    }
}
