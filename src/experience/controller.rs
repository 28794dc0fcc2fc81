// SPDX-License-Identifier: MPL-2.0
//! Four-stage presentation state machine.
//!
//! Stages advance strictly forward: `Loader` → `EnterPrompt` → `MainVideo`
//! → `Overlay`. The first transition is timed, the second is user-driven
//! with a fade delay, the third follows the feature clip's natural end.
//! Every transition is guarded on its source stage, so a signal that
//! arrives late (a timer tick outliving its stage, an end-of-stream from a
//! superseded playback session) is a no-op rather than a corruption.

use super::progress;
use std::time::Duration;

/// How long the loader clip holds the window before the enter prompt appears.
pub const LOADER_HOLD: Duration = Duration::from_millis(4000);

/// Length of the fade-out between activation and the feature clip.
pub const ENTER_FADE_OUT: Duration = Duration::from_millis(600);

/// The four mutually exclusive phases of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loader,
    EnterPrompt,
    MainVideo,
    Overlay,
}

/// Presentation state owned by one mounted application instance.
#[derive(Debug, Clone)]
pub struct State {
    stage: Stage,
    fade_out: bool,
    progress: f64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            stage: Stage::Loader,
            fade_out: false,
            progress: 0.0,
        }
    }
}

/// External signals consumed by the flow.
#[derive(Debug, Clone)]
pub enum Message {
    /// The 4000 ms hold on the loader stage elapsed.
    LoaderHoldElapsed,
    /// The user activated the enter control.
    EnterPressed,
    /// The 600 ms fade-out after activation elapsed.
    FadeOutElapsed,
    /// Playback position report from the feature clip.
    PositionChanged {
        position_secs: f64,
        duration_secs: f64,
    },
    /// The feature clip reached its natural end.
    PlaybackEnded,
}

/// What a message did to the state, for the caller to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The enter prompt began fading out.
    FadeStarted,
    /// A new stage was entered.
    StageChanged(Stage),
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// True while the enter prompt is mid-transition-out.
    pub fn fade_out(&self) -> bool {
        self.fade_out
    }

    /// Feature clip completion percentage. Meaningful only in `MainVideo`;
    /// can exceed 100 when the clip reports an unusable duration (see
    /// [`progress::progress_percent`]).
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Applies a signal to the state machine.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::LoaderHoldElapsed => {
                if self.stage != Stage::Loader {
                    return Effect::None;
                }
                self.stage = Stage::EnterPrompt;
                Effect::StageChanged(Stage::EnterPrompt)
            }
            Message::EnterPressed => {
                if self.stage != Stage::EnterPrompt || self.fade_out {
                    return Effect::None;
                }
                self.fade_out = true;
                Effect::FadeStarted
            }
            Message::FadeOutElapsed => {
                if self.stage != Stage::EnterPrompt || !self.fade_out {
                    return Effect::None;
                }
                self.stage = Stage::MainVideo;
                self.fade_out = false;
                self.progress = 0.0;
                Effect::StageChanged(Stage::MainVideo)
            }
            Message::PositionChanged {
                position_secs,
                duration_secs,
            } => {
                if self.stage == Stage::MainVideo {
                    self.progress = progress::progress_percent(position_secs, duration_secs);
                }
                Effect::None
            }
            Message::PlaybackEnded => {
                if self.stage != Stage::MainVideo {
                    return Effect::None;
                }
                self.stage = Stage::Overlay;
                Effect::StageChanged(Stage::Overlay)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_loader_stage() {
        let state = State::new();
        assert_eq!(state.stage(), Stage::Loader);
        assert!(!state.fade_out());
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn loader_hold_advances_to_enter_prompt_once() {
        let mut state = State::new();

        let effect = state.handle(Message::LoaderHoldElapsed);
        assert_eq!(effect, Effect::StageChanged(Stage::EnterPrompt));
        assert_eq!(state.stage(), Stage::EnterPrompt);

        // A second tick from the same timer is ignored
        let effect = state.handle(Message::LoaderHoldElapsed);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.stage(), Stage::EnterPrompt);
    }

    #[test]
    fn enter_press_starts_fade_synchronously() {
        let mut state = State::new();
        state.handle(Message::LoaderHoldElapsed);

        let effect = state.handle(Message::EnterPressed);
        assert_eq!(effect, Effect::FadeStarted);
        assert!(state.fade_out());
        // Still on the prompt until the fade delay elapses
        assert_eq!(state.stage(), Stage::EnterPrompt);
    }

    #[test]
    fn repeated_enter_press_during_fade_is_ignored() {
        let mut state = State::new();
        state.handle(Message::LoaderHoldElapsed);
        state.handle(Message::EnterPressed);

        assert_eq!(state.handle(Message::EnterPressed), Effect::None);
        assert!(state.fade_out());
    }

    #[test]
    fn fade_elapsed_enters_main_video_with_reset_progress() {
        let mut state = State::new();
        state.handle(Message::LoaderHoldElapsed);
        state.handle(Message::EnterPressed);

        let effect = state.handle(Message::FadeOutElapsed);
        assert_eq!(effect, Effect::StageChanged(Stage::MainVideo));
        assert_eq!(state.stage(), Stage::MainVideo);
        assert!(!state.fade_out());
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn fade_elapsed_without_activation_is_ignored() {
        let mut state = State::new();
        state.handle(Message::LoaderHoldElapsed);

        assert_eq!(state.handle(Message::FadeOutElapsed), Effect::None);
        assert_eq!(state.stage(), Stage::EnterPrompt);
    }

    #[test]
    fn position_updates_only_apply_in_main_video() {
        let mut state = State::new();
        state.handle(Message::PositionChanged {
            position_secs: 10.0,
            duration_secs: 20.0,
        });
        assert_eq!(state.progress(), 0.0);

        state.handle(Message::LoaderHoldElapsed);
        state.handle(Message::EnterPressed);
        state.handle(Message::FadeOutElapsed);

        state.handle(Message::PositionChanged {
            position_secs: 30.0,
            duration_secs: 60.0,
        });
        assert_eq!(state.progress(), 50.0);
    }

    #[test]
    fn playback_end_enters_overlay_regardless_of_progress() {
        let mut state = State::new();
        state.handle(Message::LoaderHoldElapsed);
        state.handle(Message::EnterPressed);
        state.handle(Message::FadeOutElapsed);
        state.handle(Message::PositionChanged {
            position_secs: 3.0,
            duration_secs: 60.0,
        });

        let effect = state.handle(Message::PlaybackEnded);
        assert_eq!(effect, Effect::StageChanged(Stage::Overlay));
        assert_eq!(state.stage(), Stage::Overlay);
    }

    #[test]
    fn overlay_is_terminal() {
        let mut state = State::new();
        state.handle(Message::LoaderHoldElapsed);
        state.handle(Message::EnterPressed);
        state.handle(Message::FadeOutElapsed);
        state.handle(Message::PlaybackEnded);

        assert_eq!(state.handle(Message::LoaderHoldElapsed), Effect::None);
        assert_eq!(state.handle(Message::EnterPressed), Effect::None);
        assert_eq!(state.handle(Message::FadeOutElapsed), Effect::None);
        assert_eq!(state.handle(Message::PlaybackEnded), Effect::None);
        assert_eq!(state.stage(), Stage::Overlay);
    }

    #[test]
    fn stale_playback_end_before_main_video_is_ignored() {
        let mut state = State::new();
        assert_eq!(state.handle(Message::PlaybackEnded), Effect::None);
        assert_eq!(state.stage(), Stage::Loader);
    }
}
