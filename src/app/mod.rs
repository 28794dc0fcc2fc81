// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the presentation flow.
//!
//! The `App` struct wires the flow state machine to its collaborators: the
//! two playback surfaces, the stage timers, clip resolution, localization,
//! and per-stage rendering. Policy (what a stage change resets, how a
//! playback event feeds the flow) lives here next to the update loop so the
//! user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::experience::{self, Effect, Stage};
use crate::i18n::I18n;
use crate::media::remote::{self, ClipSources, ResolvedClips};
use crate::playback::PlaybackMessage;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// The four-stage presentation state machine.
    flow: experience::State,
    /// Local paths of both clips once resolution finishes.
    clips: Option<ResolvedClips>,
    /// Rendered when clip resolution fails; the flow keeps running.
    startup_notice: Option<String>,
    /// Latest frame of the looping background session.
    background_frame: Option<image::Handle>,
    /// Latest frame of the single-play feature session.
    feature_frame: Option<image::Handle>,
    /// Probed duration of the feature clip; 0.0 while unknown.
    feature_duration_secs: f64,
    /// When the enter prompt began fading out, for the veil curve.
    fade_started_at: Option<Instant>,
    /// When the overlay stage was entered, for its entry transition.
    overlay_entered_at: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("stage", &self.flow.stage())
            .field("clips_resolved", &self.clips.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            flow: experience::State::new(),
            clips: None,
            startup_notice: None,
            background_frame: None,
            feature_frame: None,
            feature_duration_secs: 0.0,
            fade_started_at: None,
            overlay_entered_at: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous clip
    /// resolution based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let app = App {
            i18n,
            config,
            ..Self::default()
        };

        let sources = ClipSources {
            loader_url: app.config.clips.loader_url().to_string(),
            feature_url: app.config.clips.feature_url().to_string(),
            local_dir: flags
                .asset_dir
                .map(PathBuf::from)
                .or_else(|| app.config.clips.local_dir.clone()),
        };
        let cache_dir = paths::get_app_cache_dir().unwrap_or_else(std::env::temp_dir);

        let task = Task::perform(
            remote::resolve_clips(sources, cache_dir),
            Message::ClipsResolved,
        );

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::stage_timers(&self.flow),
            subscription::activation_keys(&self.flow),
            subscription::stage_playback(&self.flow, self.clips.as_ref()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Flow(flow_message) => self.apply_flow(flow_message),
            Message::Background(playback_message) => self.handle_background(playback_message),
            Message::Feature(playback_message) => self.handle_feature(playback_message),
            Message::ClipsResolved(Ok(clips)) => {
                self.clips = Some(clips);
                self.startup_notice = None;
            }
            Message::ClipsResolved(Err(_)) => {
                self.startup_notice = Some(self.i18n.tr("notice-clips-unavailable"));
            }
        }

        Task::none()
    }

    /// Feeds a signal into the flow and reacts to whatever it changed.
    fn apply_flow(&mut self, flow_message: experience::Message) {
        match self.flow.handle(flow_message) {
            Effect::None => {}
            Effect::FadeStarted => self.fade_started_at = Some(Instant::now()),
            Effect::StageChanged(stage) => self.on_stage_entered(stage),
        }
    }

    /// Per-stage resets on entry. The flow itself already reset its own
    /// attributes; this is the presentation-side bookkeeping.
    fn on_stage_entered(&mut self, stage: Stage) {
        self.fade_started_at = None;
        match stage {
            Stage::MainVideo => {
                self.feature_frame = None;
                self.feature_duration_secs = 0.0;
            }
            Stage::Overlay => {
                // The finale session refills this with feature frames
                self.background_frame = None;
                self.overlay_entered_at = Some(Instant::now());
            }
            Stage::Loader | Stage::EnterPrompt => {}
        }
    }

    fn handle_background(&mut self, playback_message: PlaybackMessage) {
        match playback_message {
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
                ..
            } => {
                self.background_frame =
                    Some(image::Handle::from_rgba(width, height, rgba_data.to_vec()));
            }
            // Looping sessions never end on their own; a playback error
            // leaves the last frame (or black) on screen
            PlaybackMessage::Started { .. }
            | PlaybackMessage::EndOfStream
            | PlaybackMessage::Error(_) => {}
        }
    }

    fn handle_feature(&mut self, playback_message: PlaybackMessage) {
        match playback_message {
            PlaybackMessage::Started { duration_secs } => {
                self.feature_duration_secs = duration_secs;
            }
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
                pts_secs,
            } => {
                self.feature_frame =
                    Some(image::Handle::from_rgba(width, height, rgba_data.to_vec()));
                self.apply_flow(experience::Message::PositionChanged {
                    position_secs: pts_secs,
                    duration_secs: self.feature_duration_secs,
                });
            }
            PlaybackMessage::EndOfStream => {
                self.apply_flow(experience::Message::PlaybackEnded);
            }
            PlaybackMessage::Error(_) => {
                // Left to default behavior: the frame holds until the flow
                // advances
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            flow: &self.flow,
            prompt_style: self.config.prompt.style,
            background_frame: self.background_frame.as_ref(),
            feature_frame: self.feature_frame.as_ref(),
            fade_started_at: self.fade_started_at,
            overlay_entered_at: self.overlay_entered_at,
            startup_notice: self.startup_notice.as_deref(),
        })
    }
}
