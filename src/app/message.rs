// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::experience;
use crate::media::ResolvedClips;
use crate::playback::PlaybackMessage;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level signals while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A signal for the presentation flow (timers, activation, playback
    /// milestones).
    Flow(experience::Message),
    /// Events from the looping background session (loader clip during the
    /// opening stages, feature clip behind the overlay).
    Background(PlaybackMessage),
    /// Events from the single-play feature session.
    Feature(PlaybackMessage),
    /// Result of resolving both clips to local paths at startup.
    ClipsResolved(Result<ResolvedClips, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `OVERTURE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional cache directory override (for downloaded clips).
    /// Takes precedence over `OVERTURE_CACHE_DIR` environment variable.
    pub cache_dir: Option<String>,
    /// Optional directory holding local `loader.webm` / `feature.webm`,
    /// bypassing the hosted URLs entirely.
    pub asset_dir: Option<String>,
}
