// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for clip playback events.
//!
//! Bridges the async decoder to the UI event loop. Each playback session
//! carries a unique id, so a stage change swaps subscriptions cleanly: the
//! old session's stream is dropped (tearing the decoder down through its
//! channels) and the new one starts from the first frame.

use super::decoder::{AsyncDecoder, DecoderEvent, PlaybackOptions};
use iced::futures::SinkExt;
use iced::stream;
use std::path::PathBuf;
use std::sync::Arc;

/// Subscription id for one playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ClipPlaybackId(u64);

/// Messages emitted by a clip playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// The session is starting; carries the probed clip duration.
    /// `duration_secs` is `0.0` when the container reports none.
    Started { duration_secs: f64 },

    /// A new frame is ready for display. Frame arrival doubles as the
    /// playback time-update signal via `pts_secs`.
    FrameReady {
        /// RGBA pixel data.
        rgba_data: Arc<Vec<u8>>,
        /// Frame width.
        width: u32,
        /// Frame height.
        height: u32,
        /// Presentation timestamp in seconds.
        pts_secs: f64,
    },

    /// Playback reached the natural end (single-play sessions only).
    EndOfStream,

    /// An error occurred.
    Error(String),
}

/// Creates a playback subscription for one clip session.
///
/// `session_id` must be unique across all concurrently possible sessions;
/// the linear stage flow assigns each stage's session a distinct constant.
/// `looping` sessions restart from the first frame at end-of-stream and
/// never emit [`PlaybackMessage::EndOfStream`].
pub fn clip_playback(
    clip_path: PathBuf,
    session_id: u64,
    looping: bool,
) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with(
        (ClipPlaybackId(session_id), clip_path, looping),
        |(_id, clip_path, looping): &(ClipPlaybackId, PathBuf, bool)| {
            let clip_path = clip_path.clone();
            let looping = *looping;
            stream::channel(100, move |mut output| async move {
            // Probe the container duration off the UI thread. A clip with
            // no duration metadata probes as 0.0, which downstream progress
            // math treats as unusable.
            let probe_path = clip_path.clone();
            let duration_secs = tokio::task::spawn_blocking(move || {
                crate::media::video::probe_duration_secs(&probe_path)
            })
            .await
            .map(|probed| probed.unwrap_or(0.0))
            .unwrap_or(0.0);

            let _ = output
                .send(PlaybackMessage::Started { duration_secs })
                .await;

            let mut decoder = match AsyncDecoder::new(
                &clip_path,
                PlaybackOptions {
                    loop_playback: looping,
                },
            ) {
                Ok(decoder) => decoder,
                Err(e) => {
                    let _ = output.send(PlaybackMessage::Error(e.to_string())).await;
                    return;
                }
            };

            while let Some(event) = decoder.recv_event().await {
                let message = match event {
                    DecoderEvent::FrameReady(frame) => PlaybackMessage::FrameReady {
                        rgba_data: frame.rgba_data,
                        width: frame.width,
                        height: frame.height,
                        pts_secs: frame.pts_secs,
                    },
                    DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream,
                    DecoderEvent::Error(message) => PlaybackMessage::Error(message),
                };

                if output.send(message).await.is_err() {
                    // UI side went away; the decoder tears down through its
                    // dropped channels
                    break;
                }
            }
            })
        },
    )
}
