// SPDX-License-Identifier: MPL-2.0
//! Muted clip playback: an FFmpeg decode loop on a blocking thread,
//! bridged into the Iced event loop through a subscription.
//!
//! Every clip in the experience is muted by contract, so there is no audio
//! path here at all. Playback starts as soon as a decoder session spawns
//! (autoplay) and either loops seamlessly or reports end-of-stream once,
//! depending on the session's options.

pub mod decoder;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent, PlaybackOptions};
pub use subscription::{clip_playback, PlaybackMessage};
