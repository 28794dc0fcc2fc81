// SPDX-License-Identifier: MPL-2.0
//! FFmpeg initialization and container probing.

use crate::error::{Error, Result};
use std::path::Path;
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// This function is safe to call multiple times - initialization will only
/// happen once thanks to `std::sync::Once`. The FFmpeg log level is forced
/// down to ERROR to keep container warnings off stderr.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Video(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Probes a clip's duration in seconds without decoding frames.
///
/// Prefers the video stream's own duration, falls back to the container
/// duration, and reports `0.0` when neither is present. Streamed WebM files
/// frequently land in that last bucket, which is what the progress
/// computation's fallback denominator exists for.
pub fn probe_duration_secs<P: AsRef<Path>>(path: P) -> Result<f64> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| Error::Video(format!("Failed to open video file: {e}")))?;

    let video_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| Error::Video("No video stream found".to_string()))?;

    let duration_secs = if video_stream.duration() > 0 {
        let time_base = video_stream.time_base();
        video_stream.duration() as f64 * f64::from(time_base.numerator())
            / f64::from(time_base.denominator())
    } else if ictx.duration() > 0 {
        // Fallback to container duration
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        0.0
    };

    Ok(duration_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_ffmpeg_is_idempotent() {
        assert!(init_ffmpeg().is_ok());
        assert!(init_ffmpeg().is_ok());
    }

    #[test]
    fn probe_fails_for_missing_file() {
        let result = probe_duration_secs("/nonexistent/clip.webm");
        assert!(result.is_err());
    }

    #[test]
    fn probe_fails_for_garbage_data() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = temp_dir.path().join("garbage.webm");
        std::fs::write(&path, b"definitely not a video").expect("write");

        assert!(probe_duration_secs(&path).is_err());
    }
}
