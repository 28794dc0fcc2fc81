// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! Decoding runs in a Tokio blocking task (FFmpeg types are not `Send`),
//! delivering frames through channels for non-blocking UI updates. Frames
//! are paced against a wall clock so they arrive at presentation time.

use crate::error::{Error, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,

    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

impl DecodedFrame {
    /// Returns the total size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.rgba_data.len()
    }
}

/// How a decoder session behaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackOptions {
    /// Seek back to the start instead of reporting end-of-stream.
    pub loop_playback: bool,
}

/// Commands sent to the decoder task.
///
/// Playback is autoplay-only with no transport controls, so the command
/// set is reduced to teardown.
#[derive(Debug, Clone)]
pub enum DecoderCommand {
    /// Stop decoding and clean up resources.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// Playback reached the end of the clip (never emitted when looping).
    EndOfStream,

    /// An error occurred during decoding.
    Error(String),
}

/// Async video decoder that runs in a Tokio task.
pub struct AsyncDecoder {
    /// Channel for sending commands to the decoder task.
    command_tx: mpsc::UnboundedSender<DecoderCommand>,

    /// Channel for receiving events from the decoder task.
    /// Bounded so decode speed is backpressured by the UI.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Creates a new async decoder for the given clip and starts playback.
    ///
    /// Spawns a blocking Tokio task that handles decoding in the background
    /// and returns the decoder handle with channels for communication.
    pub fn new<P: AsRef<Path>>(clip_path: P, options: PlaybackOptions) -> Result<Self> {
        let path = clip_path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(Error::Io(format!("Clip not found: {:?}", path)));
        }

        // Commands: unbounded (UI needs to send without blocking)
        // Events: bounded to two frames for backpressure with some slack
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg operations are not Send, so we use spawn_blocking
        tokio::task::spawn_blocking(move || {
            if let Err(e) = Self::decoder_loop_blocking(path, options, command_rx, event_tx) {
                eprintln!("Decoder task failed: {}", e);
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Video("Decoder task is not running".into()))
    }

    /// Receives the next event from the decoder (blocking).
    ///
    /// Returns `None` if the decoder task has terminated.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    /// Main decoder loop running in a blocking thread.
    ///
    /// Decodes frames one at a time, paces them by PTS against the session
    /// wall clock, and either wraps back to the start (looping sessions) or
    /// reports end-of-stream and exits.
    fn decoder_loop_blocking(
        clip_path: std::path::PathBuf,
        options: PlaybackOptions,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<DecoderEvent>,
    ) -> Result<()> {
        crate::media::video::init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(&clip_path)
            .map_err(|e| Error::Video(format!("Failed to open clip: {}", e)))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| Error::Video("No video stream found".to_string()))?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| Error::Video(format!("Failed to create codec context: {}", e)))?;
        let mut decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| Error::Video(format!("Failed to create video decoder: {}", e)))?;

        let width = decoder.width();
        let height = decoder.height();

        // Setup scaler to convert to RGBA
        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| Error::Video(format!("Failed to create scaler: {}", e)))?;

        // Extract time base for PTS calculation
        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        // Pacing state; reset whenever playback wraps back to the start
        let mut playback_start_time = std::time::Instant::now();
        let mut first_pts: Option<f64> = None;

        loop {
            // Check for commands (non-blocking)
            match command_rx.try_recv() {
                Ok(DecoderCommand::Stop) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    // The handle was dropped; nobody is listening anymore
                    break;
                }
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            // Decode next frame
            let mut frame_decoded = false;
            for (stream, packet) in ictx.packets() {
                if stream.index() != video_stream_index {
                    continue;
                }

                if let Err(e) = decoder.send_packet(&packet) {
                    let _ = event_tx
                        .blocking_send(DecoderEvent::Error(format!("Packet send failed: {}", e)));
                    continue;
                }

                let mut decoded_frame = ffmpeg_next::frame::Video::empty();
                if decoder.receive_frame(&mut decoded_frame).is_ok() {
                    // Convert to RGBA
                    let mut rgb_frame = ffmpeg_next::frame::Video::empty();
                    if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                        let _ = event_tx
                            .blocking_send(DecoderEvent::Error(format!("Scaling failed: {}", e)));
                        continue;
                    }

                    let rgba_data = Self::extract_rgba_data(&rgb_frame);

                    let pts_secs = if let Some(pts) = decoded_frame.timestamp() {
                        pts as f64 * time_base_f64
                    } else {
                        0.0
                    };

                    // Frame pacing: wait until the frame should be displayed
                    if first_pts.is_none() {
                        first_pts = Some(pts_secs);
                    }
                    if let Some(first) = first_pts {
                        let frame_delay = pts_secs - first;
                        let target_time =
                            playback_start_time + std::time::Duration::from_secs_f64(frame_delay);
                        let now = std::time::Instant::now();

                        if target_time > now {
                            std::thread::sleep(target_time - now);
                        }
                    }

                    let decoded = DecodedFrame {
                        rgba_data: Arc::new(rgba_data),
                        width,
                        height,
                        pts_secs,
                    };

                    if event_tx
                        .blocking_send(DecoderEvent::FrameReady(decoded))
                        .is_err()
                    {
                        // Event channel closed
                        break;
                    }

                    frame_decoded = true;
                    break;
                }
            }

            // No frame means the packet stream is exhausted
            if !frame_decoded {
                if options.loop_playback {
                    if let Err(e) = ictx.seek(0, ..0) {
                        let _ = event_tx
                            .blocking_send(DecoderEvent::Error(format!("Loop seek failed: {}", e)));
                        break;
                    }
                    decoder.flush();
                    playback_start_time = std::time::Instant::now();
                    first_pts = None;
                } else {
                    let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Extracts RGBA data from a decoded frame, handling stride correctly.
    fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
        let width = frame.width();
        let height = frame.height();
        let data = frame.data(0);
        let stride = frame.stride(0);

        let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            let row_start = (y * stride as u32) as usize;
            let row_end = row_start + (width * 4) as usize;
            rgba_bytes.extend_from_slice(&data[row_start..row_end]);
        }

        rgba_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn decoder_can_be_created() {
        // Existence is validated eagerly; the FFmpeg open happens in the task
        let temp_dir = tempfile::tempdir().unwrap();
        let clip_path = temp_dir.path().join("test.webm");
        std::fs::write(&clip_path, b"fake clip data").unwrap();

        let decoder = AsyncDecoder::new(&clip_path, PlaybackOptions::default());
        assert!(decoder.is_ok());
    }

    #[tokio::test]
    async fn decoder_fails_for_nonexistent_file() {
        let result = AsyncDecoder::new("/nonexistent/clip.webm", PlaybackOptions::default());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn decoder_accepts_stop_command() {
        let temp_dir = tempfile::tempdir().unwrap();
        let clip_path = temp_dir.path().join("test.webm");
        std::fs::write(&clip_path, b"fake clip data").unwrap();

        let decoder = AsyncDecoder::new(&clip_path, PlaybackOptions::default()).unwrap();
        assert!(decoder.send_command(DecoderCommand::Stop).is_ok());
    }

    #[tokio::test]
    async fn unreadable_clip_reports_error_event() {
        let temp_dir = tempfile::tempdir().unwrap();
        let clip_path = temp_dir.path().join("garbage.webm");
        std::fs::write(&clip_path, b"not a real container").unwrap();

        let mut decoder = AsyncDecoder::new(&clip_path, PlaybackOptions::default()).unwrap();

        // The decode task exits after failing to open the container; the
        // event channel closing (None) is also an acceptable signal here.
        let event =
            tokio::time::timeout(std::time::Duration::from_secs(5), decoder.recv_event()).await;
        match event {
            Ok(Some(DecoderEvent::Error(_))) | Ok(None) => {}
            other => panic!("expected error or closed channel, got {:?}", other),
        }
    }

    #[test]
    fn decoded_frame_calculates_size() {
        let frame = DecodedFrame {
            rgba_data: Arc::new(vec![0u8; 640 * 360 * 4]),
            width: 640,
            height: 360,
            pts_secs: 0.0,
        };

        assert_eq!(frame.size_bytes(), 640 * 360 * 4);
        assert_eq!(frame.width, 640);
        assert_eq!(frame.height, 360);
    }
}
