// SPDX-License-Identifier: MPL-2.0
//! Timing helpers for view transitions.
//!
//! Transitions are not animated by a dedicated timer: the view recomputes
//! its opacity from the transition's start instant on every redraw, and
//! redraws keep coming because a clip is always playing underneath. A
//! transition with no start instant reads as "not running".

use std::time::{Duration, Instant};

/// Linear progress of a transition in `[0, 1]`; `0.0` when not running.
pub fn progress(started_at: Option<Instant>, duration: Duration) -> f32 {
    match started_at {
        None => 0.0,
        Some(started) => {
            (started.elapsed().as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}

/// Quadratic ease-out, for entry transitions that should settle gently.
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv
}
