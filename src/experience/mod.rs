// SPDX-License-Identifier: MPL-2.0
//! The presentation flow: a linear four-stage state machine driving the
//! whole window, plus the progress arithmetic for the feature clip.

mod controller;
pub mod progress;

pub use controller::{Effect, Message, Stage, State, ENTER_FADE_OUT, LOADER_HOLD};
