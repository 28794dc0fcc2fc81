// SPDX-License-Identifier: MPL-2.0
//! Media concerns outside the decode loop: container probing and fetching
//! the hosted clips into the local cache.

pub mod remote;
pub mod video;

pub use remote::{resolve_clips, ClipSources, ResolvedClips};
