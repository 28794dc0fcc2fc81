// SPDX-License-Identifier: MPL-2.0
//! Default values for user-facing settings.

/// Hosted loader clip played behind the loader and enter-prompt views.
pub const DEFAULT_LOADER_URL: &str =
    "https://4g4t40c68htoc9be.public.blob.vercel-storage.com/loader.webm";

/// Hosted feature clip played in the main view and looped behind the overlay.
pub const DEFAULT_FEATURE_URL: &str =
    "https://4g4t40c68htoc9be.public.blob.vercel-storage.com/saviskaraWeb.webm";
