// SPDX-License-Identifier: MPL-2.0
//! Visual layer: design tokens, shared styles, transition timing helpers,
//! and the four full-window stage views.

pub mod design_tokens;
pub mod fade;
pub mod icons;
pub mod stages;
pub mod styles;
