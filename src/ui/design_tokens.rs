// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_600: Color = Color::from_rgb(0.35, 0.35, 0.38);
    pub const GRAY_400: Color = Color::from_rgb(0.5, 0.5, 0.52);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.78, 0.8);

    // Monogram gradient endpoints (blue into purple)
    pub const ACCENT_BLUE: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const ACCENT_PURPLE: Color = Color::from_rgb(0.58, 0.2, 0.92);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Darkened backdrop behind the closing overlay. Stands in for the
    /// backdrop blur of a web rendition, which Iced does not provide.
    pub const OVERLAY_BACKDROP: f32 = 0.65;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;

    // Progress indicator
    pub const PROGRESS_TRACK_WIDTH: f32 = 192.0;
    pub const PROGRESS_TRACK_HEIGHT: f32 = 4.0;

    // Enter control
    pub const ENTER_BADGE_CIRCLE: f32 = 36.0;

    // Overlay monogram disc
    pub const MONOGRAM: f32 = 128.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - the overlay heading
    pub const TITLE_LG: f32 = 30.0;

    /// Monogram letter inside the overlay disc
    pub const MONOGRAM: f32 = 40.0;

    /// Large body - overlay description
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - captions, the enter label
    pub const BODY: f32 = 14.0;

    /// Caption - startup notices
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_BACKDROP > opacity::OVERLAY_MEDIUM);

    // Typography validation
    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Sizing validation
    assert!(sizing::MONOGRAM > sizing::ENTER_BADGE_CIRCLE);
    assert!(sizing::PROGRESS_TRACK_WIDTH > sizing::PROGRESS_TRACK_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn palette_channels_are_normalized() {
        for color in [palette::ACCENT_BLUE, palette::ACCENT_PURPLE] {
            assert!(color.r >= 0.0 && color.r <= 1.0);
            assert!(color.g >= 0.0 && color.g <= 1.0);
            assert!(color.b >= 0.0 && color.b <= 1.0);
        }
    }
}
