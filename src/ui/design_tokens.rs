// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (retro accents, phosphor, surfaces)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Animation**: Durations for timed UI behavior

## Examples

```
use archivio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let scanline = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::INK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use crate::catalog::AccentToken;
use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale / surfaces
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const INK: Color = Color::from_rgb(0.071, 0.071, 0.071); // near-black outline
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Cream paper background of the light theme.
    pub const CREAM: Color = Color::from_rgb(0.976, 0.953, 0.886);

    /// CRT screen black and its glowing text color.
    pub const SCREEN: Color = Color::from_rgb(0.039, 0.039, 0.039);
    pub const PHOSPHOR_GREEN: Color = Color::from_rgb(0.0, 1.0, 0.8);

    // Retro accent set
    pub const ACCENT_CYAN: Color = Color::from_rgb(0.0, 0.898, 1.0);
    pub const ACCENT_MAGENTA: Color = Color::from_rgb(1.0, 0.0, 0.666);
    pub const ACCENT_YELLOW: Color = Color::from_rgb(1.0, 0.898, 0.0);
    pub const ACCENT_PINK: Color = Color::from_rgb(1.0, 0.412, 0.706);
    pub const ACCENT_ORANGE: Color = Color::from_rgb(1.0, 0.596, 0.0);

    // Classic title-bar blue
    pub const TITLEBAR_BLUE: Color = Color::from_rgb(0.0, 0.0, 0.502);
    pub const TITLEBAR_BLUE_LIGHT: Color = Color::from_rgb(0.063, 0.518, 0.816);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Resolves a catalog accent token to its concrete palette color.
#[must_use]
pub fn accent(token: AccentToken) -> Color {
    match token {
        AccentToken::Cyan => palette::ACCENT_CYAN,
        AccentToken::Magenta => palette::ACCENT_MAGENTA,
        AccentToken::Yellow => palette::ACCENT_YELLOW,
        AccentToken::Pink => palette::ACCENT_PINK,
        AccentToken::Orange => palette::ACCENT_ORANGE,
    }
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;

    /// Muted secondary text on CRT screens.
    pub const SCREEN_DIM: f32 = 0.6;
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
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const FOLDER_CARD_WIDTH: f32 = 140.0;
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;

    // CRT monitor frame
    pub const CRT_BEZEL_PADDING: f32 = 24.0;
    pub const CRT_SCREEN_MIN_HEIGHT: f32 = 350.0;
    pub const CRT_WINDOW_BUTTON: f32 = 16.0;

    // Timeline strip
    pub const YEAR_DOT: f32 = 14.0;
    pub const YEAR_DOT_SELECTED: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for consistent text hierarchy.

    /// Display title - screen headings (EXPLORE, SEARCH, ...)
    pub const TITLE_XL: f32 = 40.0;

    /// Large title - selected timeline year, hero name
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - window titles, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;

    /// Chunky border - retro panel outlines
    pub const WIDTH_LG: f32 = 4.0;

    /// Bezel border - the 4-bit CRT frame
    pub const WIDTH_BEZEL: f32 = 8.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };

    /// Hard offset shadow with no blur, the signature retro drop.
    pub const RETRO: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 4.0, y: 4.0 },
        blur_radius: 0.0,
    };
}

// ============================================================================
// Animation Durations
// ============================================================================

pub mod animation {
    use std::time::Duration;

    /// Toast auto-dismiss polling interval.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// How long the Submit success state stays on screen before the form
    /// resets.
    pub const SUBMIT_RESET_DELAY: Duration = Duration::from_secs(3);
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
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_BEZEL > border::WIDTH_LG);

    // Sizing validation
    assert!(sizing::YEAR_DOT_SELECTED > sizing::YEAR_DOT);

    // Color validation
    assert!(palette::PHOSPHOR_GREEN.g >= 0.0 && palette::PHOSPHOR_GREEN.g <= 1.0);
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
    fn every_accent_token_resolves_to_a_distinct_color() {
        let tokens = [
            AccentToken::Cyan,
            AccentToken::Magenta,
            AccentToken::Yellow,
            AccentToken::Pink,
            AccentToken::Orange,
        ];
        for (i, a) in tokens.iter().enumerate() {
            for b in tokens.iter().skip(i + 1) {
                assert_ne!(accent(*a), accent(*b));
            }
        }
    }
}
