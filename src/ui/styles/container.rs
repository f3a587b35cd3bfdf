// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for settings and side panels.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outlined retro panel: theme surface, ink outline, hard shadow.
pub fn light_panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: palette::INK,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: shadow::RETRO,
        ..Default::default()
    }
}

/// The black CRT screen surface item lists and results render on.
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SCREEN)),
        text_color: Some(palette::PHOSPHOR_GREEN),
        ..Default::default()
    }
}

/// Header/footer strips inside the CRT screen, separated by a cyan rule.
pub fn screen_strip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.067, 0.067, 0.067))),
        border: Border {
            color: palette::ACCENT_CYAN,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_surface_is_near_black_with_phosphor_text() {
        let style = screen(&Theme::Light);
        assert_eq!(style.text_color, Some(palette::PHOSPHOR_GREEN));
        if let Some(Background::Color(bg)) = style.background {
            assert!(bg.r < 0.1);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn light_panel_carries_the_retro_shadow() {
        let style = light_panel(&Theme::Light);
        assert_eq!(style.shadow.blur_radius, 0.0);
        assert!(style.shadow.offset.x > 0.0);
    }
}
