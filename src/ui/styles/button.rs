// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Retro action button: a loud accent surface with an ink outline and the
/// hard offset shadow. Hovering lifts the shadow slightly.
pub fn action(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(accent)),
            text_color: palette::INK,
            border: Border {
                color: palette::INK,
                width: 2.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(accent)),
            text_color: palette::INK,
            border: Border {
                color: palette::INK,
                width: 2.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::RETRO,
            snap: true,
        },
    }
}

/// Style for selected/active button state in toggle groups.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed | button::Status::Hovered => {
            button::Style {
                background: Some(Background::Color(palette::ACCENT_CYAN)),
                text_color: palette::INK,
                border: Border {
                    color: palette::INK,
                    width: 2.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Picks the toggle-group style for a button based on its active state.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if active {
            selected(theme, status)
        } else {
            unselected(theme, status)
        }
    }
}

/// Style for unselected/secondary button state in toggle groups.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    match status {
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::ACCENT_CYAN,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        _ => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless row button for lists rendered inside the CRT screen.
/// Hovering washes the row with a faint cyan, like the original terminal UI.
pub fn screen_row(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: 0.1,
            ..palette::ACCENT_CYAN
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::PHOSPHOR_GREEN,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Quiet text-like button for navigation links.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette_ext.background.strong.color)),
            text_color: palette_ext.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Dismiss-style button used on toasts.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_button_keeps_the_accent_background() {
        let theme = Theme::Light;
        let style_fn = action(palette::ACCENT_YELLOW);
        let style = style_fn(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::ACCENT_YELLOW);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn screen_row_only_washes_on_hover() {
        let theme = Theme::Dark;
        let normal = screen_row(&theme, button::Status::Active);
        let hover = screen_row(&theme, button::Status::Hovered);

        assert!(normal.background.is_none());
        assert!(hover.background.is_some());
    }

    #[test]
    fn selected_and_unselected_are_visually_distinct() {
        let theme = Theme::Dark;
        let sel = selected(&theme, button::Status::Active);
        let unsel = unselected(&theme, button::Status::Active);
        assert_ne!(sel.background, unsel.background);
    }
}
