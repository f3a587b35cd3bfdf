// SPDX-License-Identifier: MPL-2.0
//! The three monitor skins.
//!
//! Each skin is a pure render function: chrome around opaque content, no
//! state, no messages of its own. The looks are deliberately distinct —
//! `smooth` plays it straight, `pixel` goes 8-bit, `four_bit` is all bezel.

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

const BEZEL_GRAY: Color = Color::from_rgb(0.23, 0.23, 0.23);
const BEZEL_GRAY_DARK: Color = Color::from_rgb(0.16, 0.16, 0.16);
const PIXEL_GREEN: Color = Color::from_rgb(0.0, 1.0, 0.0);
const FOUR_BIT_BLUE: Color = Color::from_rgb(0.0, 0.0, 0.533);

/// Realistic monitor: rounded bezel, brand label, blue title bar, stand.
pub fn smooth<'a, M: 'a>(title: String, content: Element<'a, M>) -> Element<'a, M> {
    let screen = Column::new()
        .push(title_bar(title, palette::TITLEBAR_BLUE, palette::WHITE, false))
        .push(content);

    let inner_bezel = Container::new(screen)
        .padding(spacing::XXS)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::SCREEN)),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            ..Default::default()
        });

    let body = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(brand_label("ARCHIVIO™", Color::from_rgb(0.53, 0.53, 0.53)))
        .push(inner_bezel)
        .push(control_row(&[BEZEL_GRAY_DARK, palette::SUCCESS_500]));

    let monitor = Container::new(body)
        .padding(spacing::LG)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(BEZEL_GRAY)),
            border: Border {
                radius: radius::XL.into(),
                ..Default::default()
            },
            shadow: shadow::LG,
            ..Default::default()
        });

    with_stand(monitor.into(), BEZEL_GRAY_DARK)
}

/// 8-bit skin: square corners, green brand text, hard drop shadow.
pub fn pixel<'a, M: 'a>(title: String, content: Element<'a, M>) -> Element<'a, M> {
    let screen = Column::new()
        .push(title_bar(
            title,
            Color::from_rgb(0.0, 0.0, 0.667),
            palette::WHITE,
            true,
        ))
        .push(content);

    let inner_bezel = Container::new(screen)
        .padding(spacing::XXS)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::SCREEN)),
            border: Border {
                color: Color::from_rgb(0.04, 0.04, 0.04),
                width: border::WIDTH_LG,
                radius: radius::NONE.into(),
            },
            ..Default::default()
        });

    let body = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(brand_label("ARCHIVIO", PIXEL_GREEN))
        .push(inner_bezel)
        .push(control_row(&[Color::from_rgb(0.25, 0.25, 0.25), PIXEL_GREEN]));

    let monitor = Container::new(body)
        .padding(spacing::MD)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb(0.29, 0.29, 0.29))),
            border: Border {
                color: BEZEL_GRAY_DARK,
                width: border::WIDTH_BEZEL,
                radius: radius::NONE.into(),
            },
            shadow: shadow::RETRO,
            ..Default::default()
        });

    with_stand(monitor.into(), Color::from_rgb(0.16, 0.16, 0.16))
}

/// 4-bit skin: the chunkiest bezel, cyan brand marquee, ► title prefix.
pub fn four_bit<'a, M: 'a>(title: String, content: Element<'a, M>) -> Element<'a, M> {
    let screen = Column::new()
        .push(title_bar(
            format!("► {title}"),
            FOUR_BIT_BLUE,
            palette::WHITE,
            true,
        ))
        .push(content);

    let inner_bezel = Container::new(screen)
        .padding(spacing::XXS)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb(0.06, 0.06, 0.06))),
            border: Border {
                color: Color::from_rgb(0.04, 0.04, 0.04),
                width: border::WIDTH_BEZEL,
                radius: radius::NONE.into(),
            },
            ..Default::default()
        });

    let body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(brand_label("▓▓ ARCHIVIO ▓▓", palette::PHOSPHOR_GREEN))
        .push(inner_bezel)
        .push(control_row(&[
            Color::from_rgb(0.0, 0.267, 0.0),
            PIXEL_GREEN,
            palette::ACCENT_CYAN,
        ]));

    let monitor = Container::new(body)
        .padding(spacing::MD)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb(0.184, 0.184, 0.184))),
            border: Border {
                color: Color::from_rgb(0.12, 0.12, 0.12),
                width: border::WIDTH_BEZEL * 2.0,
                radius: radius::NONE.into(),
            },
            shadow: shadow::RETRO,
            ..Default::default()
        });

    with_stand(monitor.into(), Color::from_rgb(0.12, 0.12, 0.12))
}

fn brand_label<'a, M: 'a>(label: &'a str, color: Color) -> Element<'a, M> {
    Text::new(label)
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
        .into()
}

fn title_bar<'a, M: 'a>(
    title: String,
    background: Color,
    text_color: Color,
    chunky: bool,
) -> Element<'a, M> {
    let label = Text::new(title)
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style {
            color: Some(text_color),
        });

    let mut buttons = Row::new().spacing(spacing::XXS);
    if !chunky {
        buttons = buttons
            .push(window_button("_", palette::GRAY_200, palette::INK))
            .push(window_button("□", palette::GRAY_200, palette::INK));
    }
    buttons = buttons.push(window_button("×", palette::ERROR_500, palette::WHITE));

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(Container::new(label).width(Length::Fill))
        .push(buttons);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        })
        .into()
}

fn window_button<'a, M: 'a>(glyph: &'a str, background: Color, color: Color) -> Element<'a, M> {
    Container::new(
        Text::new(glyph)
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style { color: Some(color) }),
    )
    .width(Length::Fixed(16.0))
    .height(Length::Fixed(16.0))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: palette::INK,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    })
    .into()
}

/// The little power/status LEDs under the screen.
fn control_row<'a, M: 'a>(colors: &[Color]) -> Element<'a, M> {
    let mut row = Row::new().spacing(spacing::SM);
    for color in colors {
        let color = *color;
        row = row.push(
            Container::new(text(""))
                .width(Length::Fixed(12.0))
                .height(Length::Fixed(12.0))
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(color)),
                    border: Border {
                        color: palette::INK,
                        width: border::WIDTH_SM,
                        radius: radius::FULL.into(),
                    },
                    ..Default::default()
                }),
        );
    }
    row.into()
}

/// Centers the monitor over its pedestal.
fn with_stand<'a, M: 'a>(monitor: Element<'a, M>, color: Color) -> Element<'a, M> {
    let neck = Container::new(text(""))
        .width(Length::Fixed(64.0))
        .height(Length::Fixed(24.0))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        });

    let base = Container::new(text(""))
        .width(Length::Fixed(112.0))
        .height(Length::Fixed(10.0))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Column::new()
        .align_x(Horizontal::Center)
        .push(monitor)
        .push(neck)
        .push(base)
        .into()
}
