// SPDX-License-Identifier: MPL-2.0
//! Settings screen: dark mode, CRT frame variant, and language.
//!
//! The screen renders the current preferences it is handed and raises an
//! event per change; reading, persisting and re-propagating the values is
//! the application's job.

use crate::i18n::I18n;
use crate::ui::crt::{self, FrameVariant};
use crate::ui::design_tokens::{self, palette, radius, spacing, typography};
use crate::ui::pages::explore::{dim_screen_text, screen_header};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, toggler, Column, Container, Row, Text};
use iced::{Background, Border, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

/// The settings screen owns only its monitor frame.
#[derive(Debug, Default)]
pub struct State {
    frame: crt::State,
}

impl State {
    #[must_use]
    pub fn new(frame_variant: FrameVariant) -> Self {
        Self {
            frame: crt::State::new(frame_variant),
        }
    }

    pub fn sync_frame(&mut self, variant: FrameVariant) {
        self.frame.sync_initial(variant);
    }
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    DarkModeToggled(bool),
    FrameVariantSelected(FrameVariant),
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    DarkModeToggled(bool),
    FrameVariantSelected(FrameVariant),
    LanguageSelected(LanguageIdentifier),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::DarkModeToggled(dark) => Event::DarkModeToggled(dark),
        Message::FrameVariantSelected(variant) => Event::FrameVariantSelected(variant),
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Effective dark-mode state shown by the toggle.
    pub is_dark: bool,
    /// Currently persisted frame variant.
    pub frame_variant: FrameVariant,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = screen_header(
        ctx.i18n.tr("settings-title"),
        ctx.i18n.tr("settings-subtitle"),
    );

    let preferences = Column::new()
        .spacing(spacing::LG)
        .push(appearance_section(&ctx))
        .push(display_section(ctx.i18n))
        .push(about_section(ctx.i18n));

    let monitor = crt::view(
        &state.frame,
        crt::ViewContext {
            i18n: ctx.i18n,
            title: Some(ctx.i18n.tr("settings-window-title")),
        },
        Container::new(preferences)
            .width(Length::Fixed(design_tokens::sizing::CONTENT_MAX_WIDTH * 0.8))
            .padding(spacing::LG)
            .style(styles::container::screen)
            .into(),
    );

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(header)
        .push(monitor)
        .push(language_panel(ctx.i18n))
        .into()
}

fn appearance_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let dark_row = setting_row(
        ctx.i18n.tr("settings-dark-mode"),
        ctx.i18n.tr("settings-dark-mode-description"),
        toggler(ctx.is_dark)
            .on_toggle(Message::DarkModeToggled)
            .into(),
    );

    let mut variant_buttons = Row::new().spacing(spacing::XS);
    for variant in FrameVariant::ALL {
        let is_active = ctx.frame_variant == variant;
        variant_buttons = variant_buttons.push(
            button(Text::new(ctx.i18n.tr(variant.label_key())).size(typography::CAPTION))
                .on_press(Message::FrameVariantSelected(variant))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::toggle(is_active)),
        );
    }
    let variant_row = setting_row(
        ctx.i18n.tr("settings-frame-variant"),
        ctx.i18n.tr("settings-frame-variant-description"),
        variant_buttons.into(),
    );

    section(
        ctx.i18n.tr("settings-appearance-section"),
        Column::new()
            .spacing(spacing::SM)
            .push(dark_row)
            .push(variant_row)
            .into(),
    )
}

fn display_section(i18n: &I18n) -> Element<'_, Message> {
    let enabled = i18n.tr("settings-enabled-pill");

    section(
        i18n.tr("settings-display-section"),
        Column::new()
            .spacing(spacing::SM)
            .push(setting_row(
                i18n.tr("settings-scanlines"),
                i18n.tr("settings-scanlines-description"),
                pill(enabled.clone()),
            ))
            .push(setting_row(
                i18n.tr("settings-animations"),
                i18n.tr("settings-animations-description"),
                pill(enabled),
            ))
            .into(),
    )
}

fn about_section(i18n: &I18n) -> Element<'_, Message> {
    section(
        i18n.tr("settings-about-section"),
        Container::new(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(Horizontal::Center)
                .push(
                    Text::new(i18n.tr("settings-about-name"))
                        .size(typography::BODY_LG)
                        .style(|_theme: &Theme| text::Style {
                            color: Some(palette::PHOSPHOR_GREEN),
                        }),
                )
                .push(
                    Text::new(i18n.tr("settings-about-subtitle"))
                        .size(typography::CAPTION)
                        .style(dim_screen_text),
                )
                .push(
                    Text::new(i18n.tr("settings-about-version"))
                        .size(typography::CAPTION)
                        .style(dim_screen_text),
                ),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .style(settings_card)
        .into(),
    )
}

/// Language picker, below the monitor like a gallery placard.
fn language_panel(i18n: &I18n) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("select-language-label")).size(typography::BODY));

    for locale in &i18n.available_locales {
        let translated_name = i18n.tr(&format!("language-name-{locale}"));
        let label = if translated_name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            format!("{translated_name} ({locale})")
        };

        let is_current = i18n.current_locale() == locale;
        let mut language_button = button(Text::new(label).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM]);
        if is_current {
            language_button = language_button.style(styles::button::selected);
        } else {
            language_button = language_button
                .on_press(Message::LanguageSelected(locale.clone()))
                .style(styles::button::unselected);
        }
        column = column.push(language_button);
    }

    Container::new(column)
        .padding(spacing::MD)
        .style(styles::container::light_panel)
        .into()
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(title)
                .size(typography::TITLE_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ACCENT_CYAN),
                }),
        )
        .push(body)
        .into()
}

fn setting_row<'a>(
    label: String,
    description: String,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let labels = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PHOSPHOR_GREEN),
                }),
        )
        .push(
            Text::new(description)
                .size(typography::CAPTION)
                .style(dim_screen_text),
        );

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(Container::new(labels).width(Length::Fill))
            .push(control),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(settings_card)
    .into()
}

fn pill<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::ACCENT_CYAN)),
            text_color: Some(palette::INK),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn settings_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(iced::Color::from_rgb(0.067, 0.067, 0.067))),
        border: Border {
            color: iced::Color::from_rgb(0.2, 0.2, 0.2),
            width: 2.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
