// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! A single row at the top of the window: the wordmark on the left and one
//! link per screen. The active screen is highlighted; clicking a link emits
//! a navigation event for the application to act on.

use crate::app::Screen;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The screen currently shown, used for highlighting.
    pub current: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let wordmark = Text::new("ARCHIVIO")
        .size(typography::TITLE_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ACCENT_CYAN),
        });

    let mut links = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    for screen in Screen::ALL {
        let label = Text::new(ctx.i18n.tr(screen.label_key())).size(typography::BODY);
        let mut link = button(label).padding([spacing::XXS, spacing::SM]);
        if screen == ctx.current {
            link = link.style(styles::button::selected);
        } else {
            link = link.on_press(Message::Navigate(screen)).style(styles::button::link);
        }
        links = links.push(link);
    }

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(wordmark)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(links);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}
