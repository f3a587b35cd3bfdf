// SPDX-License-Identifier: MPL-2.0
//! Landing screen: the museum entrance.

use crate::app::Screen;
use crate::catalog::Browser;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    EnterMuseum,
    SearchArchives,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    Navigate(Screen),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::EnterMuseum => Event::Navigate(Screen::Explore),
        Message::SearchArchives => Event::Navigate(Screen::Search),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("home-title"))
        .size(typography::TITLE_XL)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ACCENT_CYAN),
        });

    let tagline = Text::new(ctx.i18n.tr("home-tagline")).size(typography::TITLE_SM);
    let intro = Text::new(ctx.i18n.tr("home-intro")).size(typography::BODY);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("home-explore-button")))
                .on_press(Message::EnterMuseum)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::action(palette::ACCENT_CYAN)),
        )
        .push(
            button(Text::new(ctx.i18n.tr("home-search-button")))
                .on_press(Message::SearchArchives)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::action(palette::ACCENT_YELLOW)),
        );

    let categories = Browser::categories();
    let artifact_total: u32 = categories.iter().map(|c| c.item_count).sum();
    let stats = Row::new()
        .spacing(spacing::LG)
        .push(stat_line(ctx.i18n.tr_with_args(
            "home-stat-categories",
            &[("count", &categories.len().to_string())],
        )))
        .push(stat_line(ctx.i18n.tr_with_args(
            "home-stat-items",
            &[("count", &artifact_total.to_string())],
        )));

    let hero = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(tagline)
        .push(intro)
        .push(actions)
        .push(stats);

    Container::new(
        Container::new(hero)
            .padding(spacing::XXL)
            .style(styles::container::light_panel),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .into()
}

fn stat_line<'a>(line: String) -> Element<'a, Message> {
    Text::new(line)
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_buttons_navigate_to_their_screens() {
        assert!(matches!(
            update(Message::EnterMuseum),
            Event::Navigate(Screen::Explore)
        ));
        assert!(matches!(
            update(Message::SearchArchives),
            Event::Navigate(Screen::Search)
        ));
    }

    #[test]
    fn home_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
