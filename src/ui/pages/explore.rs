// SPDX-License-Identifier: MPL-2.0
//! Explore screen: folder-based navigation with the CRT item display.
//!
//! Two views share this screen: the category grid, and a CRT monitor showing
//! the selected category's items. This is the one place the frame-variant
//! switcher is visible, so switching skins here raises an event the
//! application persists and mirrors to every other monitor.

use crate::catalog::{self, browser::ItemAction, Browser, Category, Item, ItemKind};
use crate::i18n::I18n;
use crate::ui::crt::{self, FrameVariant};
use crate::ui::design_tokens::{self, opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{Color, Element, Length, Theme};

/// Transient drill-down state; created on entry, discarded on leave.
#[derive(Debug, Default)]
pub struct State {
    browser: Browser,
    frame: crt::State,
}

impl State {
    #[must_use]
    pub fn new(frame_variant: FrameVariant) -> Self {
        Self {
            browser: Browser::new(),
            frame: crt::State::new(frame_variant),
        }
    }

    /// Mirrors an externally persisted frame preference into this monitor.
    pub fn sync_frame(&mut self, variant: FrameVariant) {
        self.frame.sync_initial(variant);
    }

    /// Id of the category currently drilled into, if any.
    #[must_use]
    pub fn selected_category(&self) -> Option<&'static str> {
        self.browser.selected().map(|c| c.id)
    }
}

/// Messages emitted by the explore screen.
#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(&'static str),
    Back,
    ItemActivated(Item),
    FrameSelected(FrameVariant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// An item was activated; the application performs the boundary effect.
    Action(ItemAction),
    /// The user switched monitor skins; the application persists it.
    FrameVariantChanged(FrameVariant),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::CategorySelected(id) => {
            // The id came from our own grid; an unknown id means stale UI
            // state, which renders as the empty grid again.
            let _ = state.browser.select(id);
            Event::None
        }
        Message::Back => {
            state.browser.clear();
            Event::None
        }
        Message::ItemActivated(item) => Event::Action(catalog::browser::activate(&item)),
        Message::FrameSelected(variant) => match state.frame.set(variant) {
            crt::Event::VariantChanged(v) => Event::FrameVariantChanged(v),
            crt::Event::None => Event::None,
        },
    }
}

/// Contextual data needed to render the explore screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = screen_header(
        ctx.i18n.tr("explore-title"),
        match state.browser.selected() {
            Some(category) => ctx
                .i18n
                .tr_with_args("explore-viewing", &[("name", category.name)]),
            None => ctx.i18n.tr("explore-subtitle"),
        },
    );

    let body: Element<'a, Message> = match state.browser.selected() {
        None => category_grid(ctx.i18n),
        Some(category) => folder_display(state, ctx.i18n, category),
    };

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(header)
        .push(body)
        .into()
}

/// Shared screen heading: big glitchy title plus a terminal-style subtitle.
pub(super) fn screen_header<'a, M: 'a>(title: String, subtitle: String) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_XL))
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        )
        .into()
}

fn category_grid(i18n: &I18n) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::MD).align_x(Horizontal::Center);

    for chunk in Browser::categories().chunks(3) {
        let mut row = Row::new().spacing(spacing::MD);
        for category in chunk {
            row = row.push(folder_card(i18n, category));
        }
        grid = grid.push(row);
    }

    let hint = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("explore-hint")).size(typography::BODY))
        .push(
            Text::new(i18n.tr("explore-hint-actions"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(grid)
        .push(
            Container::new(hint)
                .padding(spacing::MD)
                .style(styles::container::light_panel),
        )
        .into()
}

fn folder_card<'a>(i18n: &'a I18n, category: &'static Category) -> Element<'a, Message> {
    let accent = design_tokens::accent(category.color);

    let icon = Container::new(Text::new(category.icon).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(accent)),
            border: iced::Border {
                color: palette::INK,
                width: 2.0,
                radius: 4.0.into(),
            },
            shadow: design_tokens::shadow::RETRO,
            ..Default::default()
        });

    let label = Text::new(category.name).size(typography::BODY);
    let count = Text::new(
        i18n.tr_with_args("explore-item-count", &[("count", &category.item_count.to_string())]),
    )
    .size(typography::CAPTION)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    });

    let card = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(icon)
        .push(label)
        .push(count);

    button(card)
        .on_press(Message::CategorySelected(category.id))
        .padding(spacing::MD)
        .style(styles::button::link)
        .into()
}

fn folder_display<'a>(
    state: &'a State,
    i18n: &'a I18n,
    category: &'static Category,
) -> Element<'a, Message> {
    let back = button(Text::new(i18n.tr("explore-back-button")))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::action(palette::ACCENT_YELLOW));

    let items = state.browser.items();

    // Folder header strip inside the screen
    let folder_header = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .push(Text::new(category.icon).size(typography::TITLE_MD))
            .push(
                Column::new()
                    .push(Text::new(category.name).size(typography::BODY_LG))
                    .push(
                        Text::new(category.description)
                            .size(typography::CAPTION)
                            .style(dim_screen_text),
                    ),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::screen_strip);

    let listing: Element<'a, Message> = if items.is_empty() {
        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(Text::new("📂").size(typography::TITLE_LG))
                .push(Text::new(i18n.tr("explore-empty-folder")).style(dim_screen_text)),
        )
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
    } else {
        let mut rows = Column::new();
        for item in items {
            rows = rows.push(item_row(i18n, item));
        }
        scrollable(rows)
            .height(Length::Fixed(design_tokens::sizing::CRT_SCREEN_MIN_HEIGHT))
            .into()
    };

    let status_bar = Container::new(
        Row::new()
            .push(Text::new(i18n.tr("explore-legend-link")).size(typography::CAPTION))
            .push(iced::widget::Space::new().width(Length::Fill))
            .push(Text::new(i18n.tr("explore-legend-download")).size(typography::CAPTION))
            .push(iced::widget::Space::new().width(Length::Fill))
            .push(
                Text::new(
                    i18n.tr_with_args("explore-item-count", &[("count", &items.len().to_string())]),
                )
                .size(typography::CAPTION),
            ),
    )
    .width(Length::Fill)
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::screen_strip);

    let screen_content = Container::new(
        Column::new()
            .push(folder_header)
            .push(listing)
            .push(status_bar),
    )
    .width(Length::Fixed(design_tokens::sizing::CONTENT_MAX_WIDTH))
    .style(styles::container::screen);

    let monitor = crt::view_with_switcher(
        &state.frame,
        crt::ViewContext {
            i18n,
            title: Some(format!("{}.exe", category.name.to_lowercase())),
        },
        screen_content.into(),
        Message::FrameSelected,
    );

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(back)
        .push(monitor)
        .into()
}

fn item_row<'a>(i18n: &'a I18n, item: &'static Item) -> Element<'a, Message> {
    let glyph = Text::new(match item.kind() {
        ItemKind::Link => "🔗",
        ItemKind::Download => "💾",
    })
    .size(typography::BODY_LG);

    let name = Text::new(item.name)
        .size(typography::BODY_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PHOSPHOR_GREEN),
        });

    let badge_label = match item.link {
        catalog::ItemLink::Url(_) => i18n.tr("explore-open-badge"),
        catalog::ItemLink::Download { size_label } => size_label.to_string(),
    };
    let badge_color = match item.kind() {
        ItemKind::Link => palette::ACCENT_CYAN,
        ItemKind::Download => palette::ACCENT_MAGENTA,
    };
    let badge = Container::new(Text::new(badge_label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(
        move |_theme: &Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(badge_color)),
            text_color: Some(palette::INK),
            border: iced::Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    );

    let year = Text::new(item.year.to_string())
        .size(typography::CAPTION)
        .style(dim_screen_text);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(glyph)
        .push(Container::new(name).width(Length::Fill))
        .push(badge)
        .push(year);

    button(row)
        .on_press(Message::ItemActivated(*item))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::screen_row)
        .into()
}

pub(super) fn dim_screen_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: opacity::SCREEN_DIM,
            ..palette::PHOSPHOR_GREEN
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_category_switches_to_the_folder_view() {
        let mut state = State::new(FrameVariant::Smooth);
        let event = update(&mut state, Message::CategorySelected("geocities"));

        assert!(matches!(event, Event::None));
        assert_eq!(state.browser.selected().map(|c| c.id), Some("geocities"));
    }

    #[test]
    fn back_returns_to_the_grid() {
        let mut state = State::new(FrameVariant::Smooth);
        update(&mut state, Message::CategorySelected("flash"));
        update(&mut state, Message::Back);
        assert!(state.browser.selected().is_none());
    }

    #[test]
    fn activating_a_link_item_raises_an_open_url_action() {
        let mut state = State::new(FrameVariant::Smooth);
        update(&mut state, Message::CategorySelected("geocities"));
        let first = state.browser.items()[0];

        match update(&mut state, Message::ItemActivated(first)) {
            Event::Action(ItemAction::OpenUrl(url)) => {
                assert!(url.contains("johndoe"));
            }
            other => panic!("expected OpenUrl action, got {other:?}"),
        }
    }

    #[test]
    fn switching_the_frame_raises_a_persistence_event() {
        let mut state = State::new(FrameVariant::Smooth);

        match update(&mut state, Message::FrameSelected(FrameVariant::Pixel)) {
            Event::FrameVariantChanged(FrameVariant::Pixel) => {}
            other => panic!("expected FrameVariantChanged, got {other:?}"),
        }

        // Re-selecting the active skin is silent.
        assert!(matches!(
            update(&mut state, Message::FrameSelected(FrameVariant::Pixel)),
            Event::None
        ));
    }

    #[test]
    fn explore_view_renders_grid_and_folder() {
        let i18n = I18n::default();
        let mut state = State::new(FrameVariant::Smooth);
        drop(view(&state, ViewContext { i18n: &i18n }));

        update(&mut state, Message::CategorySelected("forums"));
        drop(view(&state, ViewContext { i18n: &i18n }));

        update(&mut state, Message::CategorySelected("geocities"));
        let _folder = view(&state, ViewContext { i18n: &i18n });
    }
}
