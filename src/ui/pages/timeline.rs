// SPDX-License-Identifier: MPL-2.0
//! Timeline screen: decade badges, the year strip, and per-year events.

use crate::app::Screen;
use crate::catalog::data::Decade;
use crate::catalog::timeline::TimelineState;
use crate::catalog::EventKind;
use crate::i18n::I18n;
use crate::ui::crt::{self, FrameVariant};
use crate::ui::design_tokens::{self, palette, sizing, spacing, typography};
use crate::ui::pages::explore::{dim_screen_text, screen_header};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Transient year selection; created on entry, discarded on leave.
#[derive(Debug, Default)]
pub struct State {
    timeline: TimelineState,
    frame: crt::State,
}

impl State {
    #[must_use]
    pub fn new(frame_variant: FrameVariant) -> Self {
        Self {
            timeline: TimelineState::new(),
            frame: crt::State::new(frame_variant),
        }
    }

    pub fn sync_frame(&mut self, variant: FrameVariant) {
        self.frame.sync_initial(variant);
    }
}

/// Messages emitted by the timeline screen.
#[derive(Debug, Clone)]
pub enum Message {
    DecadeSelected(&'static str),
    YearSelected(u16),
    BrowseArchives,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::DecadeSelected(id) => {
            state.timeline.select_decade(id);
            Event::None
        }
        Message::YearSelected(year) => {
            state.timeline.select_year(year);
            Event::None
        }
        Message::BrowseArchives => Event::Navigate(Screen::Explore),
    }
}

/// Contextual data needed to render the timeline screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = screen_header(
        ctx.i18n.tr("timeline-title"),
        ctx.i18n.tr("timeline-subtitle"),
    );

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(header)
        .push(decade_badges())
        .push(year_strip(state));

    match state.timeline.selected_year() {
        Some(year) => content = content.push(year_display(state, ctx.i18n, year)),
        None => {
            content = content.push(
                Container::new(Text::new(ctx.i18n.tr("timeline-hint")).size(typography::BODY))
                    .padding(spacing::MD)
                    .style(styles::container::light_panel),
            );
        }
    }

    content.into()
}

fn decade_badges() -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::MD);
    for decade in TimelineState::decades() {
        row = row.push(decade_badge(decade));
    }
    row.into()
}

fn decade_badge(decade: &'static Decade) -> Element<'static, Message> {
    let accent = design_tokens::accent(decade.color);

    let card = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(decade.icon).size(typography::TITLE_MD))
        .push(
            Text::new(decade.id)
                .size(typography::BODY_LG)
                .style(move |_theme: &Theme| text::Style { color: Some(accent) }),
        )
        .push(
            Text::new(decade.highlight)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    button(
        Container::new(card)
            .padding(spacing::MD)
            .style(styles::container::light_panel),
    )
    .on_press(Message::DecadeSelected(decade.id))
    .style(styles::button::link)
    .into()
}

fn year_strip(state: &State) -> Element<'_, Message> {
    let selected = state.timeline.selected_year();

    let mut strip = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center);

    for decade in TimelineState::decades() {
        let accent = design_tokens::accent(decade.color);
        for &year in decade.years {
            let is_selected = selected == Some(year);
            let dot_size = if is_selected {
                sizing::YEAR_DOT_SELECTED
            } else {
                sizing::YEAR_DOT
            };

            let dot = Container::new(text(""))
                .width(Length::Fixed(dot_size))
                .height(Length::Fixed(dot_size))
                .style(move |_theme: &Theme| iced::widget::container::Style {
                    background: Some(Background::Color(accent)),
                    border: Border {
                        color: palette::INK,
                        width: 2.0,
                        radius: design_tokens::radius::FULL.into(),
                    },
                    ..Default::default()
                });

            let label = Text::new(year.to_string()).size(if is_selected {
                typography::BODY
            } else {
                typography::CAPTION
            });

            strip = strip.push(
                button(
                    Column::new()
                        .spacing(spacing::XXS)
                        .align_x(Horizontal::Center)
                        .push(dot)
                        .push(label),
                )
                .on_press(Message::YearSelected(year))
                .padding(spacing::XXS)
                .style(styles::button::link),
            );
        }
    }

    Container::new(
        iced::widget::scrollable(strip).direction(Direction::Horizontal(Scrollbar::new())),
    )
    .padding(spacing::MD)
    .style(styles::container::light_panel)
    .into()
}

fn year_display<'a>(state: &'a State, i18n: &'a I18n, year: u16) -> Element<'a, Message> {
    let events = state.timeline.events();

    let year_header = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(year.to_string())
                .size(typography::TITLE_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ACCENT_CYAN),
                }),
        )
        .push(
            Text::new(
                i18n.tr_with_args("timeline-event-count", &[("count", &events.len().to_string())]),
            )
            .size(typography::CAPTION)
            .style(dim_screen_text),
        );

    let listing: Element<'a, Message> = if events.is_empty() {
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new("📂").size(typography::TITLE_LG))
            .push(
                Text::new(i18n.tr_with_args("timeline-empty", &[("year", &year.to_string())]))
                    .style(dim_screen_text),
            )
            .into()
    } else {
        let mut rows = Column::new().spacing(spacing::SM);
        for event in events {
            let is_milestone = event.kind == EventKind::Milestone;
            let border_color = if is_milestone {
                palette::ACCENT_CYAN
            } else {
                Color::from_rgb(0.2, 0.2, 0.2)
            };
            rows = rows.push(
                Container::new(
                    Row::new()
                        .spacing(spacing::SM)
                        .align_y(Vertical::Center)
                        .push(Text::new(if is_milestone { "⭐" } else { "📌" }))
                        .push(Text::new(event.name).size(typography::BODY_LG).style(
                            |_theme: &Theme| text::Style {
                                color: Some(palette::PHOSPHOR_GREEN),
                            },
                        )),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(move |_theme: &Theme| iced::widget::container::Style {
                    background: Some(Background::Color(if is_milestone {
                        Color {
                            a: 0.1,
                            ..palette::ACCENT_CYAN
                        }
                    } else {
                        Color::from_rgb(0.067, 0.067, 0.067)
                    })),
                    border: Border {
                        color: border_color,
                        width: 2.0,
                        radius: design_tokens::radius::SM.into(),
                    },
                    ..Default::default()
                }),
            );
        }
        rows.into()
    };

    let browse = button(
        Text::new(i18n.tr_with_args("timeline-browse-button", &[("year", &year.to_string())])),
    )
    .on_press(Message::BrowseArchives)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::action(palette::ACCENT_CYAN));

    let screen_content = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(year_header)
            .push(listing)
            .push(browse),
    )
    .width(Length::Fixed(design_tokens::sizing::CONTENT_MAX_WIDTH * 0.7))
    .padding(spacing::MD)
    .style(styles::container::screen);

    crt::view(
        &state.frame,
        crt::ViewContext {
            i18n,
            title: Some(format!("archive_{year}.exe")),
        },
        screen_content.into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decade_badge_selects_the_first_year() {
        let mut state = State::new(FrameVariant::Smooth);
        update(&mut state, Message::DecadeSelected("1990s"));
        assert_eq!(state.timeline.selected_year(), Some(1995));
    }

    #[test]
    fn browse_archives_navigates_to_explore() {
        let mut state = State::new(FrameVariant::Smooth);
        assert!(matches!(
            update(&mut state, Message::BrowseArchives),
            Event::Navigate(Screen::Explore)
        ));
    }

    #[test]
    fn timeline_view_renders_with_and_without_selection() {
        let i18n = I18n::default();
        let mut state = State::new(FrameVariant::Smooth);
        drop(view(&state, ViewContext { i18n: &i18n }));

        update(&mut state, Message::YearSelected(2005));
        drop(view(&state, ViewContext { i18n: &i18n }));

        update(&mut state, Message::YearSelected(1997));
        let _empty = view(&state, ViewContext { i18n: &i18n });
    }
}
