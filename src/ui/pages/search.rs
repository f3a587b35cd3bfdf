// SPDX-License-Identifier: MPL-2.0
//! Search screen: the query form and the CRT results display.
//!
//! Submitting a query raises [`Event::Search`] with a generation-stamped
//! ticket; the application runs the simulated round-trip and feeds the
//! outcome back through [`Message::Completed`]. The page commits only the
//! newest generation, so an overlapping slow search can never overwrite a
//! later one.

use crate::catalog::{SearchHit, SearchState, SearchTicket};
use crate::i18n::I18n;
use crate::ui::crt::{self, FrameVariant};
use crate::ui::design_tokens::{self, palette, spacing, typography};
use crate::ui::pages::explore::{dim_screen_text, screen_header};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Transient query state; created on entry, discarded on leave.
#[derive(Debug, Default)]
pub struct State {
    search: SearchState,
    frame: crt::State,
}

impl State {
    #[must_use]
    pub fn new(frame_variant: FrameVariant) -> Self {
        Self {
            search: SearchState::new(),
            frame: crt::State::new(frame_variant),
        }
    }

    pub fn sync_frame(&mut self, variant: FrameVariant) {
        self.frame.sync_initial(variant);
    }

    #[must_use]
    pub fn search(&self) -> &SearchState {
        &self.search
    }
}

/// Messages emitted by the search screen.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    /// The simulated round-trip finished for the given generation.
    Completed {
        generation: u64,
        hits: Vec<SearchHit>,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Run this query after the simulated latency.
    Search(SearchTicket),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => {
            state.search.set_query(query);
            Event::None
        }
        Message::Submit => match state.search.begin() {
            Some(ticket) => Event::Search(ticket),
            None => Event::None,
        },
        Message::Completed { generation, hits } => {
            // Superseded generations are dropped silently.
            state.search.commit(generation, hits);
            Event::None
        }
    }
}

/// Contextual data needed to render the search screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = screen_header(ctx.i18n.tr("search-title"), ctx.i18n.tr("search-subtitle"));

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(header)
        .push(search_form(state, ctx.i18n));

    if state.search.has_searched() {
        content = content.push(results_display(state, ctx.i18n));
    } else {
        content = content.push(
            Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .align_x(Horizontal::Center)
                    .push(Text::new("🔎").size(typography::TITLE_LG))
                    .push(Text::new(ctx.i18n.tr("search-prompt")).size(typography::BODY)),
            )
            .padding(spacing::XL)
            .style(styles::container::light_panel),
        );
    }

    content.into()
}

fn search_form<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("search-placeholder"), state.search.query())
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submit)
        .size(typography::BODY_LG)
        .padding(spacing::SM)
        .width(Length::Fixed(design_tokens::sizing::CONTENT_MAX_WIDTH * 0.6));

    let submit_label = if state.search.is_searching() {
        "⏳"
    } else {
        "🔍"
    };
    let mut submit = button(
        Text::new(format!("{submit_label} {}", i18n.tr("search-button"))).size(typography::BODY),
    )
    .padding([spacing::SM, spacing::MD])
    .style(styles::button::action(palette::ACCENT_CYAN));
    if !state.search.is_searching() {
        submit = submit.on_press(Message::Submit);
    }

    let form = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(submit);

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Container::new(form)
                .padding(spacing::MD)
                .style(styles::container::light_panel),
        )
        .push(
            Text::new(i18n.tr("search-tips"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        )
        .into()
}

fn results_display<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let results = state.search.results();

    let results_header = Container::new(
        Row::new()
            .push(
                Text::new(
                    i18n.tr_with_args("search-results-for", &[("query", state.search.query())]),
                )
                .size(typography::BODY_LG),
            )
            .push(iced::widget::Space::new().width(Length::Fill))
            .push(
                Text::new(
                    i18n.tr_with_args("search-found", &[("count", &results.len().to_string())]),
                )
                .size(typography::CAPTION)
                .style(dim_screen_text),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::screen_strip);

    let listing: Element<'a, Message> = if state.search.is_searching() {
        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(Text::new("🔍").size(typography::TITLE_LG))
                .push(Text::new(i18n.tr("search-loading")).style(|_theme: &Theme| text::Style {
                    color: Some(palette::PHOSPHOR_GREEN),
                })),
        )
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
    } else {
        let mut rows = Column::new();
        for hit in results {
            rows = rows.push(result_row(hit));
        }
        scrollable(rows)
            .height(Length::Fixed(design_tokens::sizing::CRT_SCREEN_MIN_HEIGHT))
            .into()
    };

    let screen_content = Container::new(Column::new().push(results_header).push(listing))
        .width(Length::Fixed(design_tokens::sizing::CONTENT_MAX_WIDTH))
        .style(styles::container::screen);

    crt::view(
        &state.frame,
        crt::ViewContext {
            i18n,
            title: Some(i18n.tr("search-results-title")),
        },
        screen_content.into(),
    )
}

fn result_row(hit: &SearchHit) -> Element<'_, Message> {
    let glyph = Text::new(match hit.kind {
        crate::catalog::ItemKind::Link => "🔗",
        crate::catalog::ItemKind::Download => "💾",
    })
    .size(typography::BODY_LG);

    let name = Text::new(hit.name)
        .size(typography::BODY_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PHOSPHOR_GREEN),
        });
    let origin = Text::new(format!("{} • {}", hit.category_id, hit.year))
        .size(typography::CAPTION)
        .style(dim_screen_text);

    // High-confidence hits get the cyan badge, the rest go yellow.
    let badge_color = if hit.relevance > 85 {
        palette::ACCENT_CYAN
    } else {
        palette::ACCENT_YELLOW
    };
    let badge = Container::new(Text::new(format!("{}%", hit.relevance)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(badge_color)),
            text_color: Some(palette::INK),
            border: iced::Border {
                radius: design_tokens::radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(glyph)
            .push(
                Container::new(Column::new().push(name).push(origin)).width(Length::Fill),
            )
            .push(badge),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::search::run_query;

    #[test]
    fn submit_raises_a_search_event_with_the_trimmed_query() {
        let mut state = State::new(FrameVariant::Smooth);
        update(&mut state, Message::QueryChanged("  flash ".to_string()));

        match update(&mut state, Message::Submit) {
            Event::Search(ticket) => assert_eq!(ticket.query, "flash"),
            other => panic!("expected Search event, got {other:?}"),
        }
        assert!(state.search.is_searching());
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut state = State::new(FrameVariant::Smooth);
        update(&mut state, Message::QueryChanged("   ".to_string()));

        assert!(matches!(update(&mut state, Message::Submit), Event::None));
        assert!(!state.search.has_searched());
    }

    #[test]
    fn only_the_latest_generation_commits() {
        let mut state = State::new(FrameVariant::Smooth);

        update(&mut state, Message::QueryChanged("flash".to_string()));
        let first = match update(&mut state, Message::Submit) {
            Event::Search(ticket) => ticket,
            other => panic!("expected Search event, got {other:?}"),
        };

        update(&mut state, Message::QueryChanged("myspace".to_string()));
        let second = match update(&mut state, Message::Submit) {
            Event::Search(ticket) => ticket,
            other => panic!("expected Search event, got {other:?}"),
        };

        // The stale response lands first and is ignored.
        update(
            &mut state,
            Message::Completed {
                generation: first.generation,
                hits: run_query(&first.query),
            },
        );
        assert!(state.search.is_searching());

        update(
            &mut state,
            Message::Completed {
                generation: second.generation,
                hits: run_query(&second.query),
            },
        );
        assert!(!state.search.is_searching());
        assert!(state
            .search
            .results()
            .iter()
            .all(|h| h.category_id == "myspace"));
    }

    #[test]
    fn search_view_renders_every_phase() {
        let i18n = I18n::default();
        let mut state = State::new(FrameVariant::Smooth);
        drop(view(&state, ViewContext { i18n: &i18n }));

        update(&mut state, Message::QueryChanged("flash".to_string()));
        let ticket = match update(&mut state, Message::Submit) {
            Event::Search(ticket) => ticket,
            other => panic!("expected Search event, got {other:?}"),
        };
        drop(view(&state, ViewContext { i18n: &i18n }));

        update(
            &mut state,
            Message::Completed {
                generation: ticket.generation,
                hits: run_query(&ticket.query),
            },
        );
        let _results = view(&state, ViewContext { i18n: &i18n });
    }
}
