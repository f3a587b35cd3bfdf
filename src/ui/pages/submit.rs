// SPDX-License-Identifier: MPL-2.0
//! Submit screen: propose a URL for archival.
//!
//! The form is mock like everything else: a valid submission flips into a
//! success state, raises an event so the application can toast, and resets
//! after a short dwell driven by an application task.

use crate::catalog::Browser;
use crate::i18n::I18n;
use crate::ui::crt::{self, FrameVariant};
use crate::ui::design_tokens::{self, palette, spacing, typography};
use crate::ui::pages::explore::{dim_screen_text, screen_header};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Transient form state; created on entry, discarded on leave.
#[derive(Debug, Default)]
pub struct State {
    url: String,
    category: Option<&'static str>,
    year: String,
    notes: String,
    submitted: bool,
    frame: crt::State,
}

impl State {
    #[must_use]
    pub fn new(frame_variant: FrameVariant) -> Self {
        Self {
            frame: crt::State::new(frame_variant),
            ..Self::default()
        }
    }

    pub fn sync_frame(&mut self, variant: FrameVariant) {
        self.frame.sync_initial(variant);
    }

    /// A submission needs at least a URL and a category.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.url.trim().is_empty() && self.category.is_some()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

/// Messages emitted by the submit screen.
#[derive(Debug, Clone)]
pub enum Message {
    UrlChanged(String),
    CategoryPicked(&'static str),
    YearChanged(String),
    NotesChanged(String),
    Submit,
    /// The success dwell elapsed; clear the form.
    ResetForm,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A valid submission went through; toast and schedule the reset.
    Submitted,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::UrlChanged(url) => {
            state.url = url;
            Event::None
        }
        Message::CategoryPicked(id) => {
            state.category = Some(id);
            Event::None
        }
        Message::YearChanged(year) => {
            // Year is free-form but digits-only, four characters at most.
            if year.len() <= 4 && year.chars().all(|c| c.is_ascii_digit()) {
                state.year = year;
            }
            Event::None
        }
        Message::NotesChanged(notes) => {
            state.notes = notes;
            Event::None
        }
        Message::Submit => {
            if !state.is_valid() || state.submitted {
                return Event::None;
            }
            state.submitted = true;
            Event::Submitted
        }
        Message::ResetForm => {
            *state = State {
                frame: state.frame,
                ..State::default()
            };
            Event::None
        }
    }
}

/// Contextual data needed to render the submit screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = screen_header(ctx.i18n.tr("submit-title"), ctx.i18n.tr("submit-subtitle"));

    let screen_content: Element<'a, Message> = if state.submitted {
        success_panel(ctx.i18n)
    } else {
        form_panel(state, ctx.i18n)
    };

    let monitor = crt::view(
        &state.frame,
        crt::ViewContext {
            i18n: ctx.i18n,
            title: Some(ctx.i18n.tr("submit-window-title")),
        },
        Container::new(screen_content)
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
        .into()
}

fn form_panel<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let url_field = Column::new()
        .spacing(spacing::XXS)
        .push(field_label(i18n.tr("submit-url-label")))
        .push(
            text_input(&i18n.tr("submit-url-placeholder"), &state.url)
                .on_input(Message::UrlChanged)
                .size(typography::BODY_LG)
                .padding(spacing::SM),
        )
        .push(
            Text::new(i18n.tr("submit-url-hint"))
                .size(typography::CAPTION)
                .style(dim_screen_text),
        );

    let mut pills = Column::new().spacing(spacing::XS);
    for chunk in Browser::categories().chunks(3) {
        let mut row = Row::new().spacing(spacing::XS);
        for category in chunk {
            let is_picked = state.category == Some(category.id);
            let pill = Column::new()
                .align_x(Horizontal::Center)
                .push(Text::new(category.icon).size(typography::BODY_LG))
                .push(Text::new(category.name).size(typography::CAPTION));
            row = row.push(
                button(pill)
                    .on_press(Message::CategoryPicked(category.id))
                    .padding(spacing::SM)
                    .style(styles::button::toggle(is_picked)),
            );
        }
        pills = pills.push(row);
    }
    let category_field = Column::new()
        .spacing(spacing::XXS)
        .push(field_label(i18n.tr("submit-category-label")))
        .push(pills);

    let year_field = Column::new()
        .spacing(spacing::XXS)
        .push(field_label(i18n.tr("submit-year-label")))
        .push(
            text_input(&i18n.tr("submit-year-placeholder"), &state.year)
                .on_input(Message::YearChanged)
                .size(typography::BODY_LG)
                .padding(spacing::SM)
                .width(Length::Fixed(120.0)),
        );

    let notes_field = Column::new()
        .spacing(spacing::XXS)
        .push(field_label(i18n.tr("submit-notes-label")))
        .push(
            text_input(&i18n.tr("submit-notes-placeholder"), &state.notes)
                .on_input(Message::NotesChanged)
                .size(typography::BODY_LG)
                .padding(spacing::SM),
        );

    let mut submit = button(Text::new(i18n.tr("submit-button")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::action(palette::ACCENT_MAGENTA));
    if state.is_valid() {
        submit = submit.on_press(Message::Submit);
    }

    Column::new()
        .spacing(spacing::LG)
        .push(url_field)
        .push(category_field)
        .push(year_field)
        .push(notes_field)
        .push(Container::new(submit).width(Length::Fill).align_x(Horizontal::Center))
        .into()
}

fn success_panel(i18n: &I18n) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("📡").size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("submit-success-title"))
                .size(typography::TITLE_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PHOSPHOR_GREEN),
                }),
        )
        .push(
            Text::new(i18n.tr("submit-success-body"))
                .size(typography::BODY)
                .style(dim_screen_text),
        )
        .into()
}

fn field_label<'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ACCENT_CYAN),
        })
        .into()
}
