// SPDX-License-Identifier: MPL-2.0
//! About screen: the museum's mission statement, framed like a readme.

use crate::i18n::I18n;
use crate::ui::crt::{self, FrameVariant};
use crate::ui::design_tokens::{self, palette, spacing, typography};
use crate::ui::pages::explore::{dim_screen_text, screen_header};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Text};
use iced::{Element, Length, Theme};

/// The about screen only owns its monitor frame.
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

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// The screen emits no messages; content is generic over the parent's type.
pub fn view<'a, M: 'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, M> {
    let header = screen_header(ctx.i18n.tr("about-title"), ctx.i18n.tr("about-subtitle"));

    let readme = Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(ctx.i18n.tr("settings-about-name"))
                .size(typography::TITLE_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PHOSPHOR_GREEN),
                }),
        )
        .push(Text::new(ctx.i18n.tr("about-mission")).size(typography::BODY))
        .push(
            Text::new(ctx.i18n.tr("about-disclaimer"))
                .size(typography::CAPTION)
                .style(dim_screen_text),
        );

    let monitor = crt::view(
        &state.frame,
        crt::ViewContext {
            i18n: ctx.i18n,
            title: Some(ctx.i18n.tr("about-window-title")),
        },
        Container::new(readme)
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
