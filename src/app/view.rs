// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar, the active screen, and the toast overlay stacked on
//! top.

use super::{App, Message, Screen};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::pages::{about, explore, home, search, settings, submit, timeline};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match app.screen {
        Screen::Home => home::view(home::ViewContext { i18n: &app.i18n }).map(Message::Home),
        Screen::Explore => explore::view(&app.explore, explore::ViewContext { i18n: &app.i18n })
            .map(Message::Explore),
        Screen::Timeline => {
            timeline::view(&app.timeline, timeline::ViewContext { i18n: &app.i18n })
                .map(Message::Timeline)
        }
        Screen::Search => {
            search::view(&app.search, search::ViewContext { i18n: &app.i18n }).map(Message::Search)
        }
        Screen::Submit => {
            submit::view(&app.submit, submit::ViewContext { i18n: &app.i18n }).map(Message::Submit)
        }
        Screen::About => about::view(&app.about, about::ViewContext { i18n: &app.i18n }),
        Screen::Settings => settings::view(
            &app.settings,
            settings::ViewContext {
                i18n: &app.i18n,
                is_dark: app.theme_mode.is_dark(),
                frame_variant: app.config.frame_variant.unwrap_or_default(),
            },
        )
        .map(Message::Settings),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        current: app.screen,
    })
    .map(Message::Navbar);

    let base = Column::new()
        .push(navbar_view)
        .push(
            scrollable(
                Container::new(current_view)
                    .width(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Center),
            )
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(base)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Notification;

    #[test]
    fn every_screen_renders() {
        let mut app = App::default();
        for screen in Screen::ALL {
            app.navigate(screen);
            let _element = view(&app);
        }
    }

    #[test]
    fn view_renders_with_toasts_visible() {
        let mut app = App::default();
        app.notifications
            .push(Notification::info("notification-submit-received"));
        let _element = view(&app);
    }
}
