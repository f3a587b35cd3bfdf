// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Each handler routes a component's message through its `update` function
//! and turns the resulting event into application-level effects: navigation,
//! config persistence, launcher calls, toasts, and async tasks.

use super::{App, Message};
use crate::catalog::{self, browser::ItemAction, SearchTicket};
use crate::launcher::Launcher;
use crate::ui::crt::FrameVariant;
use crate::ui::design_tokens::animation;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::pages::{explore, home, search, settings, submit, timeline};
use crate::ui::theming::ThemeMode;
use iced::Task;

pub(super) fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::Navigate(screen) => app.navigate(screen),
    }
    Task::none()
}

pub(super) fn handle_home(app: &mut App, message: home::Message) -> Task<Message> {
    match home::update(message) {
        home::Event::Navigate(screen) => app.navigate(screen),
    }
    Task::none()
}

pub(super) fn handle_explore(app: &mut App, message: explore::Message) -> Task<Message> {
    match explore::update(&mut app.explore, message) {
        explore::Event::None => {}
        explore::Event::Action(action) => perform_item_action(app, action),
        explore::Event::FrameVariantChanged(variant) => persist_frame_variant(app, variant),
    }
    Task::none()
}

pub(super) fn handle_timeline(app: &mut App, message: timeline::Message) -> Task<Message> {
    match timeline::update(&mut app.timeline, message) {
        timeline::Event::None => {}
        timeline::Event::Navigate(screen) => app.navigate(screen),
    }
    Task::none()
}

pub(super) fn handle_search(app: &mut App, message: search::Message) -> Task<Message> {
    match search::update(&mut app.search, message) {
        search::Event::None => Task::none(),
        search::Event::Search(ticket) => search_task(ticket),
    }
}

pub(super) fn handle_submit(app: &mut App, message: submit::Message) -> Task<Message> {
    match submit::update(&mut app.submit, message) {
        submit::Event::None => Task::none(),
        submit::Event::Submitted => {
            app.notifications
                .push(Notification::success("notification-submit-received"));
            submit_reset_task()
        }
    }
}

pub(super) fn handle_settings(app: &mut App, message: settings::Message) -> Task<Message> {
    match settings::update(message) {
        settings::Event::DarkModeToggled(dark) => {
            app.theme_mode = ThemeMode::from_flag(Some(dark));
            app.config.dark_mode = Some(dark);
            app.persist_config();
        }
        settings::Event::FrameVariantSelected(variant) => persist_frame_variant(app, variant),
        settings::Event::LanguageSelected(locale) => {
            app.config.language = Some(locale.to_string());
            app.i18n.set_locale(locale);
            app.persist_config();
        }
    }
    Task::none()
}

/// Performs the boundary effect of an activated item.
fn perform_item_action(app: &mut App, action: ItemAction) {
    match action {
        ItemAction::OpenUrl(url) => app.launcher.open_url(url),
        ItemAction::NotifyDownload { name, size_label } => {
            app.notifications.push(
                Notification::info("notification-download")
                    .with_arg("name", name)
                    .with_arg("size", size_label),
            );
        }
    }
}

/// Persists a new frame variant and mirrors it to every monitor.
fn persist_frame_variant(app: &mut App, variant: FrameVariant) {
    app.config.frame_variant = Some(variant);
    app.persist_config();
    app.apply_frame_variant(variant);
}

/// The simulated search round-trip: sleep, then run the query. Swapping in a
/// real backend call here would not change any caller.
fn search_task(ticket: SearchTicket) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(catalog::SEARCH_LATENCY).await;
            let hits = catalog::search::run_query(&ticket.query);
            (ticket.generation, hits)
        },
        |(generation, hits)| Message::Search(search::Message::Completed { generation, hits }),
    )
}

/// Clears the submit form after the success state has been readable.
fn submit_reset_task() -> Task<Message> {
    Task::perform(
        async {
            tokio::time::sleep(animation::SUBMIT_RESET_DELAY).await;
        },
        |()| Message::Submit(submit::Message::ResetForm),
    )
}
