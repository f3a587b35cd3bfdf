// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens, localization, and persisted
//! preferences, and translates page events into side effects: launching
//! URLs, pushing toasts, saving the config, and running the simulated
//! search round-trip. Policy decisions (window sizing, persistence, theme
//! resolution) stay close to the main update loop so user-facing behavior
//! is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::launcher::SystemLauncher;
use crate::ui::crt::FrameVariant;
use crate::ui::notifications;
use crate::ui::pages::{about, explore, search, settings, submit, timeline};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging screens, localization, and persisted
/// preferences.
pub struct App {
    pub i18n: I18n,
    pub(crate) screen: Screen,
    pub(crate) config: Config,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) explore: explore::State,
    pub(crate) timeline: timeline::State,
    pub(crate) search: search::State,
    pub(crate) submit: submit::State,
    pub(crate) settings: settings::State,
    pub(crate) about: about::State,
    pub(crate) notifications: notifications::Manager,
    pub(crate) launcher: SystemLauncher,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let variant = FrameVariant::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            config: Config::default(),
            theme_mode: ThemeMode::System,
            explore: explore::State::new(variant),
            timeline: timeline::State::new(variant),
            search: search::State::new(variant),
            submit: submit::State::new(variant),
            settings: settings::State::new(variant),
            about: about::State::new(variant),
            notifications: notifications::Manager::new(),
            launcher: SystemLauncher::new(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let variant = config.frame_variant.unwrap_or_default();

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = ThemeMode::from_flag(config.dark_mode);
        app.config = config;
        app.apply_frame_variant(variant);

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => update::handle_navbar(self, navbar_message),
            Message::Home(home_message) => update::handle_home(self, home_message),
            Message::Explore(explore_message) => update::handle_explore(self, explore_message),
            Message::Timeline(timeline_message) => update::handle_timeline(self, timeline_message),
            Message::Search(search_message) => update::handle_search(self, search_message),
            Message::Submit(submit_message) => update::handle_submit(self, submit_message),
            Message::Settings(settings_message) => update::handle_settings(self, settings_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Propagates a frame-variant preference into every monitor instance.
    pub(crate) fn apply_frame_variant(&mut self, variant: FrameVariant) {
        self.explore.sync_frame(variant);
        self.timeline.sync_frame(variant);
        self.search.sync_frame(variant);
        self.submit.sync_frame(variant);
        self.settings.sync_frame(variant);
        self.about.sync_frame(variant);
    }

    /// Navigates to a screen, discarding the left screen's transient state.
    ///
    /// Page selections do not survive navigation; only the persisted frame
    /// variant carries over into the fresh state.
    pub(crate) fn navigate(&mut self, target: Screen) {
        if self.screen == target {
            return;
        }
        let variant = self.config.frame_variant.unwrap_or_default();
        match self.screen {
            Screen::Explore => self.explore = explore::State::new(variant),
            Screen::Timeline => self.timeline = timeline::State::new(variant),
            Screen::Search => self.search = search::State::new(variant),
            Screen::Submit => self.submit = submit::State::new(variant),
            Screen::Home | Screen::About | Screen::Settings => {}
        }
        self.screen = target;
    }

    /// Persists the current config, logging quietly on failure; preference
    /// changes should never interrupt the UI.
    pub(crate) fn persist_config(&self) {
        if let Err(e) = config::save(&self.config) {
            eprintln!("Failed to save settings: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pages::explore::Message as ExploreMessage;

    #[test]
    fn default_app_starts_on_home() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert!(!app.title().starts_with("MISSING:"));
    }

    #[test]
    fn navigation_discards_the_left_screens_selection() {
        let mut app = App::default();
        app.navigate(Screen::Explore);
        let _ = app.update(Message::Explore(ExploreMessage::CategorySelected("flash")));
        assert_eq!(app.explore.selected_category(), Some("flash"));

        app.navigate(Screen::Home);
        app.navigate(Screen::Explore);
        // Fresh state: back on the category grid.
        assert_eq!(app.explore.selected_category(), None);
    }

    #[test]
    fn theme_follows_the_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Dark;
        assert_eq!(app.theme(), Theme::Dark);
        app.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);
    }
}
