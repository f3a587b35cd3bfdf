// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Explore,
    Timeline,
    Search,
    Submit,
    About,
    Settings,
}

impl Screen {
    /// Every screen, in navbar display order.
    pub const ALL: [Screen; 7] = [
        Screen::Home,
        Screen::Explore,
        Screen::Timeline,
        Screen::Search,
        Screen::Submit,
        Screen::About,
        Screen::Settings,
    ];

    /// The i18n key of the navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Screen::Home => "nav-home",
            Screen::Explore => "nav-explore",
            Screen::Timeline => "nav-timeline",
            Screen::Search => "nav-search",
            Screen::Submit => "nav-submit",
            Screen::About => "nav-about",
            Screen::Settings => "nav-settings",
        }
    }
}
