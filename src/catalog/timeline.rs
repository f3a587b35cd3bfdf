// SPDX-License-Identifier: MPL-2.0
//! Year selection over the static timeline tables.

use super::data::{self, Decade, YearEvent, DECADES};

/// Selection state for the timeline screen.
#[derive(Debug, Default)]
pub struct TimelineState {
    selected_year: Option<u16>,
}

impl TimelineState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered decade strip.
    #[must_use]
    pub fn decades() -> &'static [Decade] {
        DECADES
    }

    #[must_use]
    pub fn selected_year(&self) -> Option<u16> {
        self.selected_year
    }

    /// Jumps to a specific year. Years outside the strip are ignored so a
    /// stale click can never select something the strip does not show.
    pub fn select_year(&mut self, year: u16) {
        if DECADES.iter().any(|d| d.years.contains(&year)) {
            self.selected_year = Some(year);
        }
    }

    /// Selecting a decade lands on its first year, mirroring the strip's
    /// badge behavior.
    pub fn select_decade(&mut self, id: &str) {
        if let Some(decade) = DECADES.iter().find(|d| d.id == id) {
            if let Some(first) = decade.years.first() {
                self.selected_year = Some(*first);
            }
        }
    }

    /// The decade a year belongs to.
    #[must_use]
    pub fn decade_of(year: u16) -> Option<&'static Decade> {
        DECADES.iter().find(|d| d.years.contains(&year))
    }

    /// Events for the selected year; empty both when nothing is selected and
    /// when the year has no archived events.
    #[must_use]
    pub fn events(&self) -> &'static [YearEvent] {
        self.selected_year.map(data::events_for).unwrap_or(&[])
    }
}
