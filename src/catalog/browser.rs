// SPDX-License-Identifier: MPL-2.0
//! Two-level drill-down over the static catalog.
//!
//! The browser is a tiny state machine with two states: the category grid
//! (nothing selected) and the item list of one selected category. Selecting
//! an unknown id is the single failure mode; an empty item list is a valid
//! state, not an error.

use super::data::{self, CATEGORIES};
use super::types::{Category, Item, ItemLink};
use crate::error::CatalogError;

/// Drill-down state for one browsing surface.
///
/// Each screen owns its own `Browser`; the state is created when the screen
/// is entered and discarded when it is left.
#[derive(Debug, Default)]
pub struct Browser {
    selected: Option<&'static Category>,
}

impl Browser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full ordered category list.
    #[must_use]
    pub fn categories() -> &'static [Category] {
        CATEGORIES
    }

    /// The currently selected category, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&'static Category> {
        self.selected
    }

    /// Selects a category by id and returns its registered items.
    ///
    /// The returned slice is empty for categories without registrations.
    /// Unknown ids leave the current selection untouched.
    pub fn select(&mut self, id: &str) -> Result<&'static [Item], CatalogError> {
        let category = CATEGORIES
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CatalogError::UnknownCategory(id.to_string()))?;
        self.selected = Some(category);
        Ok(data::items_for(id).unwrap_or(&[]))
    }

    /// Returns to the category grid. Idempotent.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Items of the selected category; empty when browsing the grid.
    #[must_use]
    pub fn items(&self) -> &'static [Item] {
        self.selected
            .and_then(|c| data::items_for(c.id))
            .unwrap_or(&[])
    }
}

/// The boundary effect an item activation resolves to.
///
/// The browser never performs the effect itself: links go to the launcher,
/// downloads to the notification manager. Resolving the tagged action here
/// keeps that decision in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    OpenUrl(&'static str),
    NotifyDownload {
        name: &'static str,
        size_label: &'static str,
    },
}

/// Resolves what activating an item should do.
#[must_use]
pub fn activate(item: &Item) -> ItemAction {
    match item.link {
        ItemLink::Url(url) => ItemAction::OpenUrl(url),
        ItemLink::Download { size_label } => ItemAction::NotifyDownload {
            name: item.name,
            size_label,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::ItemKind;

    #[test]
    fn categories_are_listed_in_insertion_order() {
        let ids: Vec<_> = Browser::categories().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            ["geocities", "flash", "myspace", "forums", "early-blogs", "misc"]
        );
    }

    #[test]
    fn select_returns_registered_items_in_order() {
        let mut browser = Browser::new();
        let items = browser.select("geocities").expect("known category");

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "JohnDoe_Homepage");
        assert_eq!(browser.selected().map(|c| c.id), Some("geocities"));
    }

    #[test]
    fn select_unknown_category_fails_and_keeps_state() {
        let mut browser = Browser::new();
        browser.select("flash").expect("known category");

        let err = browser.select("winamp-skins").unwrap_err();
        assert_eq!(err, CatalogError::UnknownCategory("winamp-skins".into()));
        assert_eq!(browser.selected().map(|c| c.id), Some("flash"));
    }

    #[test]
    fn selecting_an_empty_category_is_valid() {
        let mut browser = Browser::new();
        let items = browser.select("forums").expect("known category");
        assert!(items.is_empty());
        assert!(browser.items().is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut browser = Browser::new();
        browser.select("myspace").expect("known category");

        browser.clear();
        assert!(browser.selected().is_none());
        browser.clear();
        assert!(browser.selected().is_none());
    }

    #[test]
    fn activating_a_link_opens_its_exact_url() {
        let mut browser = Browser::new();
        let items = browser.select("geocities").expect("known category");
        let first = &items[0];
        assert_eq!(first.kind(), ItemKind::Link);

        match activate(first) {
            ItemAction::OpenUrl(url) => assert_eq!(
                url,
                "https://web.archive.org/web/19990125/http://www.geocities.com/johndoe"
            ),
            other => panic!("expected OpenUrl, got {other:?}"),
        }
    }

    #[test]
    fn activating_a_download_notifies_with_name_and_size() {
        let mut browser = Browser::new();
        let items = browser.select("flash").expect("known category");

        match activate(&items[0]) {
            ItemAction::NotifyDownload { name, size_label } => {
                assert_eq!(name, "StickFight_Classic.swf");
                assert_eq!(size_label, "2.4 MB");
            }
            other => panic!("expected NotifyDownload, got {other:?}"),
        }
    }
}
