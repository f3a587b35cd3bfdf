// SPDX-License-Identifier: MPL-2.0
//! Data model for the mock catalog.
//!
//! All catalog content is `'static`: the dataset is compiled in and never
//! mutated, so the types borrow from it freely instead of owning strings.

/// Named accent color reference, resolved to a concrete color by the
/// design-token layer. Catalog data names a token; it never holds a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentToken {
    Cyan,
    Magenta,
    Yellow,
    Pink,
    Orange,
}

/// A browsable category of archived artifacts.
///
/// Ids are unique and stable for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: AccentToken,
    pub description: &'static str,
    /// Advertised collection size. Display-only; the registered item list
    /// is a small sample and may be shorter (or empty).
    pub item_count: u32,
}

/// How an item is materialized when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Opens an archived URL in the system browser.
    Link,
    /// A downloadable artifact; activation surfaces a notification.
    Download,
}

/// The kind-specific payload of an [`Item`].
///
/// A link always carries a URL and a download always carries a size label;
/// the enum makes any other combination unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLink {
    Url(&'static str),
    Download { size_label: &'static str },
}

/// A single archived artifact, unique by `id` within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub name: &'static str,
    pub year: u16,
    pub link: ItemLink,
}

impl Item {
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self.link {
            ItemLink::Url(_) => ItemKind::Link,
            ItemLink::Download { .. } => ItemKind::Download,
        }
    }
}

/// A search result row. `relevance` is a 0–100 match score and is only
/// meaningful in search-result context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub name: &'static str,
    pub category_id: &'static str,
    pub year: u16,
    pub kind: ItemKind,
    pub relevance: u8,
}

impl SearchHit {
    pub(crate) fn new(
        name: &'static str,
        category_id: &'static str,
        year: u16,
        kind: ItemKind,
        relevance: u8,
    ) -> Self {
        debug_assert!(relevance <= 100);
        Self {
            name,
            category_id,
            year,
            kind,
            relevance,
        }
    }
}

/// Marker for timeline entries: milestones render emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Milestone,
    Event,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_kind_follows_the_link_payload() {
        let link = Item {
            id: 1,
            name: "JohnDoe_Homepage",
            year: 1999,
            link: ItemLink::Url("https://example.org"),
        };
        let download = Item {
            id: 2,
            name: "StickFight_Classic.swf",
            year: 2004,
            link: ItemLink::Download { size_label: "2.4 MB" },
        };

        assert_eq!(link.kind(), ItemKind::Link);
        assert_eq!(download.kind(), ItemKind::Download);
    }
}
