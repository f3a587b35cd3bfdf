// SPDX-License-Identifier: MPL-2.0
//! The hard-coded catalog dataset.
//!
//! This is the entire "backend" of Archivio: six categories, a sample of
//! registered items for three of them, the canned default search results,
//! and the decade/event tables for the timeline. Insertion order is display
//! order everywhere.

use super::types::{AccentToken, Category, EventKind, Item, ItemKind, ItemLink, SearchHit};

// ============================================================================
// Categories
// ============================================================================

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "geocities",
        name: "GeoCities",
        icon: "🌐",
        color: AccentToken::Cyan,
        description: "Personal homepages from the 90s",
        item_count: 847,
    },
    Category {
        id: "flash",
        name: "Flash Games",
        icon: "🎮",
        color: AccentToken::Magenta,
        description: "Classic Flash games & animations",
        item_count: 312,
    },
    Category {
        id: "myspace",
        name: "MySpace",
        icon: "👤",
        color: AccentToken::Yellow,
        description: "Social profiles & music pages",
        item_count: 523,
    },
    Category {
        id: "forums",
        name: "Forums & BBS",
        icon: "💬",
        color: AccentToken::Pink,
        description: "Discussion boards & communities",
        item_count: 189,
    },
    Category {
        id: "early-blogs",
        name: "Early Blogs",
        icon: "📝",
        color: AccentToken::Orange,
        description: "LiveJournal, Blogspot originals",
        item_count: 276,
    },
    Category {
        id: "misc",
        name: "Miscellaneous",
        icon: "📦",
        color: AccentToken::Cyan,
        description: "Uncategorized web artifacts",
        item_count: 134,
    },
];

// ============================================================================
// Registered items per category
// ============================================================================
// Only a sample of categories have registered items; the rest legitimately
// browse as empty.

const GEOCITIES_ITEMS: &[Item] = &[
    Item {
        id: 1,
        name: "JohnDoe_Homepage",
        year: 1999,
        link: ItemLink::Url(
            "https://web.archive.org/web/19990125/http://www.geocities.com/johndoe",
        ),
    },
    Item {
        id: 2,
        name: "CoolSite2000",
        year: 2000,
        link: ItemLink::Url(
            "https://web.archive.org/web/20000301/http://www.geocities.com/coolsite2000",
        ),
    },
    Item {
        id: 3,
        name: "MyPetPage",
        year: 1998,
        link: ItemLink::Url(
            "https://web.archive.org/web/19980215/http://www.geocities.com/mypetpage",
        ),
    },
    Item {
        id: 4,
        name: "Anime_Fan_99",
        year: 1999,
        link: ItemLink::Url(
            "https://web.archive.org/web/19990801/http://www.geocities.com/animefan99",
        ),
    },
];

const FLASH_ITEMS: &[Item] = &[
    Item {
        id: 1,
        name: "StickFight_Classic.swf",
        year: 2004,
        link: ItemLink::Download { size_label: "2.4 MB" },
    },
    Item {
        id: 2,
        name: "DressUp_Game.swf",
        year: 2003,
        link: ItemLink::Download { size_label: "1.8 MB" },
    },
    Item {
        id: 3,
        name: "AlienHominid_Demo.swf",
        year: 2002,
        link: ItemLink::Download { size_label: "4.2 MB" },
    },
    Item {
        id: 4,
        name: "BadgerBadger.swf",
        year: 2003,
        link: ItemLink::Download { size_label: "0.5 MB" },
    },
];

const MYSPACE_ITEMS: &[Item] = &[
    Item {
        id: 1,
        name: "Tom_Official",
        year: 2006,
        link: ItemLink::Url("https://web.archive.org/web/20060101/http://myspace.com/tom"),
    },
    Item {
        id: 2,
        name: "IndieRockBand_2005",
        year: 2005,
        link: ItemLink::Url(
            "https://web.archive.org/web/20050601/http://myspace.com/indierockband",
        ),
    },
];

/// Returns the registered items for a category id, or `None` when the id is
/// unknown. A known category without registered items returns an empty slice.
#[must_use]
pub fn items_for(category_id: &str) -> Option<&'static [Item]> {
    if !CATEGORIES.iter().any(|c| c.id == category_id) {
        return None;
    }
    Some(match category_id {
        "geocities" => GEOCITIES_ITEMS,
        "flash" => FLASH_ITEMS,
        "myspace" => MYSPACE_ITEMS,
        _ => &[],
    })
}

// ============================================================================
// Default search results
// ============================================================================
// The canned "greatest hits" list shown before a query narrows anything down,
// and the source of the fixed-size fallback when a query matches nothing.

pub const DEFAULT_RESULTS: &[SearchHit] = &[
    SearchHit {
        name: "SpaceJam_Original",
        category_id: "geocities",
        year: 1996,
        kind: ItemKind::Link,
        relevance: 95,
    },
    SearchHit {
        name: "DOOM_Flash_Clone",
        category_id: "flash",
        year: 2003,
        kind: ItemKind::Download,
        relevance: 88,
    },
    SearchHit {
        name: "MySpace_Tom_Profile",
        category_id: "myspace",
        year: 2005,
        kind: ItemKind::Link,
        relevance: 82,
    },
    SearchHit {
        name: "Hampster_Dance_OG",
        category_id: "misc",
        year: 1999,
        kind: ItemKind::Link,
        relevance: 79,
    },
    SearchHit {
        name: "Neopets_Fanpage",
        category_id: "geocities",
        year: 2001,
        kind: ItemKind::Link,
        relevance: 71,
    },
];

// ============================================================================
// Timeline
// ============================================================================

/// A decade on the timeline strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decade {
    pub id: &'static str,
    pub years: &'static [u16],
    pub color: AccentToken,
    pub icon: &'static str,
    pub highlight: &'static str,
}

pub const DECADES: &[Decade] = &[
    Decade {
        id: "1990s",
        years: &[1995, 1996, 1997, 1998, 1999],
        color: AccentToken::Yellow,
        icon: "📟",
        highlight: "The birth of the web",
    },
    Decade {
        id: "2000s",
        years: &[2000, 2001, 2002, 2003, 2004, 2005, 2006, 2007, 2008, 2009],
        color: AccentToken::Cyan,
        icon: "💿",
        highlight: "Web 2.0 revolution",
    },
    Decade {
        id: "2010s",
        years: &[2010, 2011, 2012, 2013, 2014],
        color: AccentToken::Magenta,
        icon: "📱",
        highlight: "Mobile takes over",
    },
];

/// A notable event attached to a timeline year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearEvent {
    pub name: &'static str,
    pub kind: EventKind,
}

/// Returns the notable events archived for a year. Years without entries
/// return an empty slice.
#[must_use]
pub fn events_for(year: u16) -> &'static [YearEvent] {
    match year {
        1996 => &[
            YearEvent {
                name: "GeoCities launches",
                kind: EventKind::Milestone,
            },
            YearEvent {
                name: "First web pages archived",
                kind: EventKind::Event,
            },
        ],
        1999 => &[
            YearEvent {
                name: "Y2K preparations",
                kind: EventKind::Event,
            },
            YearEvent {
                name: "Napster changes music",
                kind: EventKind::Milestone,
            },
        ],
        2003 => &[
            YearEvent {
                name: "MySpace goes live",
                kind: EventKind::Milestone,
            },
            YearEvent {
                name: "Flash games peak",
                kind: EventKind::Event,
            },
        ],
        2005 => &[
            YearEvent {
                name: "YouTube launches",
                kind: EventKind::Milestone,
            },
            YearEvent {
                name: "Web 2.0 coined",
                kind: EventKind::Event,
            },
        ],
        2006 => &[YearEvent {
            name: "Twitter begins",
            kind: EventKind::Milestone,
        }],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_ids_are_unique() {
        let ids: HashSet<_> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATEGORIES.len());
    }

    #[test]
    fn item_ids_are_unique_within_each_category() {
        for category in CATEGORIES {
            let items = items_for(category.id).expect("known category");
            let ids: HashSet<_> = items.iter().map(|i| i.id).collect();
            assert_eq!(ids.len(), items.len(), "duplicate item id in {}", category.id);
        }
    }

    #[test]
    fn items_for_unknown_category_is_none() {
        assert!(items_for("winamp-skins").is_none());
    }

    #[test]
    fn known_category_without_registrations_is_empty_not_missing() {
        let items = items_for("forums").expect("forums is a known category");
        assert!(items.is_empty());
    }

    #[test]
    fn geocities_sample_matches_the_archived_snapshot() {
        let items = items_for("geocities").expect("known category");
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "JohnDoe_Homepage");
        assert_eq!(items[0].kind(), ItemKind::Link);
    }

    #[test]
    fn default_result_scores_are_in_range_and_descending() {
        let mut previous = 100;
        for hit in DEFAULT_RESULTS {
            assert!(hit.relevance <= 100);
            assert!(hit.relevance <= previous);
            previous = hit.relevance;
        }
    }

    #[test]
    fn decade_years_do_not_overlap() {
        let all: Vec<u16> = DECADES.iter().flat_map(|d| d.years.iter().copied()).collect();
        let unique: HashSet<u16> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn every_event_year_exists_on_the_timeline() {
        for year in [1996, 1999, 2003, 2005, 2006] {
            assert!(
                DECADES.iter().any(|d| d.years.contains(&year)),
                "year {year} has events but no timeline slot"
            );
            assert!(!events_for(year).is_empty());
        }
    }
}
