// SPDX-License-Identifier: MPL-2.0
//! The mock catalog backing every browsing surface in Archivio.
//!
//! The catalog is a hard-coded, read-only dataset standing in for a real
//! archival backend: a flat list of categories, each owning an ordered list
//! of items, plus the decade/event tables driving the timeline screen.
//!
//! Three pieces of logic live on top of the data:
//!
//! - [`browser::Browser`]: the two-level category-grid ↔ item-list drill-down
//! - [`search`]: the substring-match query with its fixed fallback set and
//!   last-request-wins state machine
//! - [`timeline::TimelineState`]: decade/year selection over static events
//!
//! Nothing in here performs I/O; activating an item resolves to a tagged
//! [`browser::ItemAction`] that the application layer hands to the launcher
//! or the notification manager.

pub mod browser;
pub mod data;
pub mod search;
pub mod timeline;
pub mod types;

pub use browser::{Browser, ItemAction};
pub use search::{SearchState, SearchTicket, FALLBACK_RESULT_COUNT, SEARCH_LATENCY};
pub use types::{AccentToken, Category, EventKind, Item, ItemKind, ItemLink, SearchHit};
