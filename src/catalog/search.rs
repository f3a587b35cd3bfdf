// SPDX-License-Identifier: MPL-2.0
//! Mock search over the flattened catalog.
//!
//! Searching is split into a pure query function and a small state machine.
//! [`run_query`] does the matching; [`SearchState`] tracks the in-flight
//! request and enforces last-request-wins: every accepted query gets a
//! monotonically increasing generation, and only results carrying the
//! newest generation are committed. A superseded response is dropped on the
//! floor, so two overlapping searches can never interleave their results.
//!
//! The simulated network latency is the caller's concern — the application
//! layer sleeps for [`SEARCH_LATENCY`] before running the query, which is
//! also exactly where a real backend call would slot in.

use super::data::{self, CATEGORIES, DEFAULT_RESULTS};
use super::types::SearchHit;
use std::time::Duration;

/// Simulated round-trip time for a search request.
pub const SEARCH_LATENCY: Duration = Duration::from_millis(800);

/// Number of default results returned when a query matches nothing.
///
/// The UI deliberately never shows an empty result list; a no-match query
/// falls back to this many entries of [`data::DEFAULT_RESULTS`].
pub const FALLBACK_RESULT_COUNT: usize = 3;

/// Relevance assigned to a live hit whose name contains the query.
const NAME_MATCH_RELEVANCE: u8 = 90;
/// Relevance assigned to a live hit matched only through its category id.
const CATEGORY_MATCH_RELEVANCE: u8 = 75;

/// Runs a query against every registered item in the catalog.
///
/// Matching is a case-insensitive substring test against the item name or
/// its owning category id; hits come back in catalog order. An empty match
/// set yields the fixed-size fallback prefix instead of an empty list.
#[must_use]
pub fn run_query(query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();

    let mut hits = Vec::new();
    for category in CATEGORIES {
        let category_matches = category.id.to_lowercase().contains(&needle);
        for item in data::items_for(category.id).unwrap_or(&[]) {
            let name_matches = item.name.to_lowercase().contains(&needle);
            if name_matches || category_matches {
                let relevance = if name_matches {
                    NAME_MATCH_RELEVANCE
                } else {
                    CATEGORY_MATCH_RELEVANCE
                };
                hits.push(SearchHit::new(
                    item.name,
                    category.id,
                    item.year,
                    item.kind(),
                    relevance,
                ));
            }
        }
    }

    if hits.is_empty() {
        hits.extend_from_slice(&DEFAULT_RESULTS[..FALLBACK_RESULT_COUNT]);
    }
    hits
}

/// Token identifying one accepted search request.
///
/// The application layer carries the ticket through its async task and hands
/// the generation back on completion; [`SearchState::commit`] uses it to
/// reject superseded responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

/// Per-screen search state.
#[derive(Debug, Default)]
pub struct SearchState {
    query: String,
    results: Vec<SearchHit>,
    is_searching: bool,
    has_searched: bool,
    generation: u64,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the draft query text (keystrokes); no other transition.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Accepts the current query for searching.
    ///
    /// A blank query is a no-op: no ticket, no state transition, and
    /// `has_searched` stays untouched. Otherwise the previous in-flight
    /// request (if any) is superseded and a new ticket is issued.
    pub fn begin(&mut self) -> Option<SearchTicket> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.generation += 1;
        self.is_searching = true;
        self.has_searched = true;
        Some(SearchTicket {
            generation: self.generation,
            query: trimmed.to_string(),
        })
    }

    /// Commits results for a finished request.
    ///
    /// Returns `false` and leaves all state untouched when the generation is
    /// not the newest one — the response raced with a later search and lost.
    pub fn commit(&mut self, generation: u64, hits: Vec<SearchHit>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.results = hits;
        self.is_searching = false;
        true
    }

    #[must_use]
    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    #[must_use]
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::ItemKind;

    #[test]
    fn query_matches_item_names_case_insensitively() {
        let hits = run_query("JOHNDOE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "JohnDoe_Homepage");
        assert_eq!(hits[0].category_id, "geocities");
        assert_eq!(hits[0].relevance, NAME_MATCH_RELEVANCE);
    }

    #[test]
    fn query_matching_a_category_id_returns_all_its_items() {
        let hits = run_query("flash");
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|h| h.category_id == "flash"));
        assert!(hits.iter().all(|h| h.kind == ItemKind::Download));
        assert!(hits.iter().all(|h| h.relevance <= 100));
    }

    #[test]
    fn hits_come_back_in_catalog_order() {
        // "myspace" matches the category; the two items keep their order.
        let hits = run_query("myspace");
        let names: Vec<_> = hits.iter().map(|h| h.name).collect();
        assert_eq!(names, ["Tom_Official", "IndieRockBand_2005"]);
    }

    #[test]
    fn no_match_falls_back_to_the_fixed_default_prefix() {
        let hits = run_query("zzzznomatch");
        assert_eq!(hits.len(), FALLBACK_RESULT_COUNT);
        assert_eq!(hits[0].name, "SpaceJam_Original");
        assert_eq!(hits[1].name, "DOOM_Flash_Clone");
        assert_eq!(hits[2].name, "MySpace_Tom_Profile");
    }

    #[test]
    fn blank_query_does_not_begin_a_search() {
        let mut state = SearchState::new();
        state.set_query("   ".to_string());

        assert!(state.begin().is_none());
        assert!(!state.is_searching());
        assert!(!state.has_searched());
        assert!(state.results().is_empty());
    }

    #[test]
    fn begin_trims_the_accepted_query() {
        let mut state = SearchState::new();
        state.set_query("  flash  ".to_string());

        let ticket = state.begin().expect("non-blank query");
        assert_eq!(ticket.query, "flash");
        assert!(state.is_searching());
        assert!(state.has_searched());
    }

    #[test]
    fn commit_applies_results_for_the_newest_generation() {
        let mut state = SearchState::new();
        state.set_query("flash".to_string());
        let ticket = state.begin().expect("non-blank query");

        let committed = state.commit(ticket.generation, run_query(&ticket.query));
        assert!(committed);
        assert!(!state.is_searching());
        assert_eq!(state.results().len(), 4);
    }

    #[test]
    fn a_superseded_search_cannot_clobber_the_newer_one() {
        let mut state = SearchState::new();

        state.set_query("flash".to_string());
        let first = state.begin().expect("non-blank query");

        // A second search arrives before the first resolves.
        state.set_query("geocities".to_string());
        let second = state.begin().expect("non-blank query");

        // The slow first response lands late and is discarded.
        assert!(!state.commit(first.generation, run_query(&first.query)));
        assert!(state.is_searching());
        assert!(state.results().is_empty());

        // The newest response commits.
        assert!(state.commit(second.generation, run_query(&second.query)));
        assert!(!state.is_searching());
        assert!(state.results().iter().all(|h| h.category_id == "geocities"));
    }

    #[test]
    fn commit_order_does_not_matter_only_generation_does() {
        let mut state = SearchState::new();

        state.set_query("flash".to_string());
        let first = state.begin().expect("non-blank query");
        state.set_query("myspace".to_string());
        let second = state.begin().expect("non-blank query");

        // Newest resolves first, stale one afterwards.
        assert!(state.commit(second.generation, run_query(&second.query)));
        assert!(!state.commit(first.generation, run_query(&first.query)));

        let names: Vec<_> = state.results().iter().map(|h| h.name).collect();
        assert_eq!(names, ["Tom_Official", "IndieRockBand_2005"]);
    }
}
