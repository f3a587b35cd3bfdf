// SPDX-License-Identifier: MPL-2.0
//! End-to-end walkthroughs of the browsing and search flows against the
//! public catalog API.

use archivio::catalog::{
    browser::{self, ItemAction},
    search::run_query,
    Browser, ItemKind, SearchState, FALLBACK_RESULT_COUNT,
};
use archivio::error::CatalogError;
use archivio::launcher::{Launcher, RecordingLauncher};

#[test]
fn browse_geocities_and_open_the_first_homepage() {
    let mut catalog = Browser::new();

    let items = catalog.select("geocities").expect("geocities exists");
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].name, "JohnDoe_Homepage");
    assert_eq!(items[0].kind(), ItemKind::Link);

    // Activating the item hands its exact URL to the launcher.
    let launcher = RecordingLauncher::new();
    match browser::activate(&items[0]) {
        ItemAction::OpenUrl(url) => launcher.open_url(url),
        other => panic!("expected a link activation, got {other:?}"),
    }
    assert_eq!(
        launcher.opened(),
        vec!["https://web.archive.org/web/19990125/http://www.geocities.com/johndoe"]
    );
}

#[test]
fn unknown_categories_surface_not_found_without_breaking_state() {
    let mut catalog = Browser::new();
    catalog.select("myspace").expect("myspace exists");

    let err = catalog.select("usenet").unwrap_err();
    assert_eq!(err, CatalogError::UnknownCategory("usenet".to_string()));

    // The failed lookup left the previous drill-down alone.
    assert_eq!(catalog.selected().map(|c| c.id), Some("myspace"));
    assert_eq!(catalog.items().len(), 2);
}

#[test]
fn flash_query_finds_every_flash_item_with_valid_scores() {
    let hits = run_query("flash");
    assert_eq!(hits.len(), 4);
    for hit in &hits {
        assert_eq!(hit.category_id, "flash");
        assert!(hit.relevance <= 100);
    }
}

#[test]
fn hopeless_query_returns_the_fixed_fallback_set() {
    let hits = run_query("zzzznomatch");
    assert_eq!(hits.len(), FALLBACK_RESULT_COUNT);
    // Fallback rows are the head of the canned default list, never empty.
    assert_eq!(hits[0].name, "SpaceJam_Original");
}

#[tokio::test]
async fn overlapping_searches_commit_only_the_latest() {
    // Emulates the application task: each accepted query sleeps, then tries
    // to commit its generation. The first query gets a longer latency, so
    // its response arrives after the second one's and must be discarded.
    let mut state = SearchState::new();

    state.set_query("flash".to_string());
    let slow = state.begin().expect("first query accepted");

    state.set_query("geocities".to_string());
    let fast = state.begin().expect("second query accepted");

    let slow_task = async {
        tokio::time::sleep(std::time::Duration::from_millis(30)).await;
        (slow.generation, run_query(&slow.query))
    };
    let fast_task = async {
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        (fast.generation, run_query(&fast.query))
    };

    let ((slow_generation, slow_hits), (fast_generation, fast_hits)) =
        tokio::join!(slow_task, fast_task);

    // Results commit in arrival order: fast first, stale one rejected.
    assert!(state.commit(fast_generation, fast_hits));
    assert!(!state.commit(slow_generation, slow_hits));

    assert!(!state.is_searching());
    assert!(state.has_searched());
    assert!(state
        .results()
        .iter()
        .all(|hit| hit.category_id == "geocities"));
}

#[tokio::test]
async fn search_state_machine_walkthrough() {
    let mut state = SearchState::new();

    // Blank input never transitions into "has searched".
    state.set_query("   ".to_string());
    assert!(state.begin().is_none());
    assert!(!state.has_searched());

    // A real query round-trips.
    state.set_query("myspace".to_string());
    let ticket = state.begin().expect("query accepted");
    assert!(state.is_searching());

    tokio::time::sleep(std::time::Duration::from_millis(1)).await;
    let hits = run_query(&ticket.query);
    assert!(state.commit(ticket.generation, hits));
    assert!(!state.is_searching());
    assert_eq!(state.results().len(), 2);
}
