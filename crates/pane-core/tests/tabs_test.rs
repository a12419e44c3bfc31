mod common;

use common::{browser, tab_id, START};
use pane_core::{CloseOutcome, CoreError, NavigationIntent, RegistryState, TabError};

#[test]
fn test_window_opens_on_start_page() {
    let browser = browser();

    assert_eq!(browser.registry().len(), 1);
    assert_eq!(browser.active_tab().unwrap().current_url, START);
    assert_eq!(browser.chrome().strip, vec!["Start Page"]);
    assert_eq!(browser.chrome().current, Some(0));
    assert_eq!(browser.chrome().address_bar, START);
}

#[test]
fn test_new_tab_becomes_active() {
    let mut browser = browser();
    let id = browser.new_tab().unwrap();

    assert_eq!(browser.registry().active_index(), Some(1));
    assert_eq!(browser.active_tab().unwrap().id(), id);
    assert_eq!(browser.active_tab().unwrap().current_url, START);
    assert_eq!(browser.chrome().strip, vec!["Start Page", "New Tab"]);
    assert_eq!(browser.chrome().current, Some(1));
}

#[test]
fn test_close_background_tab_keeps_active_tab() {
    let mut browser = browser();
    let a = browser.create_tab("https://a.test", "New Tab").unwrap();
    let b = browser.create_tab("https://b.test", "New Tab").unwrap();

    let outcome = browser.close_tab(a).unwrap();
    assert_eq!(outcome, CloseOutcome::Closed { index: 1, active: 1 });

    assert_eq!(browser.active_tab().unwrap().id(), b);
    assert_eq!(browser.chrome().strip, vec!["Start Page", "New Tab"]);
    assert_eq!(browser.chrome().current, Some(1));
    assert_eq!(browser.chrome().address_bar, "https://b.test");
    assert_eq!(
        browser.registry().engine().calls_for(a),
        vec!["load https://a.test", "close"]
    );
}

#[test]
fn test_close_active_tab_moves_to_neighbour() {
    let mut browser = browser();
    browser.create_tab("https://a.test", "New Tab").unwrap();
    let b = browser.create_tab("https://b.test", "New Tab").unwrap();

    browser.activate(1).unwrap();
    assert_eq!(browser.chrome().address_bar, "https://a.test");

    browser.on_tab_close_requested(1).unwrap();
    assert_eq!(browser.active_tab().unwrap().id(), b);
    assert_eq!(browser.chrome().address_bar, "https://b.test");

    // Closing the last slot while active falls back to the one before it
    let outcome = browser.on_tab_close_requested(1).unwrap();
    assert_eq!(outcome, CloseOutcome::Closed { index: 1, active: 0 });
    assert_eq!(browser.chrome().address_bar, START);
    assert_eq!(browser.chrome().strip, vec!["Start Page"]);
}

#[test]
fn test_closing_last_tab_closes_window() {
    let mut browser = browser();
    let only = tab_id(&browser, 0);

    assert_eq!(browser.close_tab(only).unwrap(), CloseOutcome::Shutdown);
    assert!(browser.chrome().window_closed);
    assert_eq!(browser.state(), RegistryState::Terminated);
    assert!(browser.registry().is_empty());
    assert_eq!(
        browser.registry().engine().calls_for(only),
        vec![format!("load {}", START), "close".to_string()]
    );

    assert!(matches!(
        browser.new_tab(),
        Err(CoreError::Tab(TabError::Terminated))
    ));
    assert!(browser.on_current_index_changed(0).is_ok());
    assert!(!browser.dispatch(NavigationIntent::Reload));
    assert!(browser.add_bookmark().is_none());
    assert_eq!(browser.show_bookmarks().unwrap(), None);
}

#[test]
fn test_activate_out_of_range() {
    let mut browser = browser();

    assert!(matches!(
        browser.activate(5),
        Err(CoreError::Tab(TabError::IndexOutOfRange { index: 5, len: 1 }))
    ));
    assert_eq!(browser.registry().active_index(), Some(0));
}

#[test]
fn test_placeholder_clears_bar_and_ignores_intents() {
    let mut browser = browser();
    let start = tab_id(&browser, 0);
    browser.open_placeholder("Settings").unwrap();

    assert_eq!(browser.chrome().strip, vec!["Start Page", "Settings"]);
    assert_eq!(browser.chrome().address_bar, "");
    assert!(browser.active_tab().is_none());

    assert!(!browser.dispatch(NavigationIntent::Reload));
    assert!(!browser.dispatch(NavigationIntent::ZoomIn));
    assert_eq!(
        browser.registry().engine().calls_for(start),
        vec![format!("load {}", START)]
    );

    browser.on_current_index_changed(0).unwrap();
    assert_eq!(browser.chrome().address_bar, START);

    browser.on_current_index_changed(1).unwrap();
    assert_eq!(browser.chrome().address_bar, "");
}

#[test]
fn test_title_change_relabels_strip() {
    let mut browser = browser();
    let start = tab_id(&browser, 0);

    browser.on_title_changed(start, "Google");
    assert_eq!(browser.chrome().strip, vec!["Google"]);
    assert_eq!(browser.tabs()[0].title, "Google");
    assert_eq!(browser.tabs()[0].label, "Google");
}

#[test]
fn test_url_change_resets_strip_label() {
    let mut browser = browser();
    let start = tab_id(&browser, 0);
    let other = browser.new_tab().unwrap();

    browser.on_title_changed(start, "Google");
    browser.on_url_changed(start, "https://other.test/");

    // Background tab: the bar stays put but the strip still follows
    assert_eq!(browser.chrome().strip, vec!["https://other.test/", "New Tab"]);
    assert_eq!(browser.tabs()[0].label, "https://other.test/");
    assert_eq!(browser.tabs()[0].title, "https://other.test/");

    browser.on_url_changed(other, "https://next.test/");
    browser.on_title_changed(other, "Next");
    assert_eq!(browser.chrome().strip, vec!["https://other.test/", "Next"]);
    assert_eq!(browser.tabs()[1].label, "Next");
    assert_eq!(browser.chrome().address_bar, "https://next.test/");
}

#[test]
fn test_events_from_closed_tab_are_dropped() {
    let mut browser = browser();
    let a = browser.create_tab("https://a.test", "New Tab").unwrap();
    browser.close_tab(a).unwrap();

    assert!(!browser.on_url_changed(a, "https://a.test/late"));
    browser.on_title_changed(a, "Late");

    assert_eq!(browser.session().history_len(), 0);
    assert_eq!(browser.chrome().strip, vec!["Start Page"]);
    assert_eq!(browser.chrome().address_bar, START);
}
