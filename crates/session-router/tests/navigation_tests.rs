//! Integration tests for history-based navigation

use pretty_assertions::assert_eq;
use session_router::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

fn navigator() -> Navigator {
    Navigator::new(Arc::new(RouteTable::app()), MemoryHistory::new())
}

#[test]
fn test_initial_location_resolved() {
    let history = MemoryHistory::new().starting_at("/abc123");
    let nav = Navigator::new(Arc::new(RouteTable::app()), history);

    assert_eq!(nav.current().name(), Some("session"));
    assert_eq!(nav.current().param("sessionCode"), Some("abc123"));
    assert_eq!(nav.history().len(), 1);
}

#[test]
fn test_push_named_session() {
    let mut nav = navigator();

    let route = nav.push(NavigationTarget::session("xyz")).unwrap();
    assert_eq!(route.full_path(), "/xyz");
    assert_eq!(route.view(), Some(View::Session));

    assert_eq!(nav.history().current_url(), "/xyz");
    assert_eq!(nav.history().len(), 2);
}

#[test]
fn test_push_named_with_explicit_params() {
    let mut nav = navigator();
    let target = NavigationTarget::named("session").with_param("sessionCode", "xyz");

    nav.push(target).unwrap();
    assert_eq!(nav.current().full_path(), "/xyz");
}

#[test]
fn test_push_unknown_name() {
    let mut nav = navigator();
    let err = nav.push(NavigationTarget::named("lobby")).unwrap_err();
    assert_eq!(err, NavigationError::UnknownRoute("lobby".to_string()));
}

#[test]
fn test_push_path_keeps_query_and_hash() {
    let mut nav = navigator();
    nav.push("/abc123/?name=Ada#chat").unwrap();

    let current = nav.current();
    assert_eq!(current.full_path(), "/abc123?name=Ada#chat");
    assert_eq!(current.param("sessionCode"), Some("abc123"));
    assert_eq!(current.location.query_value("name"), Some("Ada".to_string()));
    assert_eq!(nav.history().current_url(), "/abc123?name=Ada#chat");
}

#[test]
fn test_unmatched_is_committed_without_view() {
    let mut nav = navigator();

    let route = nav.push("/abc/def").unwrap();
    assert!(!route.is_matched());
    assert_eq!(route.view(), None);
    assert_eq!(
        route.resolution,
        Resolution::Unmatched {
            path: "/abc/def".to_string()
        }
    );

    assert_eq!(nav.history().current_url(), "/abc/def");
    assert!(nav.back());
    assert_eq!(nav.current().name(), Some("home"));
}

#[test]
fn test_duplicate_navigation_rejected() {
    let mut nav = navigator();
    nav.push("/xyz").unwrap();

    let err = nav.push(NavigationTarget::session("xyz")).unwrap_err();
    assert_eq!(err, NavigationError::Duplicated("/xyz".to_string()));

    let err = nav.replace("/xyz/").unwrap_err();
    assert_eq!(err, NavigationError::Duplicated("/xyz".to_string()));
    assert_eq!(nav.history().len(), 2);

    // A different query is a different location
    nav.push("/xyz?muted=1").unwrap();
    assert_eq!(nav.history().len(), 3);
}

#[test]
fn test_path_and_named_targets_share_encoding() {
    let mut nav = navigator();

    nav.push("/café").unwrap();
    assert_eq!(nav.history().current_url(), "/caf%C3%A9");
    assert_eq!(nav.current().param("sessionCode"), Some("café"));

    let err = nav.push(NavigationTarget::session("café")).unwrap_err();
    assert_eq!(err, NavigationError::Duplicated("/caf%C3%A9".to_string()));
    assert_eq!(nav.history().len(), 2);

    nav.push("/a b").unwrap();
    assert_eq!(nav.history().current_url(), "/a%20b");
    assert_eq!(nav.current().param("sessionCode"), Some("a b"));

    let err = nav.push(NavigationTarget::session("a b")).unwrap_err();
    assert_eq!(err, NavigationError::Duplicated("/a%20b".to_string()));
    assert_eq!(nav.history().len(), 3);
    assert_eq!(nav.history().index(), 2);
}

#[test]
fn test_replace_overwrites_entry() {
    let mut nav = navigator();
    nav.push("/first").unwrap();
    nav.replace("/second").unwrap();

    assert_eq!(nav.history().len(), 2);
    assert_eq!(nav.current().param("sessionCode"), Some("second"));
    assert!(nav.history().state().replaced);

    assert!(nav.back());
    assert_eq!(nav.current().name(), Some("home"));
    assert!(nav.forward());
    assert_eq!(nav.current().param("sessionCode"), Some("second"));
}

#[test]
fn test_back_forward_and_go() {
    let mut nav = navigator();
    nav.push("/a").unwrap();
    nav.push("/b").unwrap();
    nav.push("/c").unwrap();

    assert!(nav.go(-2));
    assert_eq!(nav.current().param("sessionCode"), Some("a"));

    assert!(nav.forward());
    assert_eq!(nav.current().param("sessionCode"), Some("b"));

    assert!(!nav.go(5));
    assert_eq!(nav.current().param("sessionCode"), Some("b"));

    assert!(nav.go(-2));
    assert_eq!(nav.current().name(), Some("home"));
    assert!(!nav.back());
}

#[test]
fn test_push_after_back_truncates() {
    let mut nav = navigator();
    nav.push("/a").unwrap();
    nav.push("/b").unwrap();
    nav.back();

    nav.push("/c").unwrap();
    assert!(!nav.forward());

    let urls: Vec<&str> = nav
        .history()
        .entries()
        .iter()
        .map(|e| e.url.as_str())
        .collect();
    assert_eq!(urls, vec!["/", "/a", "/c"]);
}

#[test]
fn test_base_path() {
    let history = MemoryHistory::with_base("/app").starting_at("/abc123");
    let mut nav = Navigator::new(Arc::new(RouteTable::app()), history);

    assert_eq!(nav.current().param("sessionCode"), Some("abc123"));
    assert_eq!(nav.history().current_url(), "/app/abc123");

    nav.push(NavigationTarget::named("home")).unwrap();
    assert_eq!(nav.current().name(), Some("home"));
    assert_eq!(nav.history().current_url(), "/app/");
}

#[test]
fn test_after_each_hooks() {
    let mut nav = navigator();
    let seen: Rc<RefCell<Vec<(String, String, NavigationType)>>> = Rc::default();

    let log = Rc::clone(&seen);
    nav.after_each(move |to, from, nav_type| {
        log.borrow_mut()
            .push((to.full_path(), from.full_path(), nav_type));
    });

    nav.push("/a").unwrap();
    nav.replace("/b").unwrap();
    nav.back();
    let _ = nav.push("/");

    assert_eq!(
        *seen.borrow(),
        vec![
            ("/a".to_string(), "/".to_string(), NavigationType::Push),
            ("/b".to_string(), "/a".to_string(), NavigationType::Replace),
            ("/".to_string(), "/b".to_string(), NavigationType::Pop),
        ]
    );
}

#[test]
fn test_shared_table() {
    let table = Arc::new(RouteTable::app());
    let first = Navigator::new(Arc::clone(&table), MemoryHistory::new());
    let second = Navigator::new(Arc::clone(&table), MemoryHistory::new().starting_at("/xyz"));

    assert_eq!(first.current().name(), Some("home"));
    assert_eq!(second.current().name(), Some("session"));
    assert_eq!(Arc::strong_count(&table), 3);
}
