// Tests for LookupService
// Test cases:
// - Empty service answers NotFound for every term
// - Queries are trimmed and case-insensitive
// - Refresh replaces the snapshot wholesale and is visible to all clones
// - Concurrent readers never observe a mixture of two snapshots

use super::*;
use crate::dictionary::parse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

fn service_with(text: &str) -> LookupService {
    let service = LookupService::new();
    service.refresh(Arc::new(parse(text)));
    service
}

#[test]
fn test_empty_service_returns_not_found() {
    let service = LookupService::new();
    assert_eq!(service.query("dog"), Lookup::NotFound);
    assert_eq!(service.query(""), Lookup::NotFound);
    assert!(service.snapshot().is_empty());
}

#[test]
fn test_query_found_and_not_found() {
    let service = service_with("\"dog\",\"ドッグ\"\n\"cat\",\"キャット\"");

    assert_eq!(service.query("Dog"), Lookup::Found("ドッグ".to_string()));
    assert_eq!(service.query("bird"), Lookup::NotFound);
}

#[test]
fn test_query_is_case_insensitive_and_trimmed() {
    let service = service_with("hello,ハロー");

    let expected = Lookup::Found("ハロー".to_string());
    assert_eq!(service.query("Hello"), expected);
    assert_eq!(service.query("hello"), expected);
    assert_eq!(service.query(" HELLO "), expected);
}

#[test]
fn test_refresh_replaces_whole_snapshot() {
    let service = service_with("dog,ドッグ\ncat,キャット");
    service.refresh(Arc::new(parse("bird,バード")));

    assert_eq!(service.query("dog"), Lookup::NotFound);
    assert_eq!(service.query("bird"), Lookup::Found("バード".to_string()));
    assert_eq!(service.snapshot().len(), 1);
}

#[test]
fn test_clones_share_snapshot() {
    let service = LookupService::new();
    let reader = service.clone();

    service.refresh(Arc::new(parse("tree,ツリー")));

    assert_eq!(reader.query("TREE"), Lookup::Found("ツリー".to_string()));
}

#[test]
fn test_held_snapshot_is_unaffected_by_refresh() {
    let service = service_with("dog,ドッグ");
    let before = service.snapshot();

    service.refresh(Arc::new(Dictionary::new()));

    assert_eq!(before.get("dog"), Some("ドッグ"));
    assert!(service.snapshot().is_empty());
}

#[test]
fn test_lookup_helpers() {
    assert!(Lookup::Found("x".to_string()).is_found());
    assert!(!Lookup::NotFound.is_found());
    assert_eq!(Lookup::Found("x".to_string()).into_option(), Some("x".to_string()));
    assert_eq!(Lookup::NotFound.into_option(), None);
}

#[test]
fn test_concurrent_refresh_is_atomic() {
    // Two dictionaries over the same terms; every value carries its generation tag
    let terms: Vec<String> = (0..200).map(|i| format!("term{}", i)).collect();
    let build = |tag: &str| {
        let text: String = terms
            .iter()
            .map(|t| format!("{},{}\n", t, tag))
            .collect();
        Arc::new(parse(&text))
    };
    let first = build("ア");
    let second = build("イ");

    let service = LookupService::new();
    service.refresh(first.clone());
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let service = service.clone();
            let stop = stop.clone();
            let terms = terms.clone();
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    let snapshot = service.snapshot();
                    let tags: Vec<&str> = terms.iter().filter_map(|t| snapshot.get(t)).collect();
                    assert_eq!(tags.len(), terms.len());
                    assert!(tags.iter().all(|tag| *tag == tags[0]));
                }
            })
        })
        .collect();

    for i in 0..500 {
        let next = if i % 2 == 0 { second.clone() } else { first.clone() };
        service.refresh(next);
    }
    stop.store(true, Ordering::Relaxed);

    for reader in readers {
        reader.join().unwrap();
    }
}
