use boxkit_model::PropertyStore;
use pretty_assertions::assert_eq;

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn keys_iterate_in_insertion_order() {
    let mut store = PropertyStore::new();
    store.put("zeta", 1);
    store.put("alpha", 2);
    store.put("mid", 3);
    assert_eq!(store.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn overwrite_keeps_original_position() {
    let mut store = PropertyStore::new();
    store.put("a", 1);
    store.put("b", 2);
    assert_eq!(store.put("a", 10), Some(1));

    let pairs: Vec<_> = store.iter().map(|(k, v)| (k, *v)).collect();
    assert_eq!(pairs, vec![("a", 10), ("b", 2)]);
    assert_eq!(store.len(), 2);
}

#[test]
fn remove_shifts_later_keys() {
    let mut store: PropertyStore<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    assert_eq!(store.remove("b"), Some(2));
    assert_eq!(store.remove("b"), None);
    assert_eq!(store.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    assert_eq!(store.get("c"), Some(&3));

    store.put("c", 30);
    store.put("d", 4);
    let pairs: Vec<_> = store.iter().map(|(k, v)| (k, *v)).collect();
    assert_eq!(pairs, vec![("a", 1), ("c", 30), ("d", 4)]);
}

// ── Lookup ───────────────────────────────────────────────────────

#[test]
fn get_and_contains() {
    let store: PropertyStore<&str> = [("name", "Docs"), ("etag", "3")].into_iter().collect();
    assert_eq!(store.get("name"), Some(&"Docs"));
    assert_eq!(store.get("missing"), None);
    assert!(store.contains_key("etag"));
    assert!(!store.contains_key("Etag"));
}

#[test]
fn empty_store() {
    let store: PropertyStore<i32> = PropertyStore::default();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.keys().count(), 0);
}

// ── Equality ─────────────────────────────────────────────────────

#[test]
fn equality_is_order_sensitive() {
    let ab: PropertyStore<i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let ab_again: PropertyStore<i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let ba: PropertyStore<i32> = [("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(ab, ab_again);
    assert_ne!(ab, ba);
}

#[test]
fn collecting_duplicates_keeps_last_value_at_first_position() {
    let store: PropertyStore<i32> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
    let pairs: Vec<_> = store.iter().map(|(k, v)| (k, *v)).collect();
    assert_eq!(pairs, vec![("a", 3), ("b", 2)]);
}
