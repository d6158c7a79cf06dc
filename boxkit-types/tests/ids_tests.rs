use boxkit_types::{EntityId, Error};
use std::collections::HashSet;
use std::str::FromStr;

// ── EntityId ──────────────────────────────────────────────────────

#[test]
fn entity_id_display_and_parse() {
    let id = EntityId::parse("11446498").unwrap();
    assert_eq!(id.to_string(), "11446498");
    assert_eq!(id.as_str(), "11446498");
}

#[test]
fn entity_id_from_str() {
    let parsed: EntityId = EntityId::from_str("0").unwrap();
    assert_eq!(parsed.as_str(), "0");
}

#[test]
fn entity_id_parse_empty_rejected() {
    assert!(matches!(EntityId::parse(""), Err(Error::InvalidId(_))));
}

#[test]
fn entity_id_parse_whitespace_rejected() {
    assert!(EntityId::from_str("   ").is_err());
}

#[test]
fn entity_id_keeps_non_numeric_text() {
    let id = EntityId::parse("f_abc-123").unwrap();
    assert_eq!(id.into_string(), "f_abc-123");
}

#[test]
fn entity_id_hash_and_eq() {
    let id = EntityId::parse("42").unwrap();
    let mut set = HashSet::new();
    set.insert(id.clone());
    set.insert(id); // duplicate
    assert_eq!(set.len(), 1);
}

#[test]
fn entity_id_ordering_is_lexical() {
    let a = EntityId::parse("100").unwrap();
    let b = EntityId::parse("99").unwrap();
    assert!(a < b);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn entity_id_serializes_as_plain_string() {
    let id = EntityId::parse("123").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"123\"");
    let back: EntityId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
