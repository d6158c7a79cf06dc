mod common;

use boxkit_model::{Folder, Item, Permission, PermissionSet, RawPermissions, TypedEntity};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Value, json};

fn folder_with(permissions: Value) -> Folder {
    common::init_tracing();
    Folder::decode(&json!({"type": "folder", "id": "1", "permissions": permissions}))
        .unwrap()
        .into_complete()
        .unwrap()
}

// ── Derivation ───────────────────────────────────────────────────

#[test]
fn absent_permissions_are_none() {
    let folder = Folder::decode(&json!({"type": "folder", "id": "1"})).unwrap().value;
    assert_eq!(folder.raw_permissions(), None);
    assert_eq!(folder.permissions(), None);
}

#[test]
fn null_permissions_are_none() {
    let folder = folder_with(Value::Null);
    assert_eq!(folder.permissions(), None);
}

#[test]
fn empty_object_is_an_empty_set() {
    let folder = folder_with(json!({}));
    assert_eq!(folder.permissions(), Some(&PermissionSet::empty()));
}

#[test]
fn all_false_is_an_empty_set_not_none() {
    let folder = folder_with(json!({"can_download": false, "can_upload": false}));
    let granted = folder.permissions().unwrap();
    assert!(granted.is_empty());
}

#[test]
fn only_boolean_true_grants() {
    let folder = folder_with(json!({
        "can_download": true,
        "can_upload": "yes",
        "can_rename": 1,
        "can_delete": null,
        "can_share": false
    }));
    let granted: Vec<_> = folder.permissions().unwrap().iter().collect();
    assert_eq!(granted, vec![Permission::CanDownload]);
}

#[test]
fn unknown_capabilities_are_skipped() {
    let folder = folder_with(json!({"can_teleport": true, "can_comment": true}));
    let granted: Vec<_> = folder.permissions().unwrap().iter().collect();
    assert_eq!(granted, vec![Permission::CanComment]);
}

#[test]
fn capability_names_match_case_insensitively() {
    let folder = folder_with(json!({"CAN_DOWNLOAD": true}));
    assert!(folder.permissions().unwrap().contains(Permission::CanDownload));
}

#[test]
fn raw_object_is_kept_verbatim() {
    let folder = folder_with(json!({"can_teleport": true, "can_upload": false}));
    let raw = folder.raw_permissions().unwrap();
    let keys: Vec<_> = raw.keys().collect();
    assert_eq!(keys, vec!["can_teleport", "can_upload"]);
    assert_eq!(raw.get("can_teleport"), Some(&json!(true)));
}

#[test]
fn non_object_permissions_are_a_field_error() {
    let decoded = Folder::decode(&json!({"type": "folder", "permissions": [true]})).unwrap();
    assert_eq!(decoded.errors.len(), 1);
    assert_eq!(decoded.errors[0].path, "permissions");
    assert_eq!(decoded.value.permissions(), None);
}

#[test]
fn derive_from_raw_store() {
    let raw: RawPermissions = [
        ("can_preview", json!(true)),
        ("can_share", json!(true)),
        ("can_delete", json!(false)),
    ]
    .into_iter()
    .collect();
    let expected: PermissionSet = [Permission::CanPreview, Permission::CanShare]
        .into_iter()
        .collect();
    assert_eq!(PermissionSet::derive(&raw), expected);
}

// ── Caching ──────────────────────────────────────────────────────

#[test]
fn repeated_reads_return_the_same_set() {
    let folder = folder_with(json!({"can_upload": true}));
    let first = folder.permissions().unwrap();
    let second = folder.permissions().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn concurrent_reads_agree() {
    let folder = std::sync::Arc::new(folder_with(json!({"can_upload": true, "can_share": true})));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let folder = folder.clone();
            std::thread::spawn(move || folder.permissions().map(PermissionSet::len))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(2));
    }
}

proptest! {
    #[test]
    fn granted_set_is_exactly_the_true_flags(flags in prop::collection::vec(any::<bool>(), 9)) {
        let names = [
            "can_preview",
            "can_download",
            "can_upload",
            "can_invite_collaborator",
            "can_rename",
            "can_delete",
            "can_share",
            "can_set_share_access",
            "can_comment",
        ];
        let raw: RawPermissions = names
            .iter()
            .zip(&flags)
            .map(|(name, flag)| (*name, Value::Bool(*flag)))
            .collect();
        let derived = PermissionSet::derive(&raw);

        prop_assert_eq!(derived.len(), flags.iter().filter(|f| **f).count());
        for (name, flag) in names.iter().zip(&flags) {
            let permission: Permission = name.parse().unwrap();
            prop_assert_eq!(derived.contains(permission), *flag);
        }
    }
}
