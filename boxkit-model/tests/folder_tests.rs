mod common;

use boxkit_model::{
    CollaborationRole, File, FieldValue, Folder, Item, Permission, SharedLinkAccess, SyncState,
    Timestamp, TypedEntity, UploadEmailAccess,
};
use common::{folder_stub, pictures_folder};
use pretty_assertions::assert_eq;
use serde_json::json;

fn pictures() -> Folder {
    common::init_tracing();
    Folder::decode(&pictures_folder())
        .unwrap()
        .into_complete()
        .unwrap()
}

// ── Full response ────────────────────────────────────────────────

#[test]
fn full_folder_decodes_without_errors() {
    let decoded = Folder::decode(&pictures_folder()).unwrap();
    assert!(decoded.is_complete(), "{:?}", decoded.errors);
}

#[test]
fn scalar_accessors() {
    let folder = pictures();
    assert_eq!(folder.id(), Some("11446498"));
    assert_eq!(folder.kind(), Some("folder"));
    assert_eq!(folder.name(), Some("Pictures"));
    assert_eq!(folder.sequence_id(), Some("1"));
    assert_eq!(folder.etag(), Some("1"));
    assert_eq!(folder.description(), Some("Some pictures I took"));
    assert_eq!(folder.size(), Some(629644));
    assert_eq!(folder.item_status(), Some("active"));
    assert_eq!(folder.has_collaborations(), Some(false));
    assert_eq!(folder.is_externally_owned(), Some(false));
    assert_eq!(folder.can_non_owners_invite(), None);
}

#[test]
fn timestamps_keep_their_offset() {
    let folder = pictures();
    let created = folder.created_at().unwrap();
    assert_eq!(created, Timestamp::parse("2012-12-12T10:53:43-08:00").unwrap());
    assert_eq!(created.as_datetime().offset().local_minus_utc(), -8 * 3600);
    assert_eq!(
        folder.modified_at().unwrap(),
        Timestamp::parse("2012-12-12T19:15:04Z").unwrap()
    );
    assert_eq!(folder.trashed_at(), None);
}

#[test]
fn enum_accessors() {
    let folder = pictures();
    assert_eq!(folder.sync_state(), Some(SyncState::Synced));
    assert_eq!(
        folder.allowed_invitee_roles(),
        Some(vec![CollaborationRole::Editor, CollaborationRole::Viewer])
    );
    assert_eq!(
        folder.allowed_shared_link_access_levels(),
        Some(vec![
            SharedLinkAccess::Open,
            SharedLinkAccess::Company,
            SharedLinkAccess::Collaborators,
        ])
    );
}

#[test]
fn enum_values_match_case_insensitively() {
    let folder = Folder::decode(&json!({"type": "folder", "id": "1", "sync_state": "Partially_Synced"}))
        .unwrap()
        .into_complete()
        .unwrap();
    assert_eq!(folder.sync_state(), Some(SyncState::PartiallySynced));
}

#[test]
fn nested_users() {
    let folder = pictures();
    let creator = folder.created_by().unwrap();
    assert_eq!(creator.id(), Some("17738362"));
    assert_eq!(creator.name(), Some("sean rose"));
    assert_eq!(creator.login(), Some("sean@box.com"));
    assert_eq!(folder.owned_by(), Some(creator));
}

#[test]
fn parent_is_a_folder_with_nulls_kept() {
    let folder = pictures();
    let parent = folder.parent().unwrap();
    assert_eq!(parent.id(), Some("0"));
    assert_eq!(parent.name(), Some("All Files"));
    assert_eq!(parent.sequence_id(), None);
    assert_eq!(parent.get("sequence_id"), Some(&FieldValue::Null));
}

#[test]
fn shared_link_fields() {
    let folder = pictures();
    let link = folder.shared_link().unwrap();
    assert_eq!(link.url.as_deref(), Some("https://www.box.com/s/vspke7y05sb214wjokpk"));
    assert_eq!(link.download_url, None);
    assert_eq!(link.is_password_enabled, Some(false));
    assert_eq!(link.download_count, Some(0));
    assert_eq!(link.access, Some(SharedLinkAccess::Open));

    let granted = link.permission_set().unwrap();
    assert!(granted.contains(Permission::CanDownload));
    assert!(granted.contains(Permission::CanPreview));
    assert_eq!(granted.len(), 2);
}

#[test]
fn shared_link_unknown_members_go_to_extra() {
    let folder = Folder::decode(&json!({
        "type": "folder",
        "id": "1",
        "shared_link": {"url": "https://example.com/s/x", "effective_access": "open"}
    }))
    .unwrap()
    .into_complete()
    .unwrap();
    let link = folder.shared_link().unwrap();
    assert_eq!(link.extra.get("effective_access"), Some(&json!("open")));
    assert_eq!(link.permission_set(), None);
}

#[test]
fn upload_email() {
    let folder = pictures();
    let email = folder.upload_email().unwrap();
    assert_eq!(email.access, Some(UploadEmailAccess::Open));
    assert_eq!(email.email.as_deref(), Some("upload.Picture.k13sdz1@u.box.com"));
}

// ── Ordered collections ──────────────────────────────────────────

#[test]
fn tags_keep_order_and_duplicates() {
    let folder = Folder::decode(&json!({"type": "folder", "id": "1", "tags": ["a", "a", "b"]}))
        .unwrap()
        .value;
    assert_eq!(
        folder.tags(),
        Some(&["a".to_owned(), "a".to_owned(), "b".to_owned()][..])
    );
}

#[test]
fn path_collection_is_root_first() {
    let entries: Vec<_> = (0..4)
        .map(|i| folder_stub(&i.to_string(), &format!("level {i}")))
        .collect();
    let folder = Folder::decode(&json!({
        "type": "folder",
        "id": "9",
        "path_collection": {"total_count": 4, "entries": entries}
    }))
    .unwrap()
    .into_complete()
    .unwrap();

    let path = folder.path_collection().unwrap();
    let ids: Vec<_> = path.iter().map(|f| f.id().unwrap()).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3"]);
    assert_eq!(path[0].name(), Some("level 0"));
    assert_eq!(
        folder.get_collection("path_collection").unwrap().total_count,
        Some(4)
    );
}

#[test]
fn item_collection_entries_decode_by_their_own_kind() {
    let folder = pictures();
    let children = folder.item_collection().unwrap();
    assert_eq!(children.total_count, Some(1));
    assert_eq!(children.offset, Some(0));
    assert_eq!(children.limit, Some(100));
    assert_eq!(children.len(), 1);

    let entry = &children.entries[0];
    assert_eq!(entry.kind(), Some("file"));
    let file = File::from_entity(entry.clone()).unwrap();
    assert_eq!(file.name(), Some("tigers.jpeg"));
    assert_eq!(file.sha1(), Some("134b65991ed521fcfe4724b7d814ab8ded5185dc"));
}

#[test]
fn collection_keeps_unrecognized_members() {
    let order = json!([{"by": "type", "direction": "ASC"}]);
    let folder = Folder::decode(&json!({
        "type": "folder",
        "id": "1",
        "item_collection": {
            "total_count": 0,
            "entries": [],
            "offset": 0,
            "limit": 100,
            "order": order.clone()
        },
        "path_collection": {"total_count": 0, "entries": [], "next_marker": null}
    }))
    .unwrap()
    .into_complete()
    .unwrap();

    let children = folder.item_collection().unwrap();
    assert!(children.is_empty());
    assert_eq!(children.limit, Some(100));
    assert_eq!(children.extra.get("order"), Some(&order));
    assert_eq!(children.extra.len(), 1);

    let path = folder.get_collection("path_collection").unwrap();
    assert_eq!(path.extra.get("next_marker"), Some(&serde_json::Value::Null));
}

#[test]
fn item_collection_keeps_unknown_kinds_as_plain_entities() {
    let folder = Folder::decode(&json!({
        "type": "folder",
        "id": "1",
        "item_collection": {"entries": [
            {"type": "widget", "id": "w1", "gizmo": true},
            {"type": "web_link", "id": "b1", "url": "https://example.com"}
        ]}
    }))
    .unwrap()
    .into_complete()
    .unwrap();

    let entries = &folder.item_collection().unwrap().entries;
    assert_eq!(entries[0].kind(), Some("widget"));
    assert_eq!(entries[0].id(), Some("w1"));
    assert_eq!(entries[0].get_raw("gizmo"), Some(&json!(true)));
    assert_eq!(entries[1].kind(), Some("web_link"));
    assert_eq!(entries[1].get_text("url"), Some("https://example.com"));
}

// ── Permissions ──────────────────────────────────────────────────

#[test]
fn permissions_from_full_response() {
    let folder = pictures();
    let granted = folder.permissions().unwrap();
    assert_eq!(granted.len(), 6);
    assert!(granted.contains(Permission::CanUpload));
    assert!(!granted.contains(Permission::CanSetShareAccess));
    assert!(!granted.contains(Permission::CanComment));
}

// ── Field list ───────────────────────────────────────────────────

#[test]
fn all_fields_are_recognized_by_the_table() {
    let schema = Folder::schema();
    for field in Folder::ALL_FIELDS {
        assert!(schema.recognizes(field), "{field} has no rule");
    }
}
