#![allow(dead_code)]

use serde_json::{Value, json};

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("boxkit_model=debug")
        .with_test_writer()
        .try_init();
}

pub fn folder_stub(id: &str, name: &str) -> Value {
    json!({
        "type": "folder",
        "id": id,
        "sequence_id": null,
        "etag": null,
        "name": name,
    })
}

pub fn user(id: &str, name: &str, login: &str) -> Value {
    json!({"type": "user", "id": id, "name": name, "login": login})
}

/// A full folder response as returned for `GET /folders/{id}`.
pub fn pictures_folder() -> Value {
    json!({
        "type": "folder",
        "id": "11446498",
        "sequence_id": "1",
        "etag": "1",
        "name": "Pictures",
        "created_at": "2012-12-12T10:53:43-08:00",
        "modified_at": "2012-12-12T11:15:04-08:00",
        "description": "Some pictures I took",
        "size": 629644,
        "path_collection": {
            "total_count": 1,
            "entries": [folder_stub("0", "All Files")]
        },
        "created_by": user("17738362", "sean rose", "sean@box.com"),
        "modified_by": user("17738362", "sean rose", "sean@box.com"),
        "owned_by": user("17738362", "sean rose", "sean@box.com"),
        "shared_link": {
            "url": "https://www.box.com/s/vspke7y05sb214wjokpk",
            "download_url": null,
            "vanity_url": null,
            "is_password_enabled": false,
            "unshared_at": null,
            "download_count": 0,
            "preview_count": 0,
            "access": "open",
            "permissions": {"can_download": true, "can_preview": true}
        },
        "folder_upload_email": {
            "access": "open",
            "email": "upload.Picture.k13sdz1@u.box.com"
        },
        "parent": folder_stub("0", "All Files"),
        "item_status": "active",
        "item_collection": {
            "total_count": 1,
            "entries": [{
                "type": "file",
                "id": "5000948880",
                "sequence_id": "3",
                "etag": "3",
                "sha1": "134b65991ed521fcfe4724b7d814ab8ded5185dc",
                "name": "tigers.jpeg"
            }],
            "offset": 0,
            "limit": 100
        },
        "tags": ["approved", "ready to publish"],
        "sync_state": "synced",
        "has_collaborations": false,
        "permissions": {
            "can_download": true,
            "can_upload": true,
            "can_rename": true,
            "can_delete": true,
            "can_share": true,
            "can_invite_collaborator": true,
            "can_set_share_access": false
        },
        "allowed_invitee_roles": ["editor", "viewer"],
        "allowed_shared_link_access_levels": ["open", "company", "collaborators"],
        "is_externally_owned": false
    })
}
