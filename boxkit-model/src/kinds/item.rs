//! The abstract `item` table shared by folders, files, and bookmarks.

use super::{COLLECTION, ENTITY, FOLDER, USER};
use crate::decoder::DecodeContext;
use crate::entity::Entity;
use crate::error::FieldErrorKind;
use crate::rules::{self, expect_bool, expect_integer, expect_object, expect_str, record_member};
use crate::schema::EntitySchema;
use crate::symbol::{EnumSymbol, SharedLinkAccess};
use crate::value::{FieldValue, SharedLink};
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

pub const FIELD_NAME: &str = "name";
pub const FIELD_SEQUENCE_ID: &str = "sequence_id";
pub const FIELD_ETAG: &str = "etag";
pub const FIELD_CREATED_AT: &str = "created_at";
pub const FIELD_MODIFIED_AT: &str = "modified_at";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_SIZE: &str = "size";
pub const FIELD_PATH_COLLECTION: &str = "path_collection";
pub const FIELD_CREATED_BY: &str = "created_by";
pub const FIELD_MODIFIED_BY: &str = "modified_by";
pub const FIELD_TRASHED_AT: &str = "trashed_at";
pub const FIELD_PURGED_AT: &str = "purged_at";
pub const FIELD_CONTENT_CREATED_AT: &str = "content_created_at";
pub const FIELD_CONTENT_MODIFIED_AT: &str = "content_modified_at";
pub const FIELD_OWNED_BY: &str = "owned_by";
pub const FIELD_SHARED_LINK: &str = "shared_link";
pub const FIELD_PARENT: &str = "parent";
pub const FIELD_ITEM_STATUS: &str = "item_status";
pub const FIELD_PERMISSIONS: &str = "permissions";
pub const FIELD_SYNCED: &str = "synced";
pub const FIELD_ALLOWED_SHARED_LINK_ACCESS_LEVELS: &str = "allowed_shared_link_access_levels";
pub const FIELD_TAGS: &str = "tags";
pub const FIELD_COLLECTIONS: &str = "collections";
pub const FIELD_COMMENT_COUNT: &str = "comment_count";

pub static ITEM: LazyLock<EntitySchema> = LazyLock::new(|| {
    EntitySchema::abstract_builder("item")
        .extends(&ENTITY)
        .rule(FIELD_NAME, rules::text)
        .rule(FIELD_SEQUENCE_ID, rules::text)
        .rule(FIELD_ETAG, rules::text)
        .rule(FIELD_CREATED_AT, rules::timestamp)
        .rule(FIELD_MODIFIED_AT, rules::timestamp)
        .rule(FIELD_DESCRIPTION, rules::text)
        .rule(FIELD_SIZE, rules::integer)
        .rule(FIELD_PATH_COLLECTION, path_collection)
        .rule(FIELD_CREATED_BY, user)
        .rule(FIELD_MODIFIED_BY, user)
        .rule(FIELD_TRASHED_AT, rules::timestamp)
        .rule(FIELD_PURGED_AT, rules::timestamp)
        .rule(FIELD_CONTENT_CREATED_AT, rules::timestamp)
        .rule(FIELD_CONTENT_MODIFIED_AT, rules::timestamp)
        .rule(FIELD_OWNED_BY, user)
        .rule(FIELD_SHARED_LINK, shared_link)
        .rule(FIELD_PARENT, parent)
        .rule(FIELD_ITEM_STATUS, rules::text)
        .rule(FIELD_PERMISSIONS, rules::permissions)
        .rule(FIELD_SYNCED, rules::boolean)
        .rule(FIELD_ALLOWED_SHARED_LINK_ACCESS_LEVELS, rules::symbols::<SharedLinkAccess>)
        .rule(FIELD_TAGS, rules::texts)
        .rule(FIELD_COLLECTIONS, collections)
        .rule(FIELD_COMMENT_COUNT, rules::integer)
        .build()
});

fn folder_entry(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<Entity, FieldErrorKind> {
    ctx.decode_entity(&FOLDER, value)
}

fn collection_entry(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<Entity, FieldErrorKind> {
    ctx.decode_entity(&COLLECTION, value)
}

fn path_collection(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    rules::collection(ctx, value, folder_entry).map(FieldValue::Collection)
}

fn parent(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    folder_entry(ctx, value).map(|e| FieldValue::Entity(Box::new(e)))
}

fn user(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    ctx.decode_entity(&USER, value)
        .map(|e| FieldValue::Entity(Box::new(e)))
}

fn collections(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    rules::entity_list(ctx, value, collection_entry).map(FieldValue::Entities)
}

fn shared_link(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    let object = expect_object(value)?;
    let mut link = SharedLink::default();

    for (name, member) in object {
        match name.as_str() {
            "url" => link.url = record_member(ctx, name, member, |_, v| expect_str(v).map(str::to_owned)),
            "download_url" => {
                link.download_url = record_member(ctx, name, member, |_, v| expect_str(v).map(str::to_owned))
            }
            "vanity_url" => {
                link.vanity_url = record_member(ctx, name, member, |_, v| expect_str(v).map(str::to_owned))
            }
            "is_password_enabled" => {
                link.is_password_enabled = record_member(ctx, name, member, |_, v| expect_bool(v))
            }
            "unshared_at" => {
                link.unshared_at =
                    record_member(ctx, name, member, |ctx, v| ctx.parse_timestamp(expect_str(v)?))
            }
            "download_count" => link.download_count = record_member(ctx, name, member, |_, v| expect_integer(v)),
            "preview_count" => link.preview_count = record_member(ctx, name, member, |_, v| expect_integer(v)),
            "access" => {
                link.access = record_member(ctx, name, member, |_, v| {
                    Ok(SharedLinkAccess::parse(expect_str(v)?)?)
                })
            }
            FIELD_PERMISSIONS => {
                link.permissions = record_member(ctx, name, member, |_, v| rules::raw_permissions(v))
            }
            _ => {
                debug!(field = %name, "Keeping unrecognized shared link field");
                link.extra.put(name.as_str(), member.clone());
            }
        }
    }

    Ok(FieldValue::SharedLink(Box::new(link)))
}
