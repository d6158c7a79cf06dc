use super::ITEM;
use super::base::{FIELD_ID, FIELD_TYPE};
use super::item::*;
use crate::rules;
use crate::schema::EntitySchema;
use crate::typed::{item_kind, typed_entity};
use std::sync::LazyLock;

pub const FIELD_SHA1: &str = "sha1";
pub const FIELD_EXTENSION: &str = "extension";
pub const FIELD_VERSION_NUMBER: &str = "version_number";
pub const FIELD_FILE_VERSION: &str = "file_version";

// `file_version` has no rule; it is kept as raw JSON.
pub static FILE: LazyLock<EntitySchema> = LazyLock::new(|| {
    EntitySchema::builder("file")
        .extends(&ITEM)
        .rule(FIELD_SHA1, rules::text)
        .rule(FIELD_EXTENSION, rules::text)
        .rule(FIELD_VERSION_NUMBER, rules::text)
        .build()
});

typed_entity! {
    /// A file.
    File, "file", FILE
}

item_kind!(File);

impl File {
    /// Every field a file request can ask for.
    pub const ALL_FIELDS: &'static [&'static str] = &[
        FIELD_TYPE,
        FIELD_ID,
        FIELD_FILE_VERSION,
        FIELD_SEQUENCE_ID,
        FIELD_ETAG,
        FIELD_SHA1,
        FIELD_NAME,
        FIELD_DESCRIPTION,
        FIELD_SIZE,
        FIELD_PATH_COLLECTION,
        FIELD_CREATED_AT,
        FIELD_MODIFIED_AT,
        FIELD_TRASHED_AT,
        FIELD_PURGED_AT,
        FIELD_CONTENT_CREATED_AT,
        FIELD_CONTENT_MODIFIED_AT,
        FIELD_CREATED_BY,
        FIELD_MODIFIED_BY,
        FIELD_OWNED_BY,
        FIELD_SHARED_LINK,
        FIELD_PARENT,
        FIELD_ITEM_STATUS,
        FIELD_VERSION_NUMBER,
        FIELD_COMMENT_COUNT,
        FIELD_PERMISSIONS,
        FIELD_EXTENSION,
        FIELD_ALLOWED_SHARED_LINK_ACCESS_LEVELS,
        FIELD_COLLECTIONS,
        FIELD_TAGS,
    ];

    /// Hex SHA-1 of the current version's content.
    pub fn sha1(&self) -> Option<&str> {
        self.0.get_text(FIELD_SHA1)
    }

    pub fn extension(&self) -> Option<&str> {
        self.0.get_text(FIELD_EXTENSION)
    }

    pub fn version_number(&self) -> Option<&str> {
        self.0.get_text(FIELD_VERSION_NUMBER)
    }
}
