use super::ITEM;
use super::base::{FIELD_ID, FIELD_TYPE};
use super::item::*;
use crate::rules;
use crate::schema::EntitySchema;
use crate::typed::{item_kind, typed_entity};
use std::sync::LazyLock;

pub const FIELD_URL: &str = "url";

pub static BOOKMARK: LazyLock<EntitySchema> = LazyLock::new(|| {
    EntitySchema::builder("web_link")
        .extends(&ITEM)
        .rule(FIELD_URL, rules::text)
        .build()
});

typed_entity! {
    /// A web link stored alongside files and folders.
    ///
    /// The API tags bookmarks with `"type": "web_link"`; that is the only
    /// discriminator that resolves to this view. `"bookmark"` is not a value
    /// the server sends and stays unresolvable.
    Bookmark, "web_link", BOOKMARK
}

item_kind!(Bookmark);

impl Bookmark {
    pub const ALL_FIELDS: &'static [&'static str] = &[
        FIELD_TYPE,
        FIELD_ID,
        FIELD_SEQUENCE_ID,
        FIELD_ETAG,
        FIELD_NAME,
        FIELD_URL,
        FIELD_CREATED_AT,
        FIELD_MODIFIED_AT,
        FIELD_DESCRIPTION,
        FIELD_PATH_COLLECTION,
        FIELD_CREATED_BY,
        FIELD_MODIFIED_BY,
        FIELD_TRASHED_AT,
        FIELD_PURGED_AT,
        FIELD_OWNED_BY,
        FIELD_SHARED_LINK,
        FIELD_PARENT,
        FIELD_ITEM_STATUS,
        FIELD_PERMISSIONS,
        FIELD_COMMENT_COUNT,
        FIELD_ALLOWED_SHARED_LINK_ACCESS_LEVELS,
        FIELD_COLLECTIONS,
        FIELD_TAGS,
    ];

    pub fn url(&self) -> Option<&str> {
        self.0.get_text(FIELD_URL)
    }
}
