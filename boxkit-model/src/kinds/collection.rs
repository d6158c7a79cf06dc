use super::ENTITY;
use crate::rules;
use crate::schema::EntitySchema;
use crate::typed::typed_entity;
use std::sync::LazyLock;

pub const FIELD_NAME: &str = "name";
pub const FIELD_COLLECTION_TYPE: &str = "collection_type";

pub static COLLECTION: LazyLock<EntitySchema> = LazyLock::new(|| {
    EntitySchema::builder("collection")
        .extends(&ENTITY)
        .rule(FIELD_NAME, rules::text)
        .rule(FIELD_COLLECTION_TYPE, rules::text)
        .build()
});

typed_entity! {
    /// A user-defined grouping of items, such as favorites.
    Collection, "collection", COLLECTION
}

impl Collection {
    pub fn name(&self) -> Option<&str> {
        self.0.get_text(FIELD_NAME)
    }

    pub fn collection_type(&self) -> Option<&str> {
        self.0.get_text(FIELD_COLLECTION_TYPE)
    }
}
