use crate::rules;
use crate::schema::EntitySchema;
use std::sync::LazyLock;

pub const FIELD_TYPE: &str = "type";
pub const FIELD_ID: &str = "id";

/// Root table shared by every kind: just the discriminator and the id.
pub static ENTITY: LazyLock<EntitySchema> = LazyLock::new(|| {
    EntitySchema::abstract_builder("entity")
        .rule(FIELD_TYPE, rules::discriminator)
        .rule(FIELD_ID, rules::id)
        .build()
});
