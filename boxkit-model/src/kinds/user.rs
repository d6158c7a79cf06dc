use super::ENTITY;
use crate::rules;
use crate::schema::EntitySchema;
use crate::typed::typed_entity;
use std::sync::LazyLock;

pub const FIELD_NAME: &str = "name";
pub const FIELD_LOGIN: &str = "login";

pub static USER: LazyLock<EntitySchema> = LazyLock::new(|| {
    EntitySchema::builder("user")
        .extends(&ENTITY)
        .rule(FIELD_NAME, rules::text)
        .rule(FIELD_LOGIN, rules::text)
        .build()
});

typed_entity! {
    /// A user reference as embedded in `created_by`, `modified_by`, and
    /// `owned_by`.
    User, "user", USER
}

impl User {
    pub fn name(&self) -> Option<&str> {
        self.0.get_text(FIELD_NAME)
    }

    /// The user's primary email address.
    pub fn login(&self) -> Option<&str> {
        self.0.get_text(FIELD_LOGIN)
    }
}
