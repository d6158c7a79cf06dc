use super::ITEM;
use super::base::{FIELD_ID, FIELD_TYPE};
use super::item::*;
use crate::decoder::DecodeContext;
use crate::entity::Entity;
use crate::error::FieldErrorKind;
use crate::rules::{self, expect_object, expect_str, record_member};
use crate::schema::EntitySchema;
use crate::symbol::{CollaborationRole, EnumSymbol, SyncState, UploadEmailAccess};
use crate::typed::{item_kind, typed_entity};
use crate::value::{EntityCollection, FieldValue, UploadEmail};
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

pub const FIELD_FOLDER_UPLOAD_EMAIL: &str = "folder_upload_email";
pub const FIELD_HAS_COLLABORATIONS: &str = "has_collaborations";
pub const FIELD_SYNC_STATE: &str = "sync_state";
pub const FIELD_CAN_NON_OWNERS_INVITE: &str = "can_non_owners_invite";
pub const FIELD_ITEM_COLLECTION: &str = "item_collection";
pub const FIELD_IS_EXTERNALLY_OWNED: &str = "is_externally_owned";
pub const FIELD_ALLOWED_INVITEE_ROLES: &str = "allowed_invitee_roles";

pub static FOLDER: LazyLock<EntitySchema> = LazyLock::new(|| {
    EntitySchema::builder("folder")
        .extends(&ITEM)
        .rule(FIELD_FOLDER_UPLOAD_EMAIL, upload_email)
        .rule(FIELD_HAS_COLLABORATIONS, rules::boolean)
        .rule(FIELD_SYNC_STATE, rules::symbol::<SyncState>)
        .rule(FIELD_CAN_NON_OWNERS_INVITE, rules::boolean)
        .rule(FIELD_ITEM_COLLECTION, item_collection)
        .rule(FIELD_IS_EXTERNALLY_OWNED, rules::boolean)
        .rule(FIELD_ALLOWED_INVITEE_ROLES, rules::symbols::<CollaborationRole>)
        .build()
});

typed_entity! {
    /// A folder.
    Folder, "folder", FOLDER
}

item_kind!(Folder);

impl Folder {
    /// Every field a folder request can ask for.
    pub const ALL_FIELDS: &'static [&'static str] = &[
        FIELD_TYPE,
        FIELD_ID,
        FIELD_SEQUENCE_ID,
        FIELD_ETAG,
        FIELD_NAME,
        FIELD_CREATED_AT,
        FIELD_MODIFIED_AT,
        FIELD_DESCRIPTION,
        FIELD_SIZE,
        FIELD_PATH_COLLECTION,
        FIELD_CREATED_BY,
        FIELD_MODIFIED_BY,
        FIELD_TRASHED_AT,
        FIELD_PURGED_AT,
        FIELD_CONTENT_CREATED_AT,
        FIELD_CONTENT_MODIFIED_AT,
        FIELD_OWNED_BY,
        FIELD_SHARED_LINK,
        FIELD_FOLDER_UPLOAD_EMAIL,
        FIELD_PARENT,
        FIELD_ITEM_STATUS,
        FIELD_ITEM_COLLECTION,
        FIELD_SYNC_STATE,
        FIELD_HAS_COLLABORATIONS,
        FIELD_PERMISSIONS,
        FIELD_CAN_NON_OWNERS_INVITE,
        FIELD_IS_EXTERNALLY_OWNED,
        FIELD_ALLOWED_SHARED_LINK_ACCESS_LEVELS,
        FIELD_ALLOWED_INVITEE_ROLES,
        FIELD_COLLECTIONS,
        FIELD_TAGS,
    ];

    pub fn upload_email(&self) -> Option<&UploadEmail> {
        self.0.get_upload_email(FIELD_FOLDER_UPLOAD_EMAIL)
    }

    pub fn has_collaborations(&self) -> Option<bool> {
        self.0.get_bool(FIELD_HAS_COLLABORATIONS)
    }

    pub fn sync_state(&self) -> Option<SyncState> {
        self.0.get_symbol(FIELD_SYNC_STATE)
    }

    pub fn can_non_owners_invite(&self) -> Option<bool> {
        self.0.get_bool(FIELD_CAN_NON_OWNERS_INVITE)
    }

    /// Children of the folder. Entries are decoded by their own `type`;
    /// kinds this library does not know are kept as plain entities.
    pub fn item_collection(&self) -> Option<&EntityCollection> {
        self.0.get_collection(FIELD_ITEM_COLLECTION)
    }

    pub fn is_externally_owned(&self) -> Option<bool> {
        self.0.get_bool(FIELD_IS_EXTERNALLY_OWNED)
    }

    pub fn allowed_invitee_roles(&self) -> Option<Vec<CollaborationRole>> {
        self.0.get_symbols(FIELD_ALLOWED_INVITEE_ROLES)
    }
}

fn item_entry(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<Entity, FieldErrorKind> {
    ctx.resolve_entity(value)
}

fn item_collection(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    rules::collection(ctx, value, item_entry).map(FieldValue::Collection)
}

fn upload_email(ctx: &mut DecodeContext<'_>, value: &Value) -> Result<FieldValue, FieldErrorKind> {
    let object = expect_object(value)?;
    let mut email = UploadEmail::default();

    for (name, member) in object {
        match name.as_str() {
            "access" => {
                email.access = record_member(ctx, name, member, |_, v| {
                    Ok(UploadEmailAccess::parse(expect_str(v)?)?)
                })
            }
            "email" => email.email = record_member(ctx, name, member, |_, v| expect_str(v).map(str::to_owned)),
            _ => {
                debug!(field = %name, "Keeping unrecognized upload email field");
                email.extra.put(name.as_str(), member.clone());
            }
        }
    }

    Ok(FieldValue::UploadEmail(email))
}
