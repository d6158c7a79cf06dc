//! Values held in an entity's property store.

use crate::entity::Entity;
use crate::permissions::PermissionSet;
use crate::store::PropertyStore;
use crate::symbol::{SharedLinkAccess, Symbol, UploadEmailAccess};
use boxkit_types::Timestamp;
use serde_json::Value;

/// The raw `permissions` object of an item: capability name to JSON value.
///
/// Kept verbatim; the typed view is derived from it, see [`PermissionSet::derive`].
pub type RawPermissions = PropertyStore<Value>;

/// A decoded field value.
///
/// Recognized fields hold the richer variant their decode rule produced;
/// anything the field tables do not know about is kept as [`FieldValue::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A recognized field explicitly sent as `null`.
    Null,
    Bool(bool),
    Integer(i64),
    Text(String),
    Timestamp(Timestamp),
    /// Ordered strings, duplicates kept (tags).
    Texts(Vec<String>),
    Symbol(Symbol),
    /// Ordered enum values (allowed roles, access levels).
    Symbols(Vec<Symbol>),
    Entity(Box<Entity>),
    /// Ordered entities without a surrounding collection object.
    Entities(Vec<Entity>),
    Collection(EntityCollection),
    SharedLink(Box<SharedLink>),
    UploadEmail(UploadEmail),
    Permissions(RawPermissions),
    /// Unrecognized member, stored exactly as received.
    Raw(Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null | Self::Raw(Value::Null))
    }
}

/// A `{ total_count, entries: [...] }` collection such as `path_collection`
/// or `item_collection`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityCollection {
    pub total_count: Option<i64>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    /// Entries in the order the server sent them.
    pub entries: Vec<Entity>,
    /// Members not listed above (such as `order`), kept verbatim.
    pub extra: PropertyStore<Value>,
}

impl EntityCollection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entries.iter()
    }
}

/// A shared link attached to an item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SharedLink {
    pub url: Option<String>,
    pub download_url: Option<String>,
    pub vanity_url: Option<String>,
    pub is_password_enabled: Option<bool>,
    pub unshared_at: Option<Timestamp>,
    pub download_count: Option<i64>,
    pub preview_count: Option<i64>,
    pub access: Option<SharedLinkAccess>,
    pub permissions: Option<RawPermissions>,
    /// Members not listed above, kept verbatim.
    pub extra: PropertyStore<Value>,
}

impl SharedLink {
    /// Capabilities the link grants to whoever opens it.
    pub fn permission_set(&self) -> Option<PermissionSet> {
        self.permissions.as_ref().map(PermissionSet::derive)
    }
}

/// Address for emailing files into a folder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadEmail {
    pub access: Option<UploadEmailAccess>,
    pub email: Option<String>,
    /// Members not listed above, kept verbatim.
    pub extra: PropertyStore<Value>,
}
