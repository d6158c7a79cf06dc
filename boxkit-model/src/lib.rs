//! Typed record model for boxkit.
//!
//! Turns JSON records from the remote API into typed entities:
//! - [`Entity`]: the generic record, an ordered property store plus the
//!   field table it was decoded with
//! - [`EntitySchema`]: per-kind table of field decode rules, chained to a
//!   parent table for inherited fields
//! - [`KindRegistry`]: maps `type` discriminators to tables and typed views
//!   for polymorphic decoding
//! - [`Folder`], [`File`], [`Bookmark`], [`User`], [`Collection`]: typed views
//! - [`PermissionSet`]: capabilities derived from an item's raw permissions
//!
//! Unknown members are never dropped: they are kept verbatim as
//! [`FieldValue::Raw`]. Members that fail to decode are left out and
//! reported alongside the entity in [`Decoded::errors`].
//!
//! ```
//! use boxkit_model::{Item, resolve_and_decode};
//! use serde_json::json;
//!
//! let decoded = resolve_and_decode(&json!({"type": "folder", "id": "123"})).unwrap();
//! assert_eq!(decoded.value.id(), Some("123"));
//! assert!(resolve_and_decode(&json!({"type": "widget"})).is_none());
//! ```

mod decoder;
mod entity;
mod error;
pub mod kinds;
mod permissions;
mod registry;
pub mod rules;
mod schema;
mod store;
mod symbol;
mod typed;
mod value;

pub use decoder::{DecodeContext, DecodeOptions, Decoder, default_decoder};
pub use entity::Entity;
pub use error::{Decoded, FieldError, FieldErrorKind, ModelError, ModelResult};
pub use kinds::{Bookmark, Collection, File, Folder, User};
pub use permissions::PermissionSet;
pub use registry::{ItemConstructor, KindEntry, KindRegistry};
pub use schema::{DecodeFn, EntitySchema, SchemaBuilder};
pub use store::PropertyStore;
pub use symbol::{
    CollaborationRole, EnumKind, EnumSymbol, Permission, SharedLinkAccess, Symbol, SyncState,
    UnknownEnumValue, UploadEmailAccess,
};
pub use typed::{Item, TypedEntity};
pub use value::{EntityCollection, FieldValue, RawPermissions, SharedLink, UploadEmail};

pub use boxkit_types::{EntityId, Timestamp, TimestampParser};

/// Decodes `value` as whichever item kind its `type` names, using the default
/// decoder. `None` if the kind is missing or unknown.
pub fn resolve_and_decode(value: &serde_json::Value) -> Option<Decoded<Box<dyn Item>>> {
    default_decoder().resolve_and_decode(value)
}

/// Like [`resolve_and_decode`], starting from JSON text.
pub fn resolve_and_decode_str(text: &str) -> ModelResult<Option<Decoded<Box<dyn Item>>>> {
    default_decoder().resolve_and_decode_str(text)
}
