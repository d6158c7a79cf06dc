use crate::decoder::default_decoder;
use crate::entity::Entity;
use crate::error::{Decoded, ModelResult};
use crate::kinds::item::{
    FIELD_ALLOWED_SHARED_LINK_ACCESS_LEVELS, FIELD_COLLECTIONS, FIELD_COMMENT_COUNT,
    FIELD_CONTENT_CREATED_AT, FIELD_CONTENT_MODIFIED_AT, FIELD_CREATED_AT, FIELD_CREATED_BY,
    FIELD_DESCRIPTION, FIELD_ETAG, FIELD_ITEM_STATUS, FIELD_MODIFIED_AT, FIELD_MODIFIED_BY,
    FIELD_NAME, FIELD_OWNED_BY, FIELD_PARENT, FIELD_PATH_COLLECTION, FIELD_PURGED_AT,
    FIELD_SEQUENCE_ID, FIELD_SHARED_LINK, FIELD_SIZE, FIELD_SYNCED, FIELD_TAGS, FIELD_TRASHED_AT,
};
use crate::kinds::{Collection, Folder, User};
use crate::permissions::PermissionSet;
use crate::schema::EntitySchema;
use crate::symbol::SharedLinkAccess;
use crate::value::SharedLink;
use boxkit_types::{EntityId, Timestamp};
use serde_json::Value;
use std::any::Any;
use std::fmt;

/// A typed view over an [`Entity`] of one concrete kind.
///
/// Implementors are thin wrappers; all data lives in the entity.
pub trait TypedEntity: Sized {
    /// Discriminator this view accepts.
    const KIND: &'static str;

    fn schema() -> &'static EntitySchema;

    /// Wraps `entity` without checking its kind.
    fn from_entity_unchecked(entity: Entity) -> Self;

    fn as_entity(&self) -> &Entity;

    fn into_entity(self) -> Entity;

    /// Wraps `entity` if it was decoded with this view's table, otherwise
    /// hands it back.
    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        if entity.schema().kind() == Self::KIND {
            Ok(Self::from_entity_unchecked(entity))
        } else {
            Err(entity)
        }
    }

    /// Decodes with the default decoder.
    fn decode(value: &Value) -> ModelResult<Decoded<Self>> {
        default_decoder().decode_as(value)
    }

    /// Parses JSON text and decodes it with the default decoder.
    fn decode_str(text: &str) -> ModelResult<Decoded<Self>> {
        default_decoder().decode_str(text)
    }

    /// A stub holding only `id` and `type`.
    fn from_id(id: EntityId) -> Self {
        Self::from_entity_unchecked(Entity::stub(Self::schema(), id))
    }
}

/// Accessors shared by folders, files, and bookmarks.
///
/// Nested entities (parent, users, path collection) are returned as copies.
pub trait Item: fmt::Debug + Send + Sync + Any {
    fn entity(&self) -> &Entity;

    fn as_any(&self) -> &dyn Any;

    fn id(&self) -> Option<&str> {
        self.entity().id()
    }

    fn kind(&self) -> Option<&str> {
        self.entity().kind()
    }

    fn name(&self) -> Option<&str> {
        self.entity().get_text(FIELD_NAME)
    }

    fn etag(&self) -> Option<&str> {
        self.entity().get_text(FIELD_ETAG)
    }

    fn sequence_id(&self) -> Option<&str> {
        self.entity().get_text(FIELD_SEQUENCE_ID)
    }

    fn description(&self) -> Option<&str> {
        self.entity().get_text(FIELD_DESCRIPTION)
    }

    /// Size in bytes. For folders, the total of everything inside.
    fn size(&self) -> Option<i64> {
        self.entity().get_integer(FIELD_SIZE)
    }

    fn item_status(&self) -> Option<&str> {
        self.entity().get_text(FIELD_ITEM_STATUS)
    }

    fn created_at(&self) -> Option<Timestamp> {
        self.entity().get_timestamp(FIELD_CREATED_AT)
    }

    fn modified_at(&self) -> Option<Timestamp> {
        self.entity().get_timestamp(FIELD_MODIFIED_AT)
    }

    fn trashed_at(&self) -> Option<Timestamp> {
        self.entity().get_timestamp(FIELD_TRASHED_AT)
    }

    fn purged_at(&self) -> Option<Timestamp> {
        self.entity().get_timestamp(FIELD_PURGED_AT)
    }

    fn content_created_at(&self) -> Option<Timestamp> {
        self.entity().get_timestamp(FIELD_CONTENT_CREATED_AT)
    }

    fn content_modified_at(&self) -> Option<Timestamp> {
        self.entity().get_timestamp(FIELD_CONTENT_MODIFIED_AT)
    }

    /// Ancestor folders, root first.
    fn path_collection(&self) -> Option<Vec<Folder>> {
        let collection = self.entity().get_collection(FIELD_PATH_COLLECTION)?;
        Some(
            collection
                .iter()
                .cloned()
                .filter_map(|e| Folder::from_entity(e).ok())
                .collect(),
        )
    }

    fn created_by(&self) -> Option<User> {
        user_field(self.entity(), FIELD_CREATED_BY)
    }

    fn modified_by(&self) -> Option<User> {
        user_field(self.entity(), FIELD_MODIFIED_BY)
    }

    fn owned_by(&self) -> Option<User> {
        user_field(self.entity(), FIELD_OWNED_BY)
    }

    fn shared_link(&self) -> Option<&SharedLink> {
        self.entity().get_shared_link(FIELD_SHARED_LINK)
    }

    fn parent(&self) -> Option<Folder> {
        let parent = self.entity().get_entity(FIELD_PARENT)?;
        Folder::from_entity(parent.clone()).ok()
    }

    fn is_synced(&self) -> Option<bool> {
        self.entity().get_bool(FIELD_SYNCED)
    }

    fn comment_count(&self) -> Option<i64> {
        self.entity().get_integer(FIELD_COMMENT_COUNT)
    }

    fn allowed_shared_link_access_levels(&self) -> Option<Vec<SharedLinkAccess>> {
        self.entity()
            .get_symbols(FIELD_ALLOWED_SHARED_LINK_ACCESS_LEVELS)
    }

    /// Tags in server order, duplicates included.
    fn tags(&self) -> Option<&[String]> {
        self.entity().get_texts(FIELD_TAGS)
    }

    fn collections(&self) -> Option<Vec<Collection>> {
        let entities = self.entity().get_entities(FIELD_COLLECTIONS)?;
        Some(
            entities
                .iter()
                .cloned()
                .filter_map(|e| Collection::from_entity(e).ok())
                .collect(),
        )
    }

    /// See [`Entity::permissions`].
    fn permissions(&self) -> Option<&PermissionSet> {
        self.entity().permissions()
    }
}

fn user_field(entity: &Entity, field: &str) -> Option<User> {
    User::from_entity(entity.get_entity(field)?.clone()).ok()
}

impl dyn Item {
    /// Borrows the concrete view if this item is a `T`.
    pub fn downcast_ref<T: Item>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

impl PartialEq for dyn Item {
    fn eq(&self, other: &Self) -> bool {
        self.entity() == other.entity()
    }
}

/// Declares a typed view struct over [`Entity`] for one concrete kind.
macro_rules! typed_entity {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $schema:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name($crate::entity::Entity);

        impl $crate::typed::TypedEntity for $name {
            const KIND: &'static str = $kind;

            fn schema() -> &'static $crate::schema::EntitySchema {
                &*$schema
            }

            fn from_entity_unchecked(entity: $crate::entity::Entity) -> Self {
                Self(entity)
            }

            fn as_entity(&self) -> &$crate::entity::Entity {
                &self.0
            }

            fn into_entity(self) -> $crate::entity::Entity {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::entity::Entity;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

/// Marks a typed view as an [`Item`].
macro_rules! item_kind {
    ($name:ident) => {
        impl $crate::typed::Item for $name {
            fn entity(&self) -> &$crate::entity::Entity {
                &self.0
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    };
}

pub(crate) use item_kind;
pub(crate) use typed_entity;
