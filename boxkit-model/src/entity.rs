use crate::decoder::default_decoder;
use crate::error::{Decoded, ModelResult};
use crate::kinds::base::{FIELD_ID, FIELD_TYPE};
use crate::kinds::item::FIELD_PERMISSIONS;
use crate::permissions::PermissionSet;
use crate::schema::EntitySchema;
use crate::store::PropertyStore;
use crate::symbol::EnumSymbol;
use crate::value::{EntityCollection, FieldValue, RawPermissions, SharedLink, UploadEmail};
use boxkit_types::{EntityId, Timestamp};
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// A decoded record of any kind.
///
/// Holds the field values in the order they were decoded, plus the schema
/// they were decoded with. Entities are frozen once decoding finishes; newer
/// data produces a new entity through [`Entity::updated_with`].
///
/// Typed accessors return `None` both when a field is missing and when it
/// holds a value of a different shape.
#[derive(Clone)]
pub struct Entity {
    schema: &'static EntitySchema,
    properties: PropertyStore<FieldValue>,
    permissions: OnceLock<Option<PermissionSet>>,
}

impl Entity {
    /// Creates an empty entity of the given kind.
    pub fn new(schema: &'static EntitySchema) -> Self {
        Self::from_properties(schema, PropertyStore::new())
    }

    /// Wraps already-decoded properties.
    pub fn from_properties(schema: &'static EntitySchema, properties: PropertyStore<FieldValue>) -> Self {
        Self {
            schema,
            properties,
            permissions: OnceLock::new(),
        }
    }

    /// Creates a stub holding only `id` and `type`, for referring to an item
    /// without fetching it. `schema` must be concrete.
    pub fn stub(schema: &'static EntitySchema, id: EntityId) -> Self {
        debug_assert!(
            schema.is_concrete(),
            "stub of abstract `{}` table",
            schema.kind()
        );
        let mut entity = Self::new(schema);
        entity.insert(FIELD_ID, FieldValue::Text(id.into_string()));
        entity.insert(FIELD_TYPE, FieldValue::Text(schema.kind().to_owned()));
        entity
    }

    /// Decodes `value` with the given field table using the default decoder.
    pub fn decode(schema: &'static EntitySchema, value: &Value) -> ModelResult<Decoded<Self>> {
        default_decoder().decode(schema, value)
    }

    /// Returns a new entity with the members of `value` applied on top of
    /// this one. Derived views are recomputed for the new entity.
    ///
    /// Always uses the default decoder: its options, its timestamp parser, and
    /// its kinds. Kinds registered only on a custom [`Decoder`](crate::Decoder)
    /// fall back to plain entities inside nested collections; call
    /// [`Decoder::redecode`](crate::Decoder::redecode) on that decoder instead.
    pub fn updated_with(&self, value: &Value) -> ModelResult<Decoded<Self>> {
        default_decoder().redecode(self, value)
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    /// The kind tag: the schema's kind when it is concrete, otherwise the
    /// `type` member.
    pub fn kind(&self) -> Option<&str> {
        if self.schema.is_concrete() {
            Some(self.schema.kind())
        } else {
            self.get_text(FIELD_TYPE)
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.get_text(FIELD_ID)
    }

    /// The id as an [`EntityId`].
    pub fn entity_id(&self) -> Option<EntityId> {
        self.id().and_then(|id| EntityId::parse(id).ok())
    }

    pub fn properties(&self) -> &PropertyStore<FieldValue> {
        &self.properties
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.properties.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.properties.contains_key(field)
    }

    /// A member kept verbatim because no rule recognized it.
    pub fn get_raw(&self, field: &str) -> Option<&Value> {
        match self.get(field)? {
            FieldValue::Raw(value) => Some(value),
            _ => None,
        }
    }

    pub fn get_text(&self, field: &str) -> Option<&str> {
        match self.get(field)? {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        match self.get(field)? {
            FieldValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn get_integer(&self, field: &str) -> Option<i64> {
        match self.get(field)? {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn get_timestamp(&self, field: &str) -> Option<Timestamp> {
        match self.get(field)? {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn get_texts(&self, field: &str) -> Option<&[String]> {
        match self.get(field)? {
            FieldValue::Texts(texts) => Some(texts),
            _ => None,
        }
    }

    pub fn get_symbol<E: EnumSymbol>(&self, field: &str) -> Option<E> {
        match self.get(field)? {
            FieldValue::Symbol(symbol) => E::from_symbol(symbol),
            _ => None,
        }
    }

    /// An enum list, or `None` if any element is of another enum kind.
    pub fn get_symbols<E: EnumSymbol>(&self, field: &str) -> Option<Vec<E>> {
        match self.get(field)? {
            FieldValue::Symbols(symbols) => symbols.iter().map(E::from_symbol).collect(),
            _ => None,
        }
    }

    pub fn get_entity(&self, field: &str) -> Option<&Entity> {
        match self.get(field)? {
            FieldValue::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn get_entities(&self, field: &str) -> Option<&[Entity]> {
        match self.get(field)? {
            FieldValue::Entities(entities) => Some(entities),
            _ => None,
        }
    }

    pub fn get_collection(&self, field: &str) -> Option<&EntityCollection> {
        match self.get(field)? {
            FieldValue::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn get_shared_link(&self, field: &str) -> Option<&SharedLink> {
        match self.get(field)? {
            FieldValue::SharedLink(link) => Some(link),
            _ => None,
        }
    }

    pub fn get_upload_email(&self, field: &str) -> Option<&UploadEmail> {
        match self.get(field)? {
            FieldValue::UploadEmail(email) => Some(email),
            _ => None,
        }
    }

    /// The raw `permissions` object, if the server sent one.
    pub fn raw_permissions(&self) -> Option<&RawPermissions> {
        match self.get(FIELD_PERMISSIONS)? {
            FieldValue::Permissions(raw) => Some(raw),
            _ => None,
        }
    }

    /// Capabilities derived from the raw `permissions` object.
    ///
    /// `None` means the server sent no permission data; an empty set means it
    /// did and nothing is granted. Computed once and cached.
    pub fn permissions(&self) -> Option<&PermissionSet> {
        self.permissions
            .get_or_init(|| self.raw_permissions().map(PermissionSet::derive))
            .as_ref()
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, value: FieldValue) {
        let field = field.into();
        let touches_permissions = field == FIELD_PERMISSIONS;
        self.properties.put(field, value);
        if touches_permissions {
            self.permissions = OnceLock::new();
        }
    }

    pub(crate) fn remove(&mut self, field: &str) {
        if self.properties.remove(field).is_some() && field == FIELD_PERMISSIONS {
            self.permissions = OnceLock::new();
        }
    }

    /// Computes the derived permission set now instead of on first read.
    pub(crate) fn prime_permissions(&mut self) {
        if self.raw_permissions().is_some() {
            let _ = self.permissions();
        }
    }

    /// A copy sharing no derived state with `self`.
    pub(crate) fn detached_copy(&self) -> Self {
        Self::from_properties(self.schema, self.properties.clone())
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.schema.kind() == other.schema.kind() && self.properties == other.properties
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Entity");
        s.field("kind", &self.kind());
        for (name, value) in self.properties.iter() {
            s.field(name, value);
        }
        s.finish()
    }
}
