//! The decode driver: walks a JSON object member by member, dispatches each
//! member through the entity's field table, and collects field errors.

use crate::entity::Entity;
use crate::error::{Decoded, FieldError, FieldErrorKind, ModelError, ModelResult, json_type_name};
use crate::kinds::ENTITY;
use crate::kinds::base::FIELD_TYPE;
use crate::registry::KindRegistry;
use crate::schema::EntitySchema;
use crate::typed::{Item, TypedEntity};
use crate::value::FieldValue;
use boxkit_types::{Timestamp, TimestampParser};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Tunables for decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// How many levels of nested entities to follow before giving up on a
    /// member with [`FieldErrorKind::TooDeep`].
    pub max_depth: usize,
    /// Emit a `debug!` event for every unrecognized member kept as raw JSON.
    pub log_unknown_fields: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: 32,
            log_unknown_fields: false,
        }
    }
}

/// Decodes JSON records into entities.
///
/// Bundles the options, the discriminator registry used for polymorphic
/// decoding, and the timestamp parser.
#[derive(Clone)]
pub struct Decoder {
    options: DecodeOptions,
    registry: KindRegistry,
    parse_timestamp: TimestampParser,
}

static DEFAULT_DECODER: LazyLock<Decoder> = LazyLock::new(Decoder::default);

/// The process-wide decoder behind the convenience entry points.
pub fn default_decoder() -> &'static Decoder {
    &DEFAULT_DECODER
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            registry: KindRegistry::with_defaults(),
            parse_timestamp: Timestamp::parse,
        }
    }

    pub fn with_registry(mut self, registry: KindRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_timestamp_parser(mut self, parser: TimestampParser) -> Self {
        self.parse_timestamp = parser;
        self
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn registry(&self) -> &KindRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut KindRegistry {
        &mut self.registry
    }

    /// Decodes `value` with the given field table.
    pub fn decode(&self, schema: &'static EntitySchema, value: &Value) -> ModelResult<Decoded<Entity>> {
        let object = as_object(value)?;
        let mut ctx = DecodeContext::new(self);
        let entity = ctx.decode_object(schema, object);
        Ok(Decoded::new(entity, ctx.into_errors()))
    }

    /// Decodes `value` as the typed entity `T`.
    pub fn decode_as<T: TypedEntity>(&self, value: &Value) -> ModelResult<Decoded<T>> {
        Ok(self.decode(T::schema(), value)?.map(T::from_entity_unchecked))
    }

    /// Parses `text` as JSON and decodes it as `T`.
    pub fn decode_str<T: TypedEntity>(&self, text: &str) -> ModelResult<Decoded<T>> {
        let value: Value = serde_json::from_str(text)?;
        self.decode_as(&value)
    }

    /// Applies the members of `value` on top of a copy of `base`.
    ///
    /// Members present in `value` replace the stored ones in place; everything
    /// else is carried over. A member that fails to decode removes the stored
    /// value it would have replaced. The result is a new entity with its own derived
    /// views; `base` is left untouched.
    pub fn redecode(&self, base: &Entity, value: &Value) -> ModelResult<Decoded<Entity>> {
        let object = as_object(value)?;
        let mut ctx = DecodeContext::new(self);
        let mut entity = base.detached_copy();
        ctx.apply_members(&mut entity, object);
        entity.prime_permissions();
        Ok(Decoded::new(entity, ctx.into_errors()))
    }

    /// Reads the `type` discriminator and decodes with the registered kind.
    ///
    /// Returns `None` when `value` is not an object, has no string `type`, or
    /// names a kind this decoder does not know. That is an expected outcome
    /// for kinds newer than this library.
    pub fn resolve_and_decode(&self, value: &Value) -> Option<Decoded<Box<dyn Item>>> {
        let object = value.as_object()?;
        let Some(kind) = object.get(FIELD_TYPE).and_then(Value::as_str) else {
            debug!("Record has no discriminator");
            return None;
        };
        let Some(entry) = self.registry.lookup(kind) else {
            debug!(kind, "Unresolvable item kind");
            return None;
        };

        let mut ctx = DecodeContext::new(self);
        let entity = ctx.decode_object(entry.schema, object);
        Some(Decoded::new((entry.construct)(entity), ctx.into_errors()))
    }

    /// Parses `text` as JSON, then behaves like [`Decoder::resolve_and_decode`].
    pub fn resolve_and_decode_str(&self, text: &str) -> ModelResult<Option<Decoded<Box<dyn Item>>>> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.resolve_and_decode(&value))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecodeOptions::default())
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("options", &self.options)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

fn as_object(value: &Value) -> ModelResult<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ModelError::NotAnObject(json_type_name(value)))
}

#[derive(Debug, Clone)]
enum Segment {
    Field(String),
    Index(usize),
}

/// State threaded through the decode rules of one top-level record.
///
/// Tracks where in the record the current member sits, so errors from nested
/// entities carry a full path, and how deep the nesting has gone.
pub struct DecodeContext<'a> {
    decoder: &'a Decoder,
    path: Vec<Segment>,
    schemas: Vec<&'static EntitySchema>,
    errors: Vec<FieldError>,
}

impl<'a> DecodeContext<'a> {
    fn new(decoder: &'a Decoder) -> Self {
        Self {
            decoder,
            path: Vec::new(),
            schemas: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// The schema of the entity whose members are being decoded.
    pub fn schema(&self) -> Option<&'static EntitySchema> {
        self.schemas.last().copied()
    }

    /// Runs the configured timestamp parser.
    pub fn parse_timestamp(&self, text: &str) -> Result<Timestamp, FieldErrorKind> {
        (self.decoder.parse_timestamp)(text)
            .map_err(|_| FieldErrorKind::MalformedTimestamp(text.to_owned()))
    }

    /// Decodes a nested object as a child entity of the given kind.
    pub fn decode_entity(
        &mut self,
        schema: &'static EntitySchema,
        value: &Value,
    ) -> Result<Entity, FieldErrorKind> {
        let object = value.as_object().ok_or(FieldErrorKind::UnexpectedType {
            expected: "object",
            found: json_type_name(value),
        })?;

        let max_depth = self.decoder.options.max_depth;
        if self.schemas.len() > max_depth {
            return Err(FieldErrorKind::TooDeep(max_depth));
        }

        Ok(self.decode_object(schema, object))
    }

    /// Decodes a nested object, picking the schema from its `type` member.
    ///
    /// Unknown or missing kinds fall back to the base entity table so the
    /// record is still kept.
    pub fn resolve_entity(&mut self, value: &Value) -> Result<Entity, FieldErrorKind> {
        let schema = value
            .get(FIELD_TYPE)
            .and_then(Value::as_str)
            .and_then(|kind| self.decoder.registry.lookup(kind))
            .map_or(&*ENTITY, |entry| entry.schema);
        self.decode_entity(schema, value)
    }

    /// Runs `f` with `name` appended to the current path.
    pub fn in_field<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(Segment::Field(name.to_owned()));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Runs `f` with `[index]` appended to the current path.
    pub fn in_index<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(Segment::Index(index));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Records a failure for the member at the current path.
    pub fn report(&mut self, kind: FieldErrorKind) {
        let path = self.path_string();
        warn!(field = %path, error = %kind, "Field failed to decode");
        self.errors.push(FieldError { path, kind });
    }

    fn decode_object(&mut self, schema: &'static EntitySchema, object: &Map<String, Value>) -> Entity {
        let mut entity = Entity::new(schema);
        self.apply_members(&mut entity, object);
        entity.prime_permissions();
        entity
    }

    fn apply_members(&mut self, entity: &mut Entity, object: &Map<String, Value>) {
        let schema = entity.schema();
        self.schemas.push(schema);

        for (name, value) in object {
            self.path.push(Segment::Field(name.clone()));
            match schema.rule(name) {
                Some(_) if value.is_null() => {
                    entity.insert(name, FieldValue::Null);
                }
                Some(rule) => match rule(self, value) {
                    Ok(decoded) => {
                        entity.insert(name, decoded);
                    }
                    Err(kind) => {
                        // A failed member never leaves an older value behind.
                        entity.remove(name);
                        self.report(kind);
                    }
                },
                None => {
                    if self.decoder.options.log_unknown_fields {
                        debug!(field = %self.path_string(), kind = schema.kind(), "Keeping unrecognized field");
                    }
                    entity.insert(name, FieldValue::Raw(value.clone()));
                }
            }
            self.path.pop();
        }

        self.schemas.pop();
    }

    fn path_string(&self) -> String {
        let mut path = String::new();
        for segment in &self.path {
            match segment {
                Segment::Field(name) => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(name);
                }
                Segment::Index(index) => {
                    path.push('[');
                    path.push_str(&index.to_string());
                    path.push(']');
                }
            }
        }
        path
    }
}
