use crate::decoder::DecodeContext;
use crate::error::FieldErrorKind;
use crate::value::FieldValue;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::error;

/// Converts one JSON member into a [`FieldValue`].
///
/// `null` never reaches a rule; the decoder stores [`FieldValue::Null`] for
/// recognized fields sent as `null`.
pub type DecodeFn = fn(&mut DecodeContext<'_>, &Value) -> Result<FieldValue, FieldErrorKind>;

/// Field decode table for one entity kind.
///
/// Lookups that miss fall through to the parent schema, so a folder only
/// lists its own fields and inherits the item and entity tables.
pub struct EntitySchema {
    kind: &'static str,
    concrete: bool,
    parent: Option<&'static EntitySchema>,
    rules: HashMap<&'static str, DecodeFn>,
}

impl EntitySchema {
    /// Starts a schema for a concrete kind whose discriminator is `kind`.
    pub fn builder(kind: &'static str) -> SchemaBuilder {
        SchemaBuilder::new(kind, true)
    }

    /// Starts a schema for an abstract kind. Entities decoded with it take
    /// their kind from the `type` member.
    pub fn abstract_builder(name: &'static str) -> SchemaBuilder {
        SchemaBuilder::new(name, false)
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn is_concrete(&self) -> bool {
        self.concrete
    }

    pub fn parent(&self) -> Option<&'static EntitySchema> {
        self.parent
    }

    /// Finds the rule for `field` in this table or the nearest ancestor.
    pub fn rule(&self, field: &str) -> Option<DecodeFn> {
        let mut schema = Some(self);
        while let Some(current) = schema {
            if let Some(rule) = current.rules.get(field) {
                return Some(*rule);
            }
            schema = current.parent;
        }
        None
    }

    pub fn recognizes(&self, field: &str) -> bool {
        self.rule(field).is_some()
    }

    /// True if this schema or one of its ancestors is `kind`.
    pub fn is_a(&self, kind: &str) -> bool {
        self.ancestry().any(|s| s.kind == kind)
    }

    /// Every field name recognized here or by an ancestor, sorted.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = self
            .ancestry()
            .flat_map(|s| s.rules.keys().copied())
            .collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }

    fn ancestry(&self) -> impl Iterator<Item = &EntitySchema> {
        std::iter::successors(Some(self), |s| s.parent.map(|p| p as &Self))
    }
}

impl fmt::Debug for EntitySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut own: Vec<_> = self.rules.keys().collect();
        own.sort_unstable();
        f.debug_struct("EntitySchema")
            .field("kind", &self.kind)
            .field("concrete", &self.concrete)
            .field("parent", &self.parent.map(|p| p.kind))
            .field("fields", &own)
            .finish()
    }
}

/// Builder for [`EntitySchema`].
pub struct SchemaBuilder {
    schema: EntitySchema,
}

impl SchemaBuilder {
    fn new(kind: &'static str, concrete: bool) -> Self {
        Self {
            schema: EntitySchema {
                kind,
                concrete,
                parent: None,
                rules: HashMap::new(),
            },
        }
    }

    /// Falls back to `parent` for fields this table does not list.
    pub fn extends(mut self, parent: &'static EntitySchema) -> Self {
        self.schema.parent = Some(parent);
        self
    }

    /// Registers the rule for `field`.
    ///
    /// A field may override an ancestor's rule, but registering the same field
    /// twice in one table is a defect in the table and panics in debug builds.
    pub fn rule(mut self, field: &'static str, rule: DecodeFn) -> Self {
        if self.schema.rules.insert(field, rule).is_some() {
            error!(kind = self.schema.kind, field, "Duplicate decode rule in field table");
            if cfg!(debug_assertions) {
                panic!(
                    "duplicate decode rule for `{field}` in `{}` table",
                    self.schema.kind
                );
            }
        }
        self
    }

    pub fn build(self) -> EntitySchema {
        self.schema
    }
}
