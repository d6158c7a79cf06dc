//! Discriminator registry for polymorphic decoding.

use crate::entity::Entity;
use crate::error::{ModelError, ModelResult};
use crate::kinds::{Bookmark, File, Folder};
use crate::schema::EntitySchema;
use crate::typed::{Item, TypedEntity};
use std::collections::HashMap;

/// Wraps a decoded entity in its typed view.
pub type ItemConstructor = fn(Entity) -> Box<dyn Item>;

/// How to decode and wrap one item kind.
#[derive(Debug, Clone, Copy)]
pub struct KindEntry {
    pub schema: &'static EntitySchema,
    pub construct: ItemConstructor,
}

/// Maps `type` discriminators to the table and view used to decode them.
///
/// New kinds are added with [`KindRegistry::register`]; nothing else in the
/// library needs to change.
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    entries: HashMap<String, KindEntry>,
}

fn construct<T: TypedEntity + Item>(entity: Entity) -> Box<dyn Item> {
    Box::new(T::from_entity_unchecked(entity))
}

impl KindRegistry {
    /// An empty registry: every discriminator is unresolvable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folders, files, and bookmarks.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (kind, entry) in [
            (Folder::KIND, Self::entry_for::<Folder>()),
            (File::KIND, Self::entry_for::<File>()),
            (Bookmark::KIND, Self::entry_for::<Bookmark>()),
        ] {
            registry.entries.insert(kind.to_owned(), entry);
        }
        registry
    }

    fn entry_for<T: TypedEntity + Item>() -> KindEntry {
        KindEntry {
            schema: T::schema(),
            construct: construct::<T>,
        }
    }

    /// Registers the typed view `T` under its own discriminator.
    pub fn register<T: TypedEntity + Item>(&mut self) -> ModelResult<()> {
        self.register_entry(T::KIND, Self::entry_for::<T>())
    }

    /// Registers an entry under `kind`. Fails if `kind` is taken.
    pub fn register_entry(&mut self, kind: impl Into<String>, entry: KindEntry) -> ModelResult<()> {
        let kind = kind.into();
        if self.entries.contains_key(&kind) {
            return Err(ModelError::DuplicateKind(kind));
        }
        self.entries.insert(kind, entry);
        Ok(())
    }

    pub fn lookup(&self, kind: &str) -> Option<&KindEntry> {
        self.entries.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    /// Registered discriminators, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}
