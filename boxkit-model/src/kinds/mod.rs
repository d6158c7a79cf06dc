//! Field tables and typed views for every kind the library knows.
//!
//! Tables chain to their parents: `folder`, `file`, and `bookmark` extend the
//! abstract `item` table, which extends the base `entity` table. `user` and
//! `collection` extend `entity` directly.

pub mod base;
pub mod bookmark;
pub mod collection;
pub mod file;
pub mod folder;
pub mod item;
pub mod user;

pub use base::ENTITY;
pub use bookmark::{BOOKMARK, Bookmark};
pub use collection::{COLLECTION, Collection};
pub use file::{FILE, File};
pub use folder::{FOLDER, Folder};
pub use item::ITEM;
pub use user::{USER, User};
