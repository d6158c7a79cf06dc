//! Capability set derived from an item's raw `permissions` object.

use crate::symbol::{EnumSymbol, Permission};
use crate::value::RawPermissions;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

/// The capabilities the current user holds on an item.
///
/// Never decoded directly. Built from the raw permissions object by
/// [`PermissionSet::derive`]: a capability is in the set iff its raw value is
/// boolean `true`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PermissionSet {
    granted: BTreeSet<Permission>,
}

impl PermissionSet {
    /// An empty set: permissions are known and none are granted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derives the set from a raw permissions object.
    ///
    /// `false`, `null`, and non-boolean values grant nothing. Capability names
    /// the [`Permission`] table does not know are skipped.
    pub fn derive(raw: &RawPermissions) -> Self {
        let mut granted = BTreeSet::new();
        for (name, value) in raw.iter() {
            if value != &Value::Bool(true) {
                continue;
            }
            match Permission::parse(name) {
                Ok(permission) => {
                    granted.insert(permission);
                }
                Err(_) => debug!(capability = %name, "Skipping unknown capability"),
            }
        }
        Self { granted }
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    /// Granted capabilities in table order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.granted.iter().copied()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().collect(),
        }
    }
}
