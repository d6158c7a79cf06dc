use std::collections::HashMap;

/// Insertion-ordered map from field name to value.
///
/// Writing an existing key replaces the value in place and keeps the key's
/// original position. Order only matters for iteration; lookups go through
/// the index.
#[derive(Debug, Clone)]
pub struct PropertyStore<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> PropertyStore<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, shifting later keys up one position.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        Some(value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for PropertyStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Two stores are equal when they hold the same pairs in the same order.
impl<V: PartialEq> PartialEq for PropertyStore<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for PropertyStore<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (k, v) in iter {
            store.put(k, v);
        }
        store
    }
}
