//! Utility functions and traits for `HashTable`

use crate::{HashTable, Result};

/// Extension trait for `HashTable` that provides additional utility methods
pub trait HashTableExtensions<V> {
    /// Returns the live keys of the table as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns the live values of the table as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns a copy of the value for `key`, or `default` if the key is absent
    fn get_or(&self, key: &str, default: V) -> V;
}

impl<V> HashTableExtensions<V> for HashTable<V>
where
    V: Clone,
{
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn get_or(&self, key: &str, default: V) -> V {
        self.get(key).map_or(default, Clone::clone)
    }
}

/// Creates a `HashTable` from an iterator of key-value pairs, stopping at the
/// first insertion error instead of logging and skipping it like `collect`.
///
/// # Errors
///
/// Propagates the first error returned by [`HashTable::set`].
pub fn try_from_iter<K, V, I>(iter: I) -> Result<HashTable<V>>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = HashTable::new();

    for (key, value) in iter {
        table.set(key, value)?;
    }

    Ok(table)
}
