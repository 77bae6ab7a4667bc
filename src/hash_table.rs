use std::{iter, mem, slice};

use crate::{
    config::TableConfig,
    error::{HashTableError, Result},
    hash,
};

/// A slot holding a key-value pair
#[derive(Debug, Clone)]
struct Slot<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
    /// Flag indicating whether this entry has been deleted (tombstone)
    deleted: bool,
}

/// A string-keyed hash table using open addressing with linear probing.
///
/// Removal leaves a tombstone in place so that probe chains running through
/// the slot stay intact. Tombstones still count towards the load ratio and are
/// only purged when an insertion grows the table and every live entry is
/// rehashed into the larger array.
///
/// Note: This implementation is not thread-safe. Mutating operations take
/// `&mut self`, so shared access must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    /// The slots storing the key-value pairs, `None` marks an empty slot
    slots: Vec<Option<Slot<V>>>,
    /// Number of live entries
    length: usize,
    /// Number of tombstoned entries still occupying a slot
    deleted: usize,
    /// Growth policy
    config: TableConfig,
}

/// Allocates `capacity` empty slots without requiring `V: Clone`
fn empty_slots<V>(capacity: usize) -> Vec<Option<Slot<V>>> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with 8 slots and the default growth policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(TableConfig::DEFAULT_CAPACITY)
    }

    /// Creates an empty table with the given number of slots and the default
    /// growth policy. A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let config = TableConfig::new().with_initial_capacity(capacity.max(1));
        Self { slots: empty_slots(config.initial_capacity), length: 0, deleted: 0, config }
    }

    /// Creates an empty table from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `HashTableError::InvalidConfig` if the configuration fails
    /// [`TableConfig::validate`].
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { slots: empty_slots(config.initial_capacity), length: 0, deleted: 0, config })
    }

    /// Finds the slot for `key` and the number of slots inspected to reach it.
    ///
    /// Scans from the probe start towards the end of the array and wraps
    /// around, stopping at the first empty slot or at the live slot holding
    /// `key`. Tombstones are stepped over whatever key they hold.
    fn probe(&self, key: &str) -> Result<(usize, usize)> {
        let capacity = self.slots.len();
        let exhausted = || HashTableError::CapacityExhausted { capacity };
        let start = hash::probe_start(key, capacity).ok_or_else(exhausted)?;

        for (step, index) in (start..capacity).chain(0..start).enumerate() {
            let Some(slot) = self.slots.get(index) else { break };
            if slot.as_ref().is_none_or(|slot| !slot.deleted && slot.key == key) {
                log::trace!("resolved {key:?} to slot {index} (start {start})");
                return Ok((index, step.saturating_add(1)));
            }
        }

        Err(exhausted())
    }

    /// Returns the index of the empty slot or live match for `key`
    fn resolve(&self, key: &str) -> Result<usize> {
        self.probe(key).map(|(index, _)| index)
    }

    /// Retrieves the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns `HashTableError::KeyNotFound` when the key has no live entry.
    pub fn get(&self, key: &str) -> Result<&V> {
        let index = self.resolve(key)?;
        match self.slots.get(index) {
            Some(Some(slot)) => Ok(&slot.value),
            _ => Err(HashTableError::key_not_found(key)),
        }
    }

    /// Retrieves a mutable reference to the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns `HashTableError::KeyNotFound` when the key has no live entry.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let index = self.resolve(key)?;
        match self.slots.get_mut(index) {
            Some(Some(slot)) => Ok(&mut slot.value),
            _ => Err(HashTableError::key_not_found(key)),
        }
    }

    /// Returns true if `key` has a live entry
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Inserts or overwrites the value for `key`, returning the previous value.
    ///
    /// If counting this insertion would push the load ratio (live entries plus
    /// tombstones plus one, over capacity) above the configured maximum, the
    /// table is grown first. Overwriting a live key does not change `len`.
    ///
    /// # Errors
    ///
    /// Returns `HashTableError::CapacityExhausted` if no slot could be found,
    /// which only happens when the table invariants are broken.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>> {
        let key = key.into();
        while self.needs_growth() {
            let capacity = self.slots.len();
            let new_capacity = capacity
                .checked_mul(self.config.size_ratio)
                .ok_or(HashTableError::CapacityExhausted { capacity })?;
            self.resize(new_capacity)?;
        }

        let index = self.resolve(&key)?;
        let capacity = self.slots.len();
        let slot_ref =
            self.slots.get_mut(index).ok_or(HashTableError::CapacityExhausted { capacity })?;
        if let Some(slot) = slot_ref.as_mut() {
            return Ok(Some(mem::replace(&mut slot.value, value)));
        }

        *slot_ref = Some(Slot { key, value, deleted: false });
        self.length = self.length.saturating_add(1);
        Ok(None)
    }

    /// Removes the entry for `key` by turning its slot into a tombstone.
    ///
    /// # Errors
    ///
    /// Returns `HashTableError::KeyNotFound` when the key has no live entry.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        let index = self.resolve(key)?;
        match self.slots.get_mut(index) {
            Some(Some(slot)) => {
                slot.deleted = true;
                self.length = self.length.saturating_sub(1);
                self.deleted = self.deleted.saturating_add(1);
                Ok(())
            }
            _ => Err(HashTableError::key_not_found(key)),
        }
    }

    /// Returns how many slots a lookup of `key` inspects, counting the slot it
    /// stops at. Absent keys report the distance to the empty slot that ends
    /// their probe.
    ///
    /// # Errors
    ///
    /// Returns `HashTableError::CapacityExhausted` if probing never stops.
    pub fn probe_length(&self, key: &str) -> Result<usize> {
        self.probe(key).map(|(_, probes)| probes)
    }

    /// Whether inserting one more entry would exceed the maximum load ratio
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn needs_growth(&self) -> bool {
        let used = self.length.saturating_add(self.deleted).saturating_add(1);
        used as f64 / self.slots.len() as f64 > self.config.max_load_ratio
    }

    /// Rehashes every live entry into a fresh array of `capacity` slots,
    /// dropping tombstones along the way.
    ///
    /// Placement runs through `set` on a table of slot indices, so `self` is
    /// left untouched if any reinsertion fails. Only then are the values moved
    /// across.
    fn resize(&mut self, capacity: usize) -> Result<()> {
        let mut rebuilt = HashTable::<usize> {
            slots: empty_slots(capacity),
            length: 0,
            deleted: 0,
            config: self.config,
        };
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(slot) = slot.as_ref().filter(|slot| !slot.deleted) {
                rebuilt.set(slot.key.as_str(), index)?;
            }
        }

        let old_capacity = self.slots.len();
        let purged = self.deleted;
        let mut old_slots = mem::take(&mut self.slots);
        self.slots = rebuilt
            .slots
            .into_iter()
            .map(|placed| {
                let placed = placed?;
                let old = old_slots.get_mut(placed.value)?.take()?;
                Some(Slot { key: placed.key, value: old.value, deleted: false })
            })
            .collect();
        self.length = rebuilt.length;
        self.deleted = 0;

        log::debug!(
            "resized table from {old_capacity} to {} slots, {} live entries, {purged} tombstones purged",
            self.slots.len(),
            self.length
        );
        Ok(())
    }

    /// Returns the number of live entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the table holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of tombstones waiting for the next resize
    #[must_use]
    pub fn deleted(&self) -> usize {
        self.deleted
    }

    /// Returns the number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the fraction of slots currently taken by live entries and
    /// tombstones.
    ///
    /// This is the present occupancy, not the growth trigger: `set` grows the
    /// table when `(len + deleted + 1) / capacity` would exceed the configured
    /// maximum, so the value returned here stays at or below that maximum.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_ratio(&self) -> f64 {
        self.length.saturating_add(self.deleted) as f64 / self.slots.len() as f64
    }

    /// Returns the growth policy of the table
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Empties every slot, keeping the current capacity
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.length = 0;
        self.deleted = 0;
    }

    /// Returns an iterator over the live key-value pairs in slot order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { slots: self.slots.iter() }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live key-value pairs of a `HashTable`
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Remaining slots of the table
    slots: slice::Iter<'a, Option<Slot<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .flatten()
            .find(|slot| !slot.deleted)
            .map(|slot| (slot.key.as_str(), &slot.value))
    }
}
