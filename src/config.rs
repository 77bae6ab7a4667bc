//! Growth policy of a `HashTable`

use crate::error::{HashTableError, Result};

/// Capacity and growth parameters for a `HashTable`.
///
/// The defaults reproduce the classic policy: start with 8 slots and triple
/// the capacity whenever an insertion would push the load ratio past 0.9.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Number of slots allocated at construction
    pub initial_capacity: usize,
    /// Load ratio above which an insertion first grows the table
    pub max_load_ratio: f64,
    /// Multiplier applied to the capacity on every resize
    pub size_ratio: usize,
}

impl TableConfig {
    /// Default number of slots
    pub const DEFAULT_CAPACITY: usize = 8;
    /// Default growth threshold
    pub const MAX_LOAD_RATIO: f64 = 0.9;
    /// Default growth multiplier
    pub const SIZE_RATIO: usize = 3;

    /// Returns the default configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_CAPACITY,
            max_load_ratio: Self::MAX_LOAD_RATIO,
            size_ratio: Self::SIZE_RATIO,
        }
    }

    /// Sets the initial capacity
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the load ratio threshold
    #[must_use]
    pub const fn with_max_load_ratio(mut self, ratio: f64) -> Self {
        self.max_load_ratio = ratio;
        self
    }

    /// Sets the growth multiplier
    #[must_use]
    pub const fn with_size_ratio(mut self, ratio: usize) -> Self {
        self.size_ratio = ratio;
        self
    }

    /// Checks that the parameters describe a table that can always make room
    /// for the next insertion.
    ///
    /// # Errors
    ///
    /// Returns `HashTableError::InvalidConfig` when the capacity is zero, the
    /// load ratio is not strictly between 0 and 1, or the size ratio is below 2.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(HashTableError::InvalidConfig { reason: "initial capacity must be positive" });
        }
        if !self.max_load_ratio.is_finite() || self.max_load_ratio <= 0.0 || self.max_load_ratio >= 1.0
        {
            return Err(HashTableError::InvalidConfig {
                reason: "max load ratio must be strictly between 0 and 1",
            });
        }
        if self.size_ratio < 2 {
            return Err(HashTableError::InvalidConfig { reason: "size ratio must be at least 2" });
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
