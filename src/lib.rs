//! # Probe Map
//!
//! A string-keyed hash table built on open addressing with linear probing.
//!
//! - Keys are hashed with a 32-bit djb2 variant ([`hash_string`]) and probing
//!   scans consecutive slots, wrapping around the end of the array.
//! - Removal leaves a tombstone so later probes can continue past the slot.
//! - Before an insertion would push `(live + tombstones + 1) / capacity` above
//!   the maximum load ratio (0.9 by default), the table triples its capacity
//!   and rehashes every live entry, purging all tombstones.
//!
//! Lookups of missing keys return [`HashTableError::KeyNotFound`] rather than a
//! sentinel value, so stored values such as `0` or `false` are never mistaken
//! for absence.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probemap::{HashTable, HashTableError};
//!
//! let mut table = HashTable::new();
//!
//! // Insert values
//! table.set("LadyOfLight", "Galadriel")?;
//! table.set("HalfElven", "Arwen")?;
//!
//! // Retrieve values
//! assert_eq!(table.get("HalfElven"), Ok(&"Arwen"));
//!
//! // Update values
//! table.set("HalfElven", "Elrond")?;
//! assert_eq!(table.get("HalfElven"), Ok(&"Elrond"));
//! assert_eq!(table.len(), 2);
//!
//! // Remove values
//! table.remove("HalfElven")?;
//! assert!(matches!(table.get("HalfElven"), Err(HashTableError::KeyNotFound { .. })));
//! # Ok::<(), HashTableError>(())
//! ```
//!
//! ## Growth Policy
//!
//! ```rust
//! use probemap::{HashTable, TableConfig};
//!
//! let config = TableConfig::new().with_initial_capacity(4).with_size_ratio(2);
//! let mut table = HashTable::with_config(config)?;
//!
//! for i in 0..4 {
//!     table.set(format!("key-{i}"), i)?;
//! }
//! assert_eq!(table.capacity(), 8);
//! # Ok::<(), probemap::HashTableError>(())
//! ```

/// Module holding the growth policy parameters
mod config;
/// Module defining the error type
mod error;
/// Module implementing the string hash
mod hash;
/// Module implementing the linear-probing hash table
mod hash_table;
/// Utility functions and traits for the hash table
mod utils;

pub use config::TableConfig;
pub use error::{HashTableError, Result};
pub use hash::{hash_string, probe_start};
pub use hash_table::{HashTable, Iter};
pub use utils::{HashTableExtensions, try_from_iter};
