//! Errors reported by `HashTable` operations

use thiserror::Error;

/// Errors returned by the hash table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashTableError {
    /// The key has no live entry in the table
    #[error("key not found: {key:?}")]
    KeyNotFound {
        /// The key that was looked up
        key: String,
    },
    /// Probing visited every slot without finding an empty or matching one.
    ///
    /// The load ratio check in `set` keeps at least one slot free, so this
    /// signals a broken table invariant rather than a recoverable condition.
    #[error("no empty or matching slot after probing all {capacity} slots")]
    CapacityExhausted {
        /// Capacity of the table at the time of the failed probe
        capacity: usize,
    },
    /// A `TableConfig` was rejected during construction
    #[error("invalid table configuration: {reason}")]
    InvalidConfig {
        /// Which constraint was violated
        reason: &'static str,
    },
}

impl HashTableError {
    /// Builds a `KeyNotFound` for the given key
    pub(crate) fn key_not_found(key: &str) -> Self {
        Self::KeyNotFound { key: key.to_owned() }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HashTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(HashTableError::key_not_found("Maiar").to_string(), "key not found: \"Maiar\"");
        assert_eq!(
            HashTableError::CapacityExhausted { capacity: 8 }.to_string(),
            "no empty or matching slot after probing all 8 slots"
        );
        assert_eq!(
            HashTableError::InvalidConfig { reason: "size ratio must be at least 2" }.to_string(),
            "invalid table configuration: size ratio must be at least 2"
        );
    }
}
