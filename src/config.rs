//! Configuration for the hash table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of buckets used when nothing else is configured. A prime
/// count spreads the additive hash better than a power of two.
pub const DEFAULT_CAPACITY: usize = 101;

/// How a [`HashTable`](crate::hashtable::HashTable) is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    /// Number of buckets. Fixed for the lifetime of the table.
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl TableConfig {
    /// A configuration with the given bucket count.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}
