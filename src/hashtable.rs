//! A hash table with separate chaining. The number of buckets is fixed when
//! the table is created and never changes. Every bucket is a singly linked
//! chain of entries whose keys hash to that bucket; a chain never holds the
//! same key twice.
//!
//! Keys are borrowed, not copied. The table can't outlive the strings its
//! keys point into, which the `'k` lifetime enforces.
//!
//! # Examples
//!
//! ```
//! use keyed_search::hashtable::HashTable;
//!
//! let mut table = HashTable::new(13)?;
//! assert_eq!(table.get("Terra"), None);
//!
//! table.insert("Terra", 30.67);
//! table.insert("XRP", 0.93);
//! assert_eq!(table.get("Terra"), Some(&30.67));
//!
//! table.delete("Terra");
//! assert_eq!(table.get("Terra"), None);
//! assert_eq!(table.get("XRP"), Some(&0.93));
//! # Ok::<(), keyed_search::error::Error>(())
//! ```

use std::fmt;
use std::iter;

use crate::config::TableConfig;
use crate::error::{Error, Result};
use crate::util;

/// The chain hanging off a bucket, or the rest of a chain after an entry.
type Chain<'k> = Option<Box<Entry<'k>>>;

/// A key and its value, linked to the next entry in the same bucket.
pub struct Entry<'k> {
    key: &'k str,
    value: f32,
    next: Chain<'k>,
}

impl<'k> Entry<'k> {
    /// The key of this entry.
    pub fn key(&self) -> &'k str {
        self.key
    }

    /// The value stored under the key.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The entry after this one in the same bucket.
    pub fn next(&self) -> Option<&Entry<'k>> {
        self.next.as_deref()
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// A fixed-capacity hash table mapping borrowed strings to `f32`s.
pub struct HashTable<'k> {
    buckets: Vec<Chain<'k>>,
    len: usize,
}

impl fmt::Debug for HashTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|entry| (entry.key, entry.value)))
            .finish()
    }
}

impl Drop for HashTable<'_> {
    fn drop(&mut self) {
        self.delete_all();
    }
}

impl<'k> HashTable<'k> {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::with_capacity(capacity))
    }

    /// Creates an empty table laid out as `config` describes.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        if config.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        log::debug!("creating hash table with {} buckets", config.capacity);
        Ok(Self {
            buckets: iter::repeat_with(|| None).take(config.capacity).collect(),
            len: 0,
        })
    }

    /// The number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps `key` to a bucket in `0..capacity`: one plus the sum of the key's bytes, modulo the
    /// capacity. Anagrams always collide.
    pub fn hash(&self, key: &str) -> usize {
        key.bytes()
            .fold(1usize, |sum, byte| sum.wrapping_add(usize::from(byte)))
            % self.capacity()
    }

    /// Finds the entry stored under `key`.
    pub fn search(&self, key: &str) -> Option<&Entry<'k>> {
        self.chain(key).find(|entry| entry.key == key)
    }

    /// Gets the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&f32> {
        self.search(key).map(|entry| &entry.value)
    }

    /// Stores `value` under `key`. An existing entry has its value overwritten in place; otherwise a
    /// new entry becomes the head of the key's bucket. If the entry can't be allocated the table is
    /// left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_search::hashtable::HashTable;
    ///
    /// let mut table = HashTable::new(1)?;
    /// table.insert("first", 1.0);
    /// table.insert("second", 2.0);
    ///
    /// // Everything shares the one bucket, newest first.
    /// let keys: Vec<_> = table.chain("any").map(|e| e.key()).collect();
    /// assert_eq!(keys, ["second", "first"]);
    /// # Ok::<(), keyed_search::error::Error>(())
    /// ```
    pub fn insert(&mut self, key: &'k str, value: f32) {
        if let Some(entry) = self.slot_mut(key) {
            entry.value = value;
            return;
        }

        let Some(mut entry) = util::try_box(Entry {
            key,
            value,
            next: None,
        }) else {
            log::warn!("allocation failed, dropping insert of {key:?}");
            return;
        };
        let index = self.hash(key);
        let head = &mut self.buckets[index];
        entry.next = head.take();
        *head = Some(entry);
        self.len += 1;
    }

    /// Removes the entry stored under `key`. Absent keys are ignored.
    pub fn delete(&mut self, key: &str) {
        let slot = self.slot_mut(key);
        if let Some(mut entry) = slot.take() {
            *slot = entry.next.take();
            self.len -= 1;
        }
    }

    /// Removes every entry, leaving the table as it was when it was created.
    pub fn delete_all(&mut self) {
        for bucket in &mut self.buckets {
            while let Some(mut entry) = bucket.take() {
                *bucket = entry.next.take();
            }
        }
        if self.len > 0 {
            log::trace!("deleted {} entries", self.len);
        }
        self.len = 0;
    }

    /// The entries in `key`'s bucket, from the head of the chain. This includes entries for other
    /// keys that hash to the same bucket.
    pub fn chain(&self, key: &str) -> impl Iterator<Item = &Entry<'k>> + '_ {
        iter::successors(self.buckets[self.hash(key)].as_deref(), |entry| {
            entry.next.as_deref()
        })
    }

    /// Every entry, bucket by bucket, each bucket from the head of its chain.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<'k>> + '_ {
        self.buckets
            .iter()
            .flat_map(|head| iter::successors(head.as_deref(), |entry| entry.next.as_deref()))
    }

    /// Returns the link that points at `key`'s entry, or the empty link at the end of its bucket if
    /// there is none. Rewriting the returned link unlinks or replaces the entry directly.
    fn slot_mut(&mut self, key: &str) -> &mut Chain<'k> {
        let index = self.hash(key);
        let mut slot = &mut self.buckets[index];
        while slot.as_deref().is_some_and(|entry| entry.key != key) {
            if let Some(entry) = slot {
                slot = &mut entry.next;
            }
        }
        slot
    }
}
