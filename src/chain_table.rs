//! ChainTable: fixed bucket array over a slotmap entry arena.

use crate::hash;
use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Bucket count used by [`ChainTable::new`].
pub const DEFAULT_BUCKETS: usize = 16;

#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
    next: Option<DefaultKey>,
}

/// A separate-chaining hash table with a bucket count fixed at
/// construction.
///
/// Each bucket head and each entry's `next` link is a key into the
/// shared entry arena; a chain is a singly linked list of arena slots.
/// Keys are unique within a chain: `set` overwrites the value of a
/// byte-equal key in place and appends a new tail entry otherwise.
pub struct ChainTable {
    buckets: Box<[Option<DefaultKey>]>,
    slots: SlotMap<DefaultKey, Entry>, // storage using generational keys
}

impl ChainTable {
    /// Create an empty table with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create an empty table with exactly `bucket_count` buckets. The
    /// count never changes for the life of the table.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn with_buckets(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket count must be nonzero");
        Self {
            buckets: vec![None; bucket_count].into_boxed_slice(),
            slots: SlotMap::with_key(),
        }
    }

    /// Number of buckets, as fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries across all chains.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The bucket `key` maps to. Pure in the key bytes and the bucket
    /// count; equal keys always map to the same bucket.
    pub fn bucket_of(&self, key: &str) -> usize {
        hash::bucket_index(key.as_bytes(), self.buckets.len())
    }

    /// Insert `key` with `value`, or overwrite the value of an existing
    /// byte-equal key in place. The table stores owned copies of both.
    ///
    /// New entries are appended at the tail of their bucket's chain, so
    /// chain order is insertion order within a bucket.
    pub fn set(&mut self, key: &str, value: &str) {
        let bucket = self.bucket_of(key);
        let mut cursor = self.buckets[bucket];
        let mut tail: Option<DefaultKey> = None;
        while let Some(slot) = cursor {
            let entry = &mut self.slots[slot];
            if entry.key == key {
                // Assignment drops the displaced value.
                entry.value = value.to_owned();
                return;
            }
            tail = Some(slot);
            cursor = entry.next;
        }

        let slot = self.slots.insert(Entry {
            key: key.to_owned(),
            value: value.to_owned(),
            next: None,
        });
        match tail {
            Some(tail) => self.slots[tail].next = Some(slot),
            None => self.buckets[bucket] = Some(slot),
        }
    }

    /// Look up `key`, returning a view of its value, or `None` if the
    /// key is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut cursor = self.buckets[self.bucket_of(key)];
        while let Some(slot) = cursor {
            let entry = &self.slots[slot];
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next;
        }
        None
    }

    /// Remove `key` from the table, returning the owned pair if it was
    /// present. Removing an absent key is a no-op, not an error.
    pub fn remove(&mut self, key: &str) -> Option<(String, String)> {
        let bucket = self.bucket_of(key);
        let mut cursor = self.buckets[bucket];
        let mut prev: Option<DefaultKey> = None;
        while let Some(slot) = cursor {
            let entry = &self.slots[slot];
            if entry.key == key {
                // Relink before freeing; the chain never points at a
                // dead slot.
                let next = entry.next;
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(prev) => self.slots[prev].next = next,
                }
                let entry = self
                    .slots
                    .remove(slot)
                    .expect("chain links reference live slots");
                return Some((entry.key, entry.value));
            }
            prev = Some(slot);
            cursor = entry.next;
        }
        None
    }

    /// Iterate all entries as `(&key, &value)`, in bucket-index order,
    /// skipping empty buckets, chain order within each bucket.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            bucket: 0,
            cursor: None,
        }
    }

    /// Iterate one bucket's chain in chain order.
    ///
    /// # Panics
    ///
    /// Panics if `bucket >= self.bucket_count()`.
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            table: self,
            cursor: self.buckets[bucket],
        }
    }
}

impl Default for ChainTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChainTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(&k, &v);
        }
        map.finish()
    }
}

/// Iterator over all entries, bucket-index order then chain order.
pub struct Iter<'a> {
    table: &'a ChainTable,
    bucket: usize,
    cursor: Option<DefaultKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.cursor {
                let entry = &self.table.slots[slot];
                self.cursor = entry.next;
                return Some((&entry.key, &entry.value));
            }
            if self.bucket >= self.table.buckets.len() {
                return None;
            }
            self.cursor = self.table.buckets[self.bucket];
            self.bucket += 1;
        }
    }
}

/// Iterator over a single bucket's chain.
pub struct Chain<'a> {
    table: &'a ChainTable,
    cursor: Option<DefaultKey>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let entry = &self.table.slots[slot];
        self.cursor = entry.next;
        Some((&entry.key, &entry.value))
    }
}
