//! chain-table: a fixed-bucket, separate-chaining hash table for owned
//! string keys and values, with arena-backed chains.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, fully safe chained hash table whose bucket count is
//!   chosen once at construction and never changes.
//! - Layout:
//!   - A fixed array of bucket heads, each an `Option` of an arena key
//!     into a shared entry pool.
//!   - A `SlotMap` arena holding every `Entry { key, value, next }`;
//!     `next` is another arena key, so a bucket's chain is a singly
//!     linked list expressed entirely in indices.
//! - Placement: `hash::fold_key` folds the key's bytes through a
//!   wrapping `acc * 37 + byte` accumulator; the bucket index is the
//!   accumulator modulo the bucket count. Wraparound on long keys is
//!   accepted behavior; it only influences which bucket a key lands in.
//!
//! Constraints
//! - Single-threaded use; the table is a plain owned value and callers
//!   needing to share it across threads must add their own lock.
//! - No resizing or rehashing: the bucket count is fixed for the life
//!   of the table, chains simply grow under load.
//! - Within one chain, keys are unique; `set` updates in place on a
//!   byte-equal key and appends at the tail otherwise.
//! - Ownership is tree-shaped: table -> bucket head -> chain of
//!   entries. Links are only ever created toward a freshly inserted
//!   tail or an existing successor, so no cycle can form and dropping
//!   the table drops the arena wholesale.
//!
//! Why an arena?
//! - Chain links as `slotmap` keys instead of boxes or raw pointers
//!   keep removal a pure relink-then-free: no recursive drop along the
//!   chain, no dangling `next` expressible in safe code, and freed
//!   slots are recycled by later inserts. Generational keys mean a link
//!   to a recycled slot cannot silently resolve to the wrong entry.
//!
//! Notes and non-goals
//! - Not a general-purpose map: keys and values are owned `String`s and
//!   the hash function is fixed, so equal bytes always collide into the
//!   same bucket, deterministically across runs and platforms.
//! - `get` misses are an ordinary `Option::None`, never an error.
//! - `remove` of an absent key is a defined no-op.
//! - Enumeration (`iter`) walks buckets in index order and each chain
//!   in insertion order; it is stable for a fixed mutation history and
//!   is not sorted by key.

mod chain_table;
mod chain_table_proptest;
pub mod hash;

// Public surface
pub use chain_table::{Chain, ChainTable, Iter, DEFAULT_BUCKETS};
