// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Main implementation of the Koa Flat Map.

use crate::data_structures::koa_flat_map::builder;
use crate::data_structures::koa_flat_map::config::{DuplicateKeyPolicy, KoaFlatMapConfig};
use crate::data_structures::koa_flat_map::node::FlatNode;
use crate::data_structures::koa_flat_map::source::MapSource;

/// A read-only map from byte-sequence keys to values of type `T`.
///
/// The map is two flat arrays: fixed-size trie nodes addressed by index,
/// and the values in sorted-key order. A lookup walks one node per key
/// byte using plain array indexing, so it costs O(key length) with no
/// hashing and no per-lookup allocation.
///
/// Once built the map never changes; any number of threads may look up
/// concurrently over a shared instance without coordination.
///
/// # Type Parameters
///
/// * `T` - The value type. The map places no bounds on it.
///
/// # Examples
///
/// ```
/// use koa_flat_map_lib::data_structures::koa_flat_map::KoaFlatMap;
///
/// let map = KoaFlatMap::from_entries([("key1", 42u32), ("key2", 27_644_437), ("l", 2)]);
///
/// assert_eq!(map.lookup_str("key1"), Some(&42));
/// assert_eq!(map.lookup_bytes(b"key2"), Some(&27_644_437));
/// assert_eq!(map.lookup_str("l"), Some(&2));
/// assert_eq!(map.lookup_str("m"), None);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KoaFlatMap<T> {
    /// Flat node array; index 0 is the root of every built map
    store: Vec<FlatNode>,

    /// Values in construction order, addressed by `value_slot - 1`
    values: Vec<T>,
}

impl<T> KoaFlatMap<T> {
    /// Build a map from a batch of key/value pairs with the default
    /// configuration.
    ///
    /// Keys are arbitrary byte sequences, including the empty sequence.
    /// The batch may be empty. Duplicate keys resolve to the last
    /// occurrence in the batch (see [`KoaFlatMapConfig`] to choose
    /// another policy). Construction never fails.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = (K, T)>,
    {
        Self::from_entries_with_config(entries, KoaFlatMapConfig::default())
    }

    /// Build a map from a batch of key/value pairs with the specified
    /// configuration.
    pub fn from_entries_with_config<K, I>(entries: I, config: KoaFlatMapConfig) -> Self
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut entries: Vec<(K, T)> = entries.into_iter().collect();

        // stable byte-lexicographic sort keeps equal keys in batch order,
        // which is what the duplicate policy below selects on
        entries.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));
        match config.get_duplicate_key_policy() {
            DuplicateKeyPolicy::FirstWins => {
                entries.dedup_by(|next, kept| next.0.as_ref() == kept.0.as_ref());
            }
            DuplicateKeyPolicy::LastWins => {
                entries.dedup_by(|next, kept| {
                    if next.0.as_ref() == kept.0.as_ref() {
                        std::mem::swap(kept, next);
                        true
                    } else {
                        false
                    }
                });
            }
        }

        let (keys, values): (Vec<K>, Vec<T>) = entries.into_iter().unzip();
        let store = builder::build_store(&keys);
        tracing::debug!(
            keys = keys.len(),
            nodes = store.len(),
            "built flat byte map from entry batch"
        );

        Self { store, values }
    }

    /// Build a map from a [`MapSource`], the polymorphic capability for
    /// callers that hold their data behind an enumerable interface rather
    /// than a ready-made batch.
    ///
    /// `src.value` is invoked once per distinct key, in sorted order.
    pub fn from_source<S>(src: &S) -> Self
    where
        S: MapSource<T>,
    {
        let mut keys = Vec::new();
        src.append_keys(&mut keys);
        keys.sort();
        // a well-formed source lists each key once; collapse repeats anyway
        keys.dedup();

        let values: Vec<T> = keys.iter().map(|key| src.value(key)).collect();
        let store = builder::build_store(&keys);
        tracing::debug!(
            keys = keys.len(),
            nodes = store.len(),
            "built flat byte map from source"
        );

        Self { store, values }
    }

    /// Look up a key given as raw bytes.
    ///
    /// Returns `None` for any byte sequence that was not in the
    /// construction batch. Absence is a normal result; this method never
    /// panics, including on a map built from an empty batch or on a
    /// [`Default`] handle that was never built at all.
    pub fn lookup_bytes(&self, key: &[u8]) -> Option<&T> {
        // a default (never built) handle has no root node
        let mut node = self.store.first()?;
        for &byte in key {
            let next = node.child_index(byte)?;
            node = self.store.get(next as usize)?;
        }
        self.values.get(node.value_index()?)
    }

    /// Look up a key given as text.
    ///
    /// Defined as [`lookup_bytes`](Self::lookup_bytes) over the string's
    /// UTF-8 bytes; there are no separate text semantics.
    pub fn lookup_str(&self, key: &str) -> Option<&T> {
        self.lookup_bytes(key.as_bytes())
    }

    /// Number of keys in the map.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Default for KoaFlatMap<T> {
    /// A handle that was never built: it holds no nodes at all (not even
    /// a root) and answers `None` for every lookup.
    fn default() -> Self {
        Self {
            store: Vec::new(),
            values: Vec::new(),
        }
    }
}
