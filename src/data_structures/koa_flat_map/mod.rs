// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Koa Flat Map: a read-only string map on a flat, range-compressed byte trie.
//!
//! The map is built once from a batch of key/value pairs and then queried
//! any number of times. Keys are raw byte sequences; one trie level per
//! byte. Instead of pointer-linked nodes, the whole trie is a single array
//! of fixed-size records, each child group a contiguous slot range sized to
//! the min..=max next-byte span actually present, so a lookup is a handful
//! of integer comparisons and one array index per key byte.
//!
//! # Features
//!
//! - O(key length) lookups: no hashing and no per-lookup allocation.
//! - Contiguous, index-addressed storage: two flat arrays that are
//!   trivially relocatable (and serializable through the optional `serde`
//!   feature).
//! - Immutable after construction, safe to share across threads without
//!   locks.
//! - Total API: construction cannot fail and lookups report absence as a
//!   normal `None`, even on an empty or never-built map.
//!
//! # Example
//!
//! ```
//! use koa_flat_map_lib::data_structures::koa_flat_map::KoaFlatMap;
//!
//! let map = KoaFlatMap::from_entries([("key1", 42u32), ("key2", 27_644_437), ("l", 2)]);
//!
//! assert_eq!(map.lookup_str("key1"), Some(&42));
//! assert_eq!(map.lookup_str("l"), Some(&2));
//!
//! // "m" is lexicographically adjacent to "l" but was never inserted
//! assert_eq!(map.lookup_str("m"), None);
//! ```

mod builder;
mod config;
mod map;
mod node;
mod source;

// Re-exports
pub use config::{DuplicateKeyPolicy, KoaFlatMapConfig};
pub use map::KoaFlatMap;
pub use source::MapSource;

#[cfg(test)]
mod tests;
