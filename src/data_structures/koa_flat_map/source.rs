// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Construction sources for the Koa Flat Map.
//!
//! Callers either hand the build pass a ready-made batch of pairs (see
//! [`KoaFlatMap::from_entries`](crate::data_structures::koa_flat_map::KoaFlatMap::from_entries))
//! or implement [`MapSource`] over whatever already holds their data.
//! Ordinary dictionaries get the trait for free through the blanket
//! implementations below.

use std::collections::{BTreeMap, HashMap};

/// Supplies keys and values for building a
/// [`KoaFlatMap`](crate::data_structures::koa_flat_map::KoaFlatMap).
///
/// # Example
///
/// A source that numbers its keys by position:
///
/// ```
/// use koa_flat_map_lib::data_structures::koa_flat_map::{KoaFlatMap, MapSource};
///
/// struct KeyIndexSource(Vec<String>);
///
/// impl MapSource<u32> for KeyIndexSource {
///     fn append_keys(&self, keys: &mut Vec<String>) {
///         keys.extend(self.0.iter().cloned());
///     }
///
///     fn value(&self, key: &str) -> u32 {
///         self.0.iter().position(|k| k == key).map_or(0, |i| i as u32)
///     }
/// }
///
/// let src = KeyIndexSource(vec!["zero".into(), "one".into(), "two".into()]);
/// let map = KoaFlatMap::from_source(&src);
///
/// assert_eq!(map.lookup_str("one"), Some(&1));
/// assert_eq!(map.lookup_str("three"), None);
/// ```
pub trait MapSource<T> {
    /// Append every key of the source to `keys`.
    fn append_keys(&self, keys: &mut Vec<String>);

    /// The value for `key`.
    ///
    /// Only called with keys previously produced by
    /// [`append_keys`](Self::append_keys).
    fn value(&self, key: &str) -> T;
}

impl<T: Clone> MapSource<T> for HashMap<String, T> {
    fn append_keys(&self, keys: &mut Vec<String>) {
        keys.extend(self.keys().cloned());
    }

    fn value(&self, key: &str) -> T {
        self[key].clone()
    }
}

impl<T: Clone> MapSource<T> for BTreeMap<String, T> {
    fn append_keys(&self, keys: &mut Vec<String>) {
        keys.extend(self.keys().cloned());
    }

    fn value(&self, key: &str) -> T {
        self[key].clone()
    }
}
