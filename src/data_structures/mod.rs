//! Data structures for the Koa Flat Map crate.
//!
//! This module contains the flat byte-trie map and its construction
//! machinery. The implementation adheres to the project requirements:
//! - No unsafe code
//! - Contiguous, index-addressed storage
//! - Read paths free of locks and allocation

pub mod koa_flat_map;

// Re-export common data structures
pub use koa_flat_map::{DuplicateKeyPolicy, KoaFlatMap, KoaFlatMapConfig, MapSource};
