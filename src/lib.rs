//! Koa Flat Map Library
//!
//! This library provides a read-only map from string keys to generic
//! values, laid out as two flat arrays for lookup speed and memory
//! locality. It is built once from a batch of key/value pairs and then
//! shared freely between threads.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - Contiguous, index-addressed storage instead of pointer-linked nodes
//! - A single build pass; no mutation afterward
//! - Lookups that cannot fail, only miss
//! - Zero allocation on the lookup path

// Re-export public modules
pub mod data_structures;

/// Version information for the Koa Flat Map crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
