// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Koa Flat Map.

/// Policy applied when the construction batch contains the same key more
/// than once.
///
/// Resolution happens silently during the build pass; duplicates are never
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKeyPolicy {
    /// The first occurrence of a key in the batch supplies its value.
    FirstWins,

    /// The last occurrence of a key in the batch supplies its value,
    /// matching what repeated inserts into an ordinary map would leave
    /// behind. This is the default.
    LastWins,
}

impl Default for DuplicateKeyPolicy {
    fn default() -> Self {
        Self::LastWins
    }
}

/// Configuration for building a Koa Flat Map.
///
/// The built structure is immutable, so every option here affects the
/// build pass only; lookups are not configurable.
#[derive(Debug, Clone)]
pub struct KoaFlatMapConfig {
    /// How to resolve duplicate keys in the construction batch
    duplicate_key_policy: DuplicateKeyPolicy,
}

impl KoaFlatMapConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - duplicate_key_policy: LastWins
    pub fn new() -> Self {
        Self {
            duplicate_key_policy: DuplicateKeyPolicy::LastWins,
        }
    }

    /// Set the policy for duplicate keys in the construction batch.
    pub fn with_duplicate_key_policy(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_key_policy = policy;
        self
    }

    /// Get the configured duplicate-key policy.
    pub fn get_duplicate_key_policy(&self) -> DuplicateKeyPolicy {
        self.duplicate_key_policy
    }
}

impl Default for KoaFlatMapConfig {
    fn default() -> Self {
        Self::new()
    }
}
