//! # Storage Layer
//!
//! This module defines the storage abstraction for timeoff. The
//! [`KeyValueStore`] trait is a flat string-to-string surface, mirroring the
//! device key-value storage the app records leaves in. All leave applications
//! live in one JSON blob under a single key; the store itself knows nothing
//! about records.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one `{key}.json` file per key
//!   inside the data directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing, no persistence

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for blob storage.
///
/// Implementations report honest failures; deciding what a missing or
/// unreadable blob means is left to the callers.
pub trait KeyValueStore {
    /// Get the value stored under a key, `None` when the key has never
    /// been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
