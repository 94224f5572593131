//! Map implementations
//!
//! This module provides a concurrency-safe map for shared key-value state.
//!
//! ## Available Maps
//!
//! - [`SafeMap`]: Reader-writer guarded hash map with atomic insert-if-absent
//!
//! ## Choosing an Operation
//!
//! - Use `put` when the last writer should win
//! - Use `load_or_store` when every caller must agree on a single installed value
//! - Use `load_or_store_with` when building the value is expensive and should only
//!   happen for the caller that actually installs it

pub mod concurrent;

pub use self::concurrent::SafeMap;


#[cfg(all(test, not(loom)))]
mod proptests;
