//! # concur
//!
//! Two small, independent concurrency primitives meant to be embedded in larger
//! multi-threaded programs.
//!
//! ## Features
//!
//! - **SafeMap**: A reader-writer guarded hash map with `get`, `put` and an atomic
//!   insert-if-absent (`load_or_store`) built on double-checked locking
//! - **AtomicError**: A lock-free single slot holding an optional error value,
//!   where storing "no error" is an ordinary store
//!
//! ## Quick Start
//!
//! ```rust
//! use concur::{AtomicError, SafeMap};
//!
//! let map: SafeMap<&str, u32> = SafeMap::new();
//! assert_eq!(map.load_or_store("answer", 42), (42, false));
//! assert_eq!(map.load_or_store("answer", 7), (42, true));
//!
//! let last_error: AtomicError<std::io::Error> = AtomicError::new();
//! assert!(last_error.load().is_none());
//! ```
//!
//! ## Thread Safety
//!
//! Both types are `Send + Sync` whenever their contents are, and are meant to be
//! shared behind an `Arc` (or a `static`) without extra synchronization.
//!
//! ## Model Checking
//!
//! Building with `RUSTFLAGS="--cfg loom"` swaps the map's lock for the one from
//! [`loom`](https://docs.rs/loom) so the locking protocol can be checked
//! exhaustively.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

mod loom;

pub mod atomic;
pub mod map;

pub use crate::atomic::AtomicError;
pub use crate::map::SafeMap;
