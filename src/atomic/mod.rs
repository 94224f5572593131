//! Atomic cells
//!
//! - [`AtomicError`]: Lock-free slot for an optional error shared between threads

pub mod error;

pub use self::error::AtomicError;
