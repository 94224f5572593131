//! Atomic Error Slot
//!
//! [`AtomicError`] lets many threads publish and observe "the current error"
//! without locks.
//!
//! ## Design
//!
//! The slot is an [`ArcSwap`], which always points at a live `Arc` and has no
//! null state. To make "no error" storable, every store wraps the optional
//! error in a fresh, immutable `ErrorHolder` and publishes that instead.
//! `load` reads the holder and hands back the embedded `Option`.
//!
//! - A published holder is never mutated, so readers cannot see a torn value
//! - Each store allocates one holder
//! - Loads and stores never block
//!
//! ## Example
//!
//! ```rust
//! use concur::atomic::AtomicError;
//! use std::io;
//!
//! let status = AtomicError::new();
//! status.store(Some(io::Error::new(io::ErrorKind::TimedOut, "upstream timed out")));
//! assert_eq!(status.load().unwrap().kind(), io::ErrorKind::TimedOut);
//!
//! status.store(None);
//! assert!(status.load().is_none());
//! ```

use arc_swap::ArcSwap;
use core::fmt;
use std::sync::Arc;

/// Lock-free slot holding an optional error
///
/// Loads and stores on one instance form a single linearizable history: a
/// `load` returns the value of the latest completed `store`, or `None` if
/// nothing was stored yet.
pub struct AtomicError<E> {
    slot: ArcSwap<ErrorHolder<E>>,
}

/// Always-present carrier for the optional error.
struct ErrorHolder<E> {
    err: Option<Arc<E>>,
}

impl<E> AtomicError<E> {
    /// Create an empty slot; `load` returns `None` until something is stored
    pub fn new() -> Self {
        Self::from_holder(None)
    }

    fn from_holder(err: Option<Arc<E>>) -> Self {
        Self {
            slot: ArcSwap::from_pointee(ErrorHolder { err }),
        }
    }

    /// Return the most recently stored error, if any
    pub fn load(&self) -> Option<Arc<E>> {
        self.slot.load().err.clone()
    }

    /// Publish `err` as the current error
    ///
    /// `None` clears the slot: subsequent loads return `None`, not whatever
    /// error was stored before.
    pub fn store(&self, err: Option<E>) {
        self.store_arc(err.map(Arc::new));
    }

    /// Publish an error that is already shared behind an `Arc`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use concur::atomic::AtomicError;
    /// use std::sync::Arc;
    ///
    /// let err = Arc::new(std::fmt::Error);
    /// let slot = AtomicError::new();
    /// slot.store_arc(Some(Arc::clone(&err)));
    /// assert!(Arc::ptr_eq(&slot.load().unwrap(), &err));
    /// ```
    pub fn store_arc(&self, err: Option<Arc<E>>) {
        tracing::trace!(cleared = err.is_none(), "publishing error holder");
        self.slot.store(Arc::new(ErrorHolder { err }));
    }
}

impl<E> Default for AtomicError<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Option<E>> for AtomicError<E> {
    fn from(err: Option<E>) -> Self {
        Self::from_holder(err.map(Arc::new))
    }
}

impl<E: fmt::Debug> fmt::Debug for AtomicError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicError").field(&self.load()).finish()
    }
}
