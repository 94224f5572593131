//! Synchronization shim so the same code runs on real locks and under loom.

#[cfg(not(loom))]
pub(crate) mod export {
    pub(crate) mod sync {
        pub(crate) use parking_lot::RwLock;
    }
}

#[cfg(loom)]
pub(crate) mod export {
    pub(crate) mod sync {
        use std::sync::PoisonError;

        pub(crate) use loom::sync::{RwLockReadGuard, RwLockWriteGuard};

        /// `loom::sync::RwLock` with the non-poisoning surface of `parking_lot`.
        pub(crate) struct RwLock<T> {
            inner: loom::sync::RwLock<T>,
        }

        impl<T> RwLock<T> {
            pub(crate) fn new(value: T) -> Self {
                Self {
                    inner: loom::sync::RwLock::new(value),
                }
            }

            pub(crate) fn read(&self) -> RwLockReadGuard<'_, T> {
                self.inner.read().unwrap_or_else(PoisonError::into_inner)
            }

            pub(crate) fn write(&self) -> RwLockWriteGuard<'_, T> {
                self.inner.write().unwrap_or_else(PoisonError::into_inner)
            }
        }
    }
}

pub(crate) use self::export::*;
