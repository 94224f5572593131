//! Reader-Writer Guarded HashMap
//!
//! This module implements [`SafeMap`], a hash map wrapped in a single
//! reader-writer lock. Lookups take shared access, so any number of readers
//! proceed together; `put` and the slow path of `load_or_store` take exclusive
//! access.
//!
//! ## Insert-If-Absent
//!
//! `load_or_store` uses double-checked locking:
//!
//! 1. Probe under shared access. A hit returns immediately.
//! 2. Release shared access before asking for exclusive access.
//! 3. Under exclusive access, look again. Another thread may have installed the
//!    key between steps 1 and 3; if so its value is returned and the map is left
//!    untouched.
//! 4. Otherwise insert the candidate.
//!
//! Step 3 is what makes the operation race-free. For any key, however many
//! callers race, exactly one candidate is installed and all of them return it.
//!
//! `put` does not take part in this protocol. A `put` racing a `load_or_store`
//! on the same key resolves as "last exclusive holder wins".
//!
//! ## Example
//!
//! ```rust
//! use concur::map::SafeMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let map = Arc::new(SafeMap::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|id| {
//!         let map = Arc::clone(&map);
//!         thread::spawn(move || map.load_or_store("leader", id))
//!     })
//!     .collect();
//!
//! let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
//! let leader = map.get("leader").unwrap();
//!
//! assert!(results.iter().all(|&(value, _)| value == leader));
//! assert_eq!(results.iter().filter(|&&(_, loaded)| !loaded).count(), 1);
//! ```

use crate::loom::sync::RwLock;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasherDefault, Hash};
use fxhash::FxHasher;
use std::collections::hash_map::{Entry, HashMap};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// A concurrency-safe hash map guarded by a reader-writer lock
///
/// # Type Parameters
///
/// * `K` - The key type, must implement `Hash + Eq`
/// * `V` - The value type; operations returning a value require `V: Clone`
///   since the stored value stays owned by the map
///
/// There is deliberately no removal and no iteration.
///
/// # Examples
///
/// ```rust
/// use concur::map::SafeMap;
///
/// let map: SafeMap<String, i32> = SafeMap::new();
/// map.put("a".to_string(), 1);
/// assert_eq!(map.get("a"), Some(1));
/// assert_eq!(map.get("b"), None);
/// ```
pub struct SafeMap<K, V> {
    data: RwLock<HashMap<K, V, FxBuildHasher>>,
}

impl<K, V> SafeMap<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty map
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty map able to hold at least `capacity` entries without
    /// reallocating
    ///
    /// # Examples
    ///
    /// ```rust
    /// use concur::map::SafeMap;
    ///
    /// let map: SafeMap<u64, String> = SafeMap::with_capacity(128);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: RwLock::new(HashMap::with_capacity_and_hasher(
                capacity,
                FxBuildHasher::default(),
            )),
        }
    }

    /// Insert or overwrite the entry for `key`
    ///
    /// Holds exclusive access for the duration of the insertion. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use concur::map::SafeMap;
    ///
    /// let map = SafeMap::new();
    /// map.put(1, "hello");
    /// map.put(1, "world");
    /// assert_eq!(map.get(&1), Some("world"));
    /// ```
    pub fn put(&self, key: K, value: V) {
        self.data.write().insert(key, value);
    }

    /// Check whether `key` is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.read().contains_key(key)
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// `true` if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl<K, V> SafeMap<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Look up the value stored for `key`
    ///
    /// Takes shared access only, so it runs alongside other readers and waits
    /// for at most one exclusive section.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - a clone of the stored value
    /// * `None` - the key was never stored
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.read().get(key).cloned()
    }

    /// Return the value for `key`, storing `candidate` first if the key is
    /// absent
    ///
    /// # Returns
    ///
    /// `(actual, loaded)` where `loaded` is `true` when `actual` was already
    /// in the map (and `candidate` was dropped), and `false` when `candidate`
    /// was just installed and is what `actual` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use concur::map::SafeMap;
    ///
    /// let map = SafeMap::new();
    /// assert_eq!(map.load_or_store("x", 1), (1, false));
    /// assert_eq!(map.load_or_store("x", 2), (1, true));
    /// assert_eq!(map.get("x"), Some(1));
    /// ```
    pub fn load_or_store(&self, key: K, candidate: V) -> (V, bool) {
        self.load_or_store_with(key, move || candidate)
    }

    /// Like [`load_or_store`](Self::load_or_store), but only builds the
    /// candidate when it is about to be installed
    ///
    /// `make` runs at most once, while exclusive access is held. It must not
    /// touch this map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use concur::map::SafeMap;
    ///
    /// let map = SafeMap::new();
    /// map.put("config", vec![1, 2, 3]);
    ///
    /// let (value, loaded) = map.load_or_store_with("config", || unreachable!());
    /// assert!(loaded);
    /// assert_eq!(value, vec![1, 2, 3]);
    /// ```
    pub fn load_or_store_with<F>(&self, key: K, make: F) -> (V, bool)
    where
        F: FnOnce() -> V,
    {
        // Shared access ends with this statement.
        let existing = self.data.read().get(&key).cloned();
        if let Some(existing) = existing {
            return (existing, true);
        }

        let mut data = self.data.write();
        match data.entry(key) {
            Entry::Occupied(entry) => {
                tracing::trace!("load_or_store: key installed by another thread before re-check");
                (entry.get().clone(), true)
            }
            Entry::Vacant(entry) => (entry.insert(make()).clone(), false),
        }
    }
}

impl<K, V> Default for SafeMap<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for SafeMap<K, V>
where
    K: Hash + Eq,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeMap")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
