// std imports
use std::{
    collections::HashMap,
    sync::{
        PoisonError, RwLock,
        atomic::{AtomicU64, Ordering::Relaxed},
    },
};

// ---

/// Default maximum number of memoized results.
pub const DEFAULT_CAPACITY: usize = 100;

// ---

/// Memo of detection results keyed by the exact input string.
pub trait Cache {
    /// Returns the memoized result for `key`, if any.
    fn get(&self, key: &str) -> Option<bool>;

    /// Memoizes `value` for `key` if there is room left.
    ///
    /// Existing entries are never overwritten or evicted.
    fn put(&self, key: &str, value: bool);

    /// Returns the number of memoized results.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of results that can be memoized.
    fn capacity(&self) -> usize;

    /// Returns lookup statistics collected so far.
    fn stats(&self) -> Stats;
}

// ---

/// Lookup statistics of a [`Cache`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub hits: u64,
    pub misses: u64,
}

impl Stats {
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

// ---

/// Cache that stops growing once it holds `capacity` entries.
///
/// There is no eviction: after the cache is full, new inputs are simply not memoized.
#[derive(Debug)]
pub struct BoundedCache {
    entries: RwLock<HashMap<Box<str>, bool>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl BoundedCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl Default for BoundedCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Cache for BoundedCache {
    #[inline]
    fn get(&self, key: &str) -> Option<bool> {
        let result = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied();

        match result {
            Some(_) => self.hits.fetch_add(1, Relaxed),
            None => self.misses.fetch_add(1, Relaxed),
        };

        result
    }

    fn put(&self, key: &str, value: bool) {
        if self.capacity == 0 {
            return;
        }

        // values are plain booleans, a poisoned map is still consistent
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() < self.capacity && !entries.contains_key(key) {
            entries.insert(key.into(), value);
        }
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn stats(&self) -> Stats {
        Stats {
            hits: self.hits.load(Relaxed),
            misses: self.misses.load(Relaxed),
        }
    }
}

// ---

/// Cache that memoizes nothing.
#[derive(Debug, Default)]
pub struct NoCache {
    misses: AtomicU64,
}

impl Cache for NoCache {
    #[inline]
    fn get(&self, _: &str) -> Option<bool> {
        self.misses.fetch_add(1, Relaxed);
        None
    }

    #[inline]
    fn put(&self, _: &str, _: bool) {}

    fn len(&self) -> usize {
        0
    }

    fn capacity(&self) -> usize {
        0
    }

    fn stats(&self) -> Stats {
        Stats {
            hits: 0,
            misses: self.misses.load(Relaxed),
        }
    }
}

// ---

impl<C: Cache + ?Sized> Cache for Box<C> {
    #[inline]
    fn get(&self, key: &str) -> Option<bool> {
        (**self).get(key)
    }

    #[inline]
    fn put(&self, key: &str, value: bool) {
        (**self).put(key, value)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn stats(&self) -> Stats {
        (**self).stats()
    }
}
