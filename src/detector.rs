// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::{
    cache::{BoundedCache, Cache, NoCache},
    config, detect,
    settings::Settings,
};

// ---

/// Cache type used by the process-wide detector.
pub type DynCache = Box<dyn Cache + Send + Sync>;

static GLOBAL: Lazy<Detector<DynCache>> = Lazy::new(|| Detector::from_settings(config::get()));

/// Reports whether `text` contains an extglob token, memoizing the result in the
/// process-wide cache.
///
/// The result is always the same as of [`is_extglob`](crate::is_extglob).
pub fn is_extglob_cached(text: &str) -> bool {
    GLOBAL.is_extglob(text)
}

/// Returns the process-wide detector.
pub fn global() -> &'static Detector<DynCache> {
    &GLOBAL
}

// ---

/// Extglob detector with a memo of previous results.
///
/// # Examples
///
/// ```
/// use extglob::{BoundedCache, Cache, Detector};
///
/// let detector = Detector::new(BoundedCache::new(16));
/// assert!(detector.is_extglob("@(a|b)"));
/// assert!(detector.is_extglob("@(a|b)"));
/// assert_eq!(detector.cache().stats().hits, 1);
/// ```
#[derive(Debug, Default)]
pub struct Detector<C = BoundedCache> {
    cache: C,
}

impl<C: Cache> Detector<C> {
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    #[inline]
    pub fn is_extglob(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        if let Some(result) = self.cache.get(text) {
            return result;
        }

        let result = detect::is_extglob(text);
        self.cache.put(text, result);
        result
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn into_cache(self) -> C {
        self.cache
    }
}

impl Detector<DynCache> {
    /// Creates a detector with a cache configured by `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        let cache: DynCache = if settings.cache.enabled {
            log::debug!("cache enabled with capacity {}", settings.cache.capacity);
            Box::new(BoundedCache::new(settings.cache.capacity))
        } else {
            log::debug!("cache disabled");
            Box::new(NoCache::default())
        };

        Self::new(cache)
    }
}
