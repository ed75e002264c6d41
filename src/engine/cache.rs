//! Compiled-pattern cache.
//!
//! Composite matchers re-derive the same pattern strings on every call to
//! `match`, so the engine memoizes `pattern -> Regex`. The cache is an explicit
//! object owned by a [`FragmentEngine`](super::FragmentEngine) rather than a
//! hidden static, which keeps test runs isolated from one another.
//!
//! ## Invariants
//!
//! - Keys are the exact (already anchored) pattern strings handed to the
//!   builder. Builder flags are a property of the owning engine, so one cache
//!   never mixes flag sets.
//! - With a `limit`, the map never holds more than `limit` entries; it is
//!   flushed wholesale when an insert would exceed it.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Counters reported by [`FragmentEngine::stats`](super::FragmentEngine::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to compile.
    pub misses: u64,
    /// Patterns currently held.
    pub entries: usize,
}

#[derive(Debug, Default)]
struct CacheInner {
    compiled: HashMap<String, Arc<Regex>>,
    hits: u64,
    misses: u64,
}

#[derive(Debug, Default)]
pub(crate) struct PatternCache {
    inner: Mutex<CacheInner>,
    limit: Option<usize>,
}

impl PatternCache {
    pub fn new(limit: Option<usize>) -> Self {
        PatternCache { inner: Mutex::new(CacheInner::default()), limit }
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        // A panic while holding the lock cannot leave the map half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the cached regex for `pattern`, compiling it with `build` on a miss.
    ///
    /// The second element of the tuple is `true` when this call compiled.
    pub fn get_or_compile<F>(&self, pattern: &str, build: F) -> Result<(Arc<Regex>, bool), regex::Error>
    where
        F: FnOnce(&str) -> Result<Regex, regex::Error>,
    {
        let mut inner = self.lock();
        if let Some(re) = inner.compiled.get(pattern) {
            let re = Arc::clone(re);
            inner.hits += 1;
            return Ok((re, false));
        }

        inner.misses += 1;
        let re = Arc::new(build(pattern)?);
        if self.limit.is_some_and(|limit| inner.compiled.len() >= limit) {
            inner.compiled.clear();
        }
        if self.limit != Some(0) {
            inner.compiled.insert(pattern.to_string(), Arc::clone(&re));
        }
        Ok((re, true))
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats { hits: inner.hits, misses: inner.misses, entries: inner.compiled.len() }
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.compiled.clear();
        inner.hits = 0;
        inner.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(pattern: &str) -> Result<Regex, regex::Error> {
        Regex::new(pattern)
    }

    #[test]
    fn second_lookup_is_a_hit() {
        let cache = PatternCache::new(None);
        let (_, fresh) = cache.get_or_compile(r"\d+", build).unwrap();
        assert!(fresh);
        let (_, fresh) = cache.get_or_compile(r"\d+", build).unwrap();
        assert!(!fresh);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, entries: 1 });
    }

    #[test]
    fn limit_flushes_before_growing_past_it() {
        let cache = PatternCache::new(Some(2));
        for pattern in ["a", "b", "c"] {
            cache.get_or_compile(pattern, build).unwrap();
        }
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn compile_errors_are_not_cached() {
        let cache = PatternCache::new(None);
        assert!(cache.get_or_compile("(", build).is_err());
        assert_eq!(cache.stats().entries, 0);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn clear_resets_counters() {
        let cache = PatternCache::new(None);
        cache.get_or_compile("x", build).unwrap();
        cache.clear();
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
