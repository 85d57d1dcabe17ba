//! Bounded store of compiled patterns.
//!
//! Eviction is FIFO: the entry inserted first leaves first, no matter how often it
//! was hit since. A hit never moves an entry. Callers expecting LRU will see a hot
//! pattern recompiled once `capacity` newer patterns have been inserted.
//!
//! The whole check-compile-insert sequence runs under one mutex, so two threads
//! asking for the same unseen pattern compile it once and the size bound holds.

use crate::internal;
use crate::level::Level;
use crate::pattern::{self, CompiledPattern, PatternError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// Counters for observing cache behavior from the outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Compile attempts that failed; these never occupy a slot.
    pub failures: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, Arc<CompiledPattern>>,
    /// Insertion order, oldest at the front. Holds exactly the keys of `entries`.
    order: VecDeque<String>,
    stats: CacheStats,
}

impl CacheState {
    /// Removes the first-inserted entry and hands its key back for reporting.
    fn evict_oldest(&mut self) -> Option<String> {
        let Some(oldest) = self.order.pop_front() else {
            debug_assert!(self.entries.is_empty(), "order ledger empty but map is not");
            return None;
        };
        let removed = self.entries.remove(&oldest);
        debug_assert!(removed.is_some(), "ledger key missing from map: {oldest}");
        self.stats.evictions += 1;
        Some(oldest)
    }
}

/// What happened inside the critical section, reported after the lock is released.
enum Lookup {
    Hit(Arc<CompiledPattern>),
    Inserted {
        compiled: Arc<CompiledPattern>,
        evicted: Option<String>,
    },
    Rejected(PatternError),
}

/// Thread-safe FIFO cache from pattern string to compiled matcher.
#[derive(Debug)]
pub struct PatternCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl PatternCache {
    /// A zero capacity is raised to 1 so a freshly compiled pattern always has a slot.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            internal::warn("CACHE", "Cache capacity 0 is not usable, using 1");
        }
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Every mutation leaves map and ledger consistent before anything that can panic,
    /// so a poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached matcher for `pattern`, compiling and inserting it on a miss.
    ///
    /// A failed compile inserts nothing and evicts nothing.
    ///
    /// # Errors
    /// Propagates the [`PatternError`] from compilation.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<CompiledPattern>, PatternError> {
        // The sink is caller-supplied and may match tags through this same cache,
        // so nothing is reported until the lock is released.
        match self.lookup_or_insert(pattern) {
            Lookup::Hit(compiled) => Ok(compiled),
            Lookup::Inserted { compiled, evicted } => {
                if let Some(oldest) = evicted
                    && internal::enabled(Level::Debug)
                {
                    internal::debug("CACHE", &format!("Evicted pattern: {oldest}"));
                }
                if internal::enabled(Level::Trace) {
                    internal::trace(
                        "CACHE",
                        &format!("Compiled {pattern} -> {}", compiled.as_regex().as_str()),
                    );
                }
                Ok(compiled)
            }
            Lookup::Rejected(e) => {
                if internal::enabled(Level::Debug) {
                    internal::debug("CACHE", &format!("Pattern rejected: {e}"));
                }
                Err(e)
            }
        }
    }

    /// The critical section: hit, or compile then evict-and-insert.
    fn lookup_or_insert(&self, pattern: &str) -> Lookup {
        let mut state = self.lock();

        if let Some(hit) = state.entries.get(pattern).cloned() {
            state.stats.hits += 1;
            return Lookup::Hit(hit);
        }
        state.stats.misses += 1;

        let compiled = match pattern::compile(pattern) {
            Ok(compiled) => Arc::new(compiled),
            Err(e) => {
                state.stats.failures += 1;
                return Lookup::Rejected(e);
            }
        };

        let evicted = if state.entries.len() >= self.capacity {
            state.evict_oldest()
        } else {
            None
        };

        state
            .entries
            .insert(pattern.to_string(), Arc::clone(&compiled));
        state.order.push_back(pattern.to_string());
        debug_assert_eq!(state.entries.len(), state.order.len());
        debug_assert!(state.entries.len() <= self.capacity);

        Lookup::Inserted { compiled, evicted }
    }

    /// Read-only check; does not count as a hit.
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        self.lock().entries.contains_key(pattern)
    }

    /// Drops every entry. Counters are kept; see [`Self::reset_stats`].
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    pub fn reset_stats(&self) {
        self.lock().stats = CacheStats::default();
    }

    /// Cached patterns, oldest first.
    #[must_use]
    pub fn patterns(&self) -> Vec<String> {
        self.lock().order.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_returns_same_instance() {
        let cache = PatternCache::new(4);
        let a = cache.get_or_compile("A.*").unwrap();
        let b = cache.get_or_compile("A.*").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.size(), 1);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                evictions: 0,
                failures: 0,
            }
        );
    }

    #[test]
    fn ledger_tracks_insertion_order() {
        let cache = PatternCache::new(2);
        cache.get_or_compile("a").unwrap();
        cache.get_or_compile("b").unwrap();
        cache.get_or_compile("c").unwrap();
        assert_eq!(cache.patterns(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn failure_at_capacity_keeps_entries() {
        let cache = PatternCache::new(1);
        cache.get_or_compile("keep.*").unwrap();
        assert!(cache.get_or_compile("regex:[").is_err());
        assert!(cache.contains("keep.*"));
        assert_eq!(cache.size(), 1);
        assert_eq!(cache.stats().evictions, 0);
        assert_eq!(cache.stats().failures, 1);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let cache = PatternCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.get_or_compile("x").unwrap();
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn clear_keeps_stats() {
        let cache = PatternCache::default();
        cache.get_or_compile("x.*").unwrap();
        cache.clear();
        assert_eq!(cache.size(), 0);
        assert!(cache.patterns().is_empty());
        assert_eq!(cache.stats().misses, 1);
        cache.reset_stats();
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
