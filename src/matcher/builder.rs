//! Stepwise construction for [`TagMatcher`], so config-driven and programmatic
//! setups read the same way.

use super::TagMatcher;
use crate::cache::DEFAULT_CAPACITY;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct TagMatcherBuilder {
    capacity: usize,
    warm: Vec<String>,
}

impl Default for TagMatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TagMatcherBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            warm: Vec::new(),
        }
    }

    /// Upper bound on cached compiled patterns.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Patterns to compile at build time so the first log line doesn't pay for them.
    ///
    /// Warmed patterns take cache slots in the order given; invalid ones are skipped.
    #[must_use]
    pub fn warm<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warm.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Picks up `[cache] capacity` from a loaded config.
    #[must_use]
    pub const fn config(mut self, config: &Config) -> Self {
        self.capacity = config.cache.capacity;
        self
    }

    #[must_use]
    pub fn build(self) -> TagMatcher {
        let matcher = TagMatcher::with_capacity(self.capacity);
        for pattern in &self.warm {
            matcher.compile(pattern).ok();
        }
        matcher
    }
}
