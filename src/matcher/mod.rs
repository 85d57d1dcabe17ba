//! The public matching API. Every entry point answers with a plain `bool` or a
//! filtered list: an invalid pattern is "no match", never an error, so a bad
//! filter cannot break the log statement it guards.

mod builder;

pub use builder::TagMatcherBuilder;

use crate::cache::{CacheStats, PatternCache};
use crate::pattern::{self, CompiledPattern, PatternError};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<TagMatcher> = OnceLock::new();

/// Process-wide matcher with the default capacity, for callers that don't want to thread one through.
///
/// Independent [`TagMatcher`] instances stay available and share nothing with this one.
#[must_use]
pub fn global() -> &'static TagMatcher {
    GLOBAL.get_or_init(TagMatcher::new)
}

/// Matches hierarchical tags against wildcard or `regex:` patterns.
///
/// `Send + Sync`: share one instance across logging threads by reference or `Arc`.
#[derive(Debug, Default)]
pub struct TagMatcher {
    cache: PatternCache,
}

impl TagMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: PatternCache::new(capacity),
        }
    }

    #[must_use]
    pub fn builder() -> TagMatcherBuilder {
        TagMatcherBuilder::new()
    }

    /// True when `tag` fully matches `pattern`.
    ///
    /// Checked in order: blank pattern (false), exact equality (true), `*`/`**` (true),
    /// then the compiled pattern. The shortcuts never touch the cache and are skipped
    /// for `regex:` patterns.
    #[must_use]
    pub fn matches(&self, tag: &str, pattern: &str) -> bool {
        if pattern::is_blank(pattern) {
            return false;
        }

        if !pattern::is_regex(pattern) {
            if tag == pattern {
                return true;
            }
            if pattern == "*" || pattern == "**" {
                return true;
            }
        }

        self.cache
            .get_or_compile(pattern)
            .is_ok_and(|compiled| compiled.is_match(tag))
    }

    /// True if any pattern matches; stops at the first one that does.
    #[must_use]
    pub fn matches_any<I>(&self, tag: &str, patterns: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        patterns
            .into_iter()
            .any(|pattern| self.matches(tag, pattern.as_ref()))
    }

    /// The tags matching `pattern`, in their original order.
    #[must_use]
    pub fn filter<'a, I>(&self, tags: I, pattern: &str) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter()
            .filter(|tag| self.matches(tag, pattern))
            .collect()
    }

    /// Non-blank and compiles. A valid pattern is cached like any other.
    #[must_use]
    pub fn is_valid_pattern(&self, pattern: &str) -> bool {
        self.compile(pattern).is_ok()
    }

    /// Like [`Self::is_valid_pattern`], but says why a pattern was rejected.
    ///
    /// # Errors
    /// The [`PatternError`] from compilation.
    pub fn compile(&self, pattern: &str) -> Result<Arc<CompiledPattern>, PatternError> {
        self.cache.get_or_compile(pattern)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn cache_size(&self) -> usize {
        self.cache.size()
    }

    #[must_use]
    pub const fn cache_capacity(&self) -> usize {
        self.cache.capacity()
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Direct access for introspection (`contains`, `patterns`, `reset_stats`).
    #[must_use]
    pub const fn cache(&self) -> &PatternCache {
        &self.cache
    }
}
