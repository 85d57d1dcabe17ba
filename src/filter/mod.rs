//! Include/exclude routing on top of [`TagMatcher`]: the decision a logging
//! front-end makes for every record before handing it to a sink.

use crate::config::Config;
use crate::internal;
use crate::matcher::TagMatcher;
use std::sync::Arc;

/// An immutable rule set. Exclusions win; an empty include list admits every tag.
#[derive(Debug)]
pub struct TagFilter {
    matcher: Arc<TagMatcher>,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl TagFilter {
    #[must_use]
    pub fn builder() -> TagFilterBuilder {
        TagFilterBuilder::default()
    }

    /// Rules and cache capacity from `[rules]` and `[cache]`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::builder()
            .matcher(Arc::new(TagMatcher::builder().config(config).build()))
            .includes(config.rules.include.iter().cloned())
            .excludes(config.rules.exclude.iter().cloned())
            .build()
    }

    #[must_use]
    pub fn allows(&self, tag: &str) -> bool {
        if self.matcher.matches_any(tag, &self.exclude) {
            return false;
        }
        self.include.is_empty() || self.matcher.matches_any(tag, &self.include)
    }

    /// The allowed tags, in their original order.
    #[must_use]
    pub fn apply<'a, I>(&self, tags: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().filter(|tag| self.allows(tag)).collect()
    }

    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.include
    }

    #[must_use]
    pub fn excludes(&self) -> &[String] {
        &self.exclude
    }

    #[must_use]
    pub fn matcher(&self) -> &TagMatcher {
        &self.matcher
    }
}

#[derive(Debug, Default)]
pub struct TagFilterBuilder {
    matcher: Option<Arc<TagMatcher>>,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl TagFilterBuilder {
    /// Share a matcher (and its cache) with other filters. Defaults to a private one.
    #[must_use]
    pub fn matcher(mut self, matcher: Arc<TagMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    #[must_use]
    pub fn includes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(patterns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Invalid rule patterns are kept (they never match) and reported as warnings.
    #[must_use]
    pub fn build(self) -> TagFilter {
        let matcher = self.matcher.unwrap_or_default();
        for pattern in self.include.iter().chain(&self.exclude) {
            if let Err(e) = matcher.compile(pattern) {
                internal::warn("FILTER", &format!("Rule never matches: {e}"));
            }
        }
        TagFilter {
            matcher,
            include: self.include,
            exclude: self.exclude,
        }
    }
}
