//! TOML configuration loading with `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle detection,
//! merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{CacheConfig, GeneralConfig, RulesConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working matcher,
/// so every section falls back to its default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub cache: CacheConfig,
    pub rules: RulesConfig,
}

/// Scans raw TOML for `source = "..."` directives before deserialization,
/// since serde cannot handle a key that repeats.
/// Returns the extracted paths and the remaining TOML content stripped of those lines.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("source") && trimmed.contains('=') {
            if let Some(path) = trimmed
                .split_once('=')
                .map(|(_, value)| value.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the config from the default location, resolving includes.
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read,
    /// TOML parsing hits a syntax error, or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses config text with no include resolution; `source` lines are ignored.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    /// Recursive loader that expands `source = "..."` includes while tracking
    /// visited paths in `seen` to break include cycles.
    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                let source_config = Self::load_with_sources(source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Appends a sourced config's rules after this file's own, skipping duplicates.
    /// Scalar settings of `self` are never overwritten by an include.
    pub fn merge(&mut self, other: Self) {
        for pattern in other.rules.include {
            if !self.rules.include.contains(&pattern) {
                self.rules.include.push(pattern);
            }
        }
        for pattern in other.rules.exclude {
            if !self.rules.exclude.contains(&pattern) {
                self.rules.exclude.push(pattern);
            }
        }
    }

    /// `<config_dir>/tagmatch/tagmatch.conf`, e.g. `~/.config/tagmatch/tagmatch.conf` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tagmatch").join("tagmatch.conf"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores level as a string for TOML ergonomics; unknown values fall back to `warn`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_sources_strips_lines() {
        let (sources, rest) = extract_sources(
            "source = \"~/a.conf\"\n[cache]\ncapacity = 3\nsource='b.conf'\n",
        );
        assert_eq!(sources, vec!["~/a.conf".to_string(), "b.conf".to_string()]);
        assert_eq!(rest, "[cache]\ncapacity = 3\n");
    }

    #[test]
    fn empty_source_is_dropped() {
        let (sources, rest) = extract_sources("source = \"\"\n");
        assert!(sources.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.cache.capacity, crate::cache::DEFAULT_CAPACITY);
        assert_eq!(config.parse_level(), Level::Warn);
        assert!(config.rules.include.is_empty());
    }

    #[test]
    fn merge_appends_without_duplicates() {
        let mut base = Config::parse("[rules]\ninclude = [\"A.**\"]\n").unwrap();
        let other = Config::parse(
            "[cache]\ncapacity = 7\n[rules]\ninclude = [\"A.**\", \"B.*\"]\nexclude = [\"A.Noise\"]\n",
        )
        .unwrap();
        base.merge(other);
        assert_eq!(base.rules.include, vec!["A.**", "B.*"]);
        assert_eq!(base.rules.exclude, vec!["A.Noise"]);
        assert_eq!(base.cache.capacity, crate::cache::DEFAULT_CAPACITY);
    }
}
