//! `tagmatch` - Hierarchical tag-matching filter for log routing.
//!
//! Decides whether a dot-separated tag such as `EduGo.Auth.Login` matches a
//! pattern:
//! - `*` matches within one segment, `**` across segments
//! - `regex:` switches the rest of the pattern to a raw regular expression
//! - compiled patterns live in a bounded, thread-safe FIFO cache
//! - include/exclude rule sets and TOML configuration for logging front-ends
//!
//! # Example
//!
//! ```
//! use tagmatch::TagMatcher;
//!
//! let matcher = TagMatcher::with_capacity(64);
//!
//! assert!(matcher.matches("EduGo.Auth.Login", "EduGo.Auth.*"));
//! assert!(matcher.matches("EduGo.Auth.Login.OAuth", "EduGo.**"));
//! assert!(!matcher.matches("EduGo.Auth.Login", "EduGo.*"));
//! assert!(matcher.matches("EduGo.Auth.Login", r"regex:EduGo\.(Auth|Net)\..+"));
//! assert!(!matcher.matches("x", "regex:(unterminated"));
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `tagmatch` command-line tool

pub mod cache;
pub mod config;
mod error;
pub mod filter;
pub mod internal;
pub mod level;
pub mod matcher;
pub mod pattern;

#[cfg(feature = "cli")]
pub mod cli;

pub use cache::{CacheStats, DEFAULT_CAPACITY, PatternCache};
pub use config::Config;
pub use error::Error;
pub use filter::{TagFilter, TagFilterBuilder};
pub use level::Level;
pub use matcher::{TagMatcher, TagMatcherBuilder, global};
pub use pattern::{CompiledPattern, PatternError, PatternKind, REGEX_PREFIX};
