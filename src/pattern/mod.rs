//! Wildcard grammar for hierarchical tags, compiled down to anchored regexes.
//!
//! | Token      | Meaning                                              |
//! |------------|------------------------------------------------------|
//! | `.`        | literal segment separator                            |
//! | `*`        | zero or more characters inside one segment (no `.`)  |
//! | `**`       | zero or more characters across segments              |
//! | `regex:…`  | the rest of the pattern is a raw regular expression  |
//!
//! Every pattern must match the whole tag; `EduGo.Auth` never matches
//! `EduGo.Auth.Login`.

mod error;

pub use error::PatternError;

use regex::Regex;

/// Marks the remainder of a pattern as a raw regular expression.
pub const REGEX_PREFIX: &str = "regex:";

/// Regex metacharacters the wildcard grammar escapes so they match literally.
const REGEX_SPECIAL: &[char] = &['\\', '^', '$', '[', ']', '(', ')', '{', '}', '+', '?', '|'];

/// Which syntax a pattern was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Wildcard,
    Regex,
}

/// An immutable, compiled pattern. Shared between threads through the cache.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    kind: PatternKind,
    regex: Regex,
}

impl CompiledPattern {
    /// The pattern as the caller wrote it, prefix included.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The anchored expression actually executed.
    #[must_use]
    pub const fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Full-match test; the regex is anchored at both ends.
    #[must_use]
    pub fn is_match(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }
}

/// Blank patterns are rejected outright rather than treated as "match nothing".
#[must_use]
pub fn is_blank(pattern: &str) -> bool {
    pattern.trim().is_empty()
}

#[must_use]
pub fn is_regex(pattern: &str) -> bool {
    pattern.starts_with(REGEX_PREFIX)
}

/// Translates the wildcard grammar into an anchored regex source string.
#[must_use]
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');

    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str(".*");
            }
            '*' => out.push_str("[^.]*"),
            '.' => out.push_str("\\."),
            c if REGEX_SPECIAL.contains(&c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }

    out.push('$');
    out
}

/// Compiles either syntax into a [`CompiledPattern`].
///
/// # Errors
/// [`PatternError::Blank`] for blank input, [`PatternError::EmptyRegex`] for a bare
/// `regex:` prefix, [`PatternError::InvalidRegex`] when the engine rejects the expression.
pub fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    if is_blank(pattern) {
        return Err(PatternError::Blank);
    }

    let (kind, expr) = match pattern.strip_prefix(REGEX_PREFIX) {
        Some("") => return Err(PatternError::EmptyRegex),
        Some(raw) => (PatternKind::Regex, format!("^(?:{raw})$")),
        None => (PatternKind::Wildcard, wildcard_to_regex(pattern)),
    };

    let regex = Regex::new(&expr).map_err(|source| PatternError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        kind,
        regex,
    })
}
