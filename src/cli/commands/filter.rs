//! `tagmatch filter <pattern> [tags..]`.

use crate::cli::util::read_tags;
use crate::internal;
use crate::matcher::TagMatcher;
use std::process::ExitCode;

/// Prints matching tags one per line. An invalid pattern is reported, then treated as matching nothing.
#[must_use]
pub fn cmd_filter(pattern: &str, args: &[String], matcher: &TagMatcher) -> ExitCode {
    let tags = match read_tags(args) {
        Ok(tags) => tags,
        Err(e) => {
            internal::error("FILTER", &format!("Error reading stdin: {e}"));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = matcher.compile(pattern) {
        internal::warn("FILTER", &format!("Invalid pattern: {e}"));
    }

    let matched = matcher.filter(tags.iter().map(String::as_str), pattern);
    for tag in &matched {
        println!("{tag}");
    }
    internal::debug(
        "FILTER",
        &format!("{} of {} tags matched", matched.len(), tags.len()),
    );
    ExitCode::SUCCESS
}
