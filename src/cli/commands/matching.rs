//! `tagmatch match <tag> <pattern>`: the exit code is the answer, for `if` in shell scripts.

use crate::matcher::TagMatcher;
use std::process::ExitCode;

#[must_use]
pub fn cmd_match(tag: &str, pattern: &str, matcher: &TagMatcher) -> ExitCode {
    if matcher.matches(tag, pattern) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
