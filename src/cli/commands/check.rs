//! `tagmatch check <pattern>...`: validates rule patterns before they go into a config file.

use crate::matcher::TagMatcher;
use std::process::ExitCode;

/// Prints `ok <pattern> -> <regex>` or `invalid <pattern>: <reason>` per pattern.
/// Fails if any pattern is invalid.
#[must_use]
pub fn cmd_check(patterns: &[String], matcher: &TagMatcher) -> ExitCode {
    let mut invalid = 0usize;

    for pattern in patterns {
        match matcher.compile(pattern) {
            Ok(compiled) => println!("ok      {pattern} -> {}", compiled.as_regex().as_str()),
            Err(e) => {
                invalid += 1;
                println!("invalid {pattern}: {e}");
            }
        }
    }

    if invalid == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
