//! Utility functions for the CLI.

use crate::config::Config;
use crate::internal;
use std::io::{self, BufRead};
use std::path::Path;

/// Loads the config from `--config` if given, else from the default location.
///
/// # Errors
/// Whatever [`Config::load_from`] / [`Config::load`] report.
pub fn load_config(path: Option<&Path>) -> Result<Config, crate::Error> {
    path.map_or_else(Config::load, Config::load_from)
}

/// Tags given on the command line, or one per non-empty stdin line when there are none.
///
/// Lines are taken verbatim apart from the line terminator; tags are never trimmed.
///
/// # Errors
/// I/O errors while reading stdin.
pub fn read_tags(args: &[String]) -> io::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    internal::debug("CLI", "Reading tags from stdin");
    collect_lines(io::stdin().lock())
}

pub(crate) fn collect_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut tags = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            tags.push(line);
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_take_precedence() {
        let args = vec!["A.B".to_string()];
        assert_eq!(read_tags(&args).unwrap(), args);
    }

    #[test]
    fn lines_skip_empty_but_keep_spaces() {
        let input = "A.B\n\n C.D \n";
        let tags = collect_lines(input.as_bytes()).unwrap();
        assert_eq!(tags, vec!["A.B".to_string(), " C.D ".to_string()]);
    }
}
